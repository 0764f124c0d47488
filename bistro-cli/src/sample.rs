//! Sample site content seeded by `bistro init`.
//!
//! The sample is the Rest restaurant: one weekly menu page, one about
//! page, and the facade photo the about page references. It exercises
//! every field shape the built-in schemas declare.

use bistro_content::{
    Asset, FieldValue, GroupEntry, Logo, MenuItem, Page, RenditionSize, SiteConfig, Stylesheet,
};
use bistro_fields::defaults::{
    FIELD_DISHES, FIELD_DISH_OF_THE_DAY, FIELD_HISTORY, FIELD_MENU_DESCRIPTION, FIELD_PHOTO,
    SUB_FIELD_DISH_DESCRIPTION, SUB_FIELD_DISH_NAME, SUB_FIELD_DISH_PRICE, TEMPLATE_ABOUT,
    TEMPLATE_WEEKLY_MENU,
};

/// Site settings for the sample restaurant.
pub fn sample_site() -> SiteConfig {
    let mut site = SiteConfig::new("Rest");
    site.lang = Some("pt-BR".into());
    site.logo = Some(Logo::new("/img/rest.png", "Rest"));
    site.address = vec!["Rua Marechal 29 – Copacabana – Rj".into()];
    site.phone = "2422-9201".into();
    site.nav = vec![
        MenuItem::new("Menu", "/").current(),
        MenuItem::new("Sobre", "/sobre"),
        MenuItem::new("Contato", "/contato"),
    ];
    site.styles = vec![
        Stylesheet::new("/style.css").with_version("1.0.0"),
        Stylesheet::new("https://fonts.googleapis.com/css?family=Alegreya+SC"),
    ];
    site
}

/// The sample pages: the weekly menu and the about page.
pub fn sample_pages() -> Vec<Page> {
    vec![
        Page::new(1u64, "index", "Menu da Semana", TEMPLATE_WEEKLY_MENU)
            .with_field(FIELD_DISH_OF_THE_DAY, FieldValue::scalar("Peixes"))
            .with_field(
                FIELD_MENU_DESCRIPTION,
                FieldValue::scalar("Cardápio renovado toda segunda-feira."),
            )
            .with_field(
                FIELD_DISHES,
                FieldValue::group(vec![
                    GroupEntry::new()
                        .with(SUB_FIELD_DISH_NAME, "Salmão Grelhado")
                        .with(
                            SUB_FIELD_DISH_DESCRIPTION,
                            "Posta de salmão grelhada na manteiga de ervas",
                        )
                        .with(SUB_FIELD_DISH_PRICE, "79"),
                    GroupEntry::new()
                        .with(SUB_FIELD_DISH_NAME, "Moqueca de Camarão")
                        .with(
                            SUB_FIELD_DISH_DESCRIPTION,
                            "Camarões frescos ao leite de coco e dendê",
                        )
                        .with(SUB_FIELD_DISH_PRICE, "98"),
                ]),
            ),
        Page::new(2u64, "sobre", "Sobre", TEMPLATE_ABOUT)
            .with_field(FIELD_PHOTO, FieldValue::scalar("42"))
            .with_field(
                FIELD_HISTORY,
                FieldValue::scalar(
                    "O Rest nasceu em Copacabana com a missão de unir tradição e \
                     criatividade na cozinha brasileira.",
                ),
            ),
    ]
}

/// The sample assets: the facade photo referenced by the about page.
pub fn sample_assets() -> Vec<Asset> {
    vec![Asset::new(42u64)
        .with_alt("Fachada do Rest")
        .with_rendition(RenditionSize::Thumbnail, "/uploads/2020/fachada-150x150.jpg")
        .with_rendition(RenditionSize::Medium, "/uploads/2020/fachada-300x200.jpg")
        .with_rendition(RenditionSize::Large, "/uploads/2020/fachada-1024x683.jpg")
        .with_rendition(RenditionSize::Full, "/uploads/2020/fachada.jpg")]
}

/// Starter stylesheet dropped into the static directory.
pub const SAMPLE_STYLESHEET: &str = "\
body {
    margin: 0;
    font-family: 'Alegreya SC', serif;
}

.container {
    max-width: 960px;
    margin: 0 auto;
}

.subtitulo {
    font-size: 2em;
    text-align: center;
}

.grid-8 {
    width: 66%;
    margin: 0 auto;
}

.menu-item ul {
    list-style: none;
    padding: 0;
}

.menu-item sup {
    font-size: 0.6em;
}

.telefone {
    font-weight: bold;
}
";
