//! Weekly menu page template.
//!
//! Two menu sections side by side: one driven by the page's fields, one
//! fixed. The data-driven section takes its heading from
//! `dish_of_the_day` and one list item per `dishes` entry, in stored
//! order. The fixed section is template-owned copy and renders the same
//! bytes no matter what the page stores.

use bistro_content::{ContentStore, FieldAccessor, GroupEntry, Page};
use bistro_fields::defaults::{
    FIELD_DISHES, FIELD_DISH_OF_THE_DAY, SUB_FIELD_DISH_DESCRIPTION, SUB_FIELD_DISH_NAME,
    SUB_FIELD_DISH_PRICE,
};

use crate::error::Result;
use crate::markup::Html;

/// Currency marker rendered before every price.
pub const CURRENCY_PREFIX: &str = "R$";

/// Fixed meats section, identical on every render.
pub(crate) const MEATS_SECTION: &str = "\
<div class=\"menu-item grid-8\">
<h2>Carnes</h2>
<ul>
<li>
<span><sup>R$</sup>129</span>
<div>
<h3>Picanha Nobre no Alho</h3>
<p>Pequenas tiras de salmão feitas no alho e óleo</p>
</div>
</li>
<li>
<span><sup>R$</sup>89</span>
<div>
<h3>Cupim no Bafo</h3>
<p>Sardinhas escolhidas a dedo e fritas em cerveja premium</p>
</div>
</li>
<li>
<span><sup>R$</sup>159</span>
<div>
<h3>Hamburger Artesanal Rest</h3>
<p>Grandes camarões grelhados, servidos ao molho de camarão com catupiry</p>
</div>
</li>
</ul>
</div>
";

/// Render the menu page section.
pub async fn render(store: &ContentStore, page: &Page) -> Result<String> {
    let fields = FieldAccessor::new(store, page.id);

    let heading = fields.scalar(FIELD_DISH_OF_THE_DAY).await?.unwrap_or_default();
    let dishes = fields.group(FIELD_DISHES).await?.unwrap_or_default();

    let mut html = Html::new();
    html.line("<section class=\"container\">");
    html.raw("<h2 class=\"subtitulo\">").raw(&page.title).raw("</h2>\n");

    html.line("<div class=\"menu-item grid-8\">");
    html.raw("<h2>").raw(&heading).raw("</h2>\n");
    // The list renders even with no entries; an empty week is an empty menu.
    html.line("<ul>");
    for dish in &dishes {
        dish_item(&mut html, dish);
    }
    html.line("</ul>");
    html.line("</div>");

    html.raw(MEATS_SECTION);

    html.line("</section>");
    Ok(html.finish())
}

/// One dish list item. Missing sub-fields render as empty text.
fn dish_item(html: &mut Html, dish: &GroupEntry) {
    html.line("<li>");
    html.raw("<span><sup>")
        .raw(CURRENCY_PREFIX)
        .raw("</sup>")
        .raw(dish.get(SUB_FIELD_DISH_PRICE).unwrap_or_default())
        .raw("</span>\n");
    html.line("<div>");
    html.raw("<h3>")
        .raw(dish.get(SUB_FIELD_DISH_NAME).unwrap_or_default())
        .raw("</h3>\n");
    html.raw("<p>")
        .raw(dish.get(SUB_FIELD_DISH_DESCRIPTION).unwrap_or_default())
        .raw("</p>\n");
    html.line("</div>");
    html.line("</li>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_content::FieldValue;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ContentStore) {
        let temp = TempDir::new().unwrap();
        let store = ContentStore::new(temp.path().join("content"));
        store.create_directories().await.unwrap();
        (temp, store)
    }

    fn menu_page(id: u64) -> Page {
        Page::new(id, "index", "Menu da Semana", "weekly-menu")
    }

    #[tokio::test]
    async fn dishes_render_in_stored_order() {
        let (_temp, store) = setup().await;
        let page = menu_page(1)
            .with_field("dish_of_the_day", FieldValue::scalar("Peixes"))
            .with_field(
                "dishes",
                FieldValue::group(vec![
                    GroupEntry::new()
                        .with("name", "Moqueca de Camarão")
                        .with("description", "Ao leite de coco")
                        .with("price", "98"),
                    GroupEntry::new()
                        .with("name", "Salmão Grelhado")
                        .with("description", "Na manteiga de ervas")
                        .with("price", "79"),
                ]),
            );
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains("<h2>Peixes</h2>"));
        assert!(out.contains("<span><sup>R$</sup>98</span>"));
        assert!(out.contains("<h3>Moqueca de Camarão</h3>"));

        let first = out.find("Moqueca de Camarão").unwrap();
        let second = out.find("Salmão Grelhado").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn absent_dishes_render_an_empty_list() {
        let (_temp, store) = setup().await;
        let page = menu_page(1);
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        // Heading renders with empty text, list renders with no items.
        assert!(out.contains("<h2></h2>"));
        assert!(out.contains("<ul>\n</ul>"));
        // The fixed section is unaffected.
        assert!(out.contains("<h2>Carnes</h2>"));
        assert!(out.contains("Picanha Nobre no Alho"));
    }

    #[tokio::test]
    async fn missing_sub_fields_render_empty() {
        let (_temp, store) = setup().await;
        let page = menu_page(1).with_field(
            "dishes",
            FieldValue::group(vec![GroupEntry::new().with("name", "Caldinho")]),
        );
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains("<span><sup>R$</sup></span>"));
        assert!(out.contains("<h3>Caldinho</h3>"));
        assert!(out.contains("<p></p>"));
    }

    #[tokio::test]
    async fn fixed_section_is_identical_regardless_of_data() {
        let (_temp, store) = setup().await;
        let full = menu_page(1).with_field(
            "dishes",
            FieldValue::group(vec![GroupEntry::new()
                .with("name", "Salmão")
                .with("price", "79")]),
        );
        let empty = menu_page(2);
        store.write_page(&full).await.unwrap();
        store.write_page(&empty).await.unwrap();

        let out_full = render(&store, &full).await.unwrap();
        let out_empty = render(&store, &empty).await.unwrap();
        assert!(out_full.contains(MEATS_SECTION));
        assert!(out_empty.contains(MEATS_SECTION));
    }

    #[tokio::test]
    async fn field_markup_passes_through_verbatim() {
        let (_temp, store) = setup().await;
        let page = menu_page(1).with_field(
            "dish_of_the_day",
            FieldValue::scalar("Peixes <em>frescos</em> & mariscos"),
        );
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains("<h2>Peixes <em>frescos</em> & mariscos</h2>"));
    }
}
