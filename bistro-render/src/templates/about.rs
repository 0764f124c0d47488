//! About page template.
//!
//! A photo column and a story column. The photo is an asset reference
//! resolved to its medium rendition at render time; the history paragraph
//! comes from the page's fields. The remaining copy is template-owned.

use bistro_content::{AssetId, ContentError, ContentStore, FieldAccessor, Page, RenditionSize};
use bistro_fields::defaults::{FIELD_HISTORY, FIELD_PHOTO};
use tracing::warn;

use crate::error::Result;
use crate::markup::Html;

/// Fixed copy after the history paragraph.
const STATIC_SECTIONS: &str = "\
<p>Gostaria de enfatizar que o desenvolvimento contínuo de distintas formas de atuação prepara-nos para enfrentar situações atípicas decorrentes do remanejamento dos quadros funcionais.</p>
<h2>Visão</h2>
<p>Não obstante, a expansão dos mercados mundiais faz parte de um processo de gerenciamento de alternativas às soluções ortodoxas.</p>
<h2>Valores</h2>
<p>O empenho em analisar a consolidação das estruturas apresenta tendências no sentido de aprovar a manutenção dos índices pretendidos.</p>
";

/// Render the about page section.
pub async fn render(store: &ContentStore, page: &Page) -> Result<String> {
    let fields = FieldAccessor::new(store, page.id);

    let mut html = Html::new();
    html.line("<section class=\"container sobre\">");
    html.raw("<h2 class=\"subtitulo\">").raw(&page.title).raw("</h2>\n");

    html.line("<div class=\"grid-8\">");
    if let Some(reference) = fields.scalar(FIELD_PHOTO).await? {
        photo_image(&mut html, store, page, &reference).await?;
    }
    html.line("</div>");

    html.line("<div class=\"grid-8\">");
    html.line("<h2>História</h2>");
    let history = fields.scalar(FIELD_HISTORY).await?.unwrap_or_default();
    html.raw("<p>").raw(&history).raw("</p>\n");
    html.raw(STATIC_SECTIONS);
    html.line("</div>");

    html.line("</section>");
    Ok(html.finish())
}

/// Resolve the photo reference and emit the image tag.
///
/// A reference that cannot be resolved to a medium rendition logs a
/// warning and emits nothing; a broken image is worse than no image.
async fn photo_image(
    html: &mut Html,
    store: &ContentStore,
    page: &Page,
    reference: &str,
) -> Result<()> {
    let Some(id) = AssetId::parse(reference) else {
        warn!(page = %page.id, value = reference, "photo field does not hold an asset id");
        return Ok(());
    };

    let asset = match store.read_asset(id).await {
        Ok(asset) => asset,
        Err(ContentError::AssetNotFound { .. }) => {
            warn!(page = %page.id, asset = %id, "photo asset not found, omitting image");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    match asset.rendition(RenditionSize::Medium) {
        Some(url) => {
            html.raw("<img src=\"")
                .attr(url)
                .raw("\" alt=\"")
                .attr(&asset.alt)
                .raw("\">\n");
        }
        None => {
            warn!(page = %page.id, asset = %id, "photo asset has no medium rendition, omitting image");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_content::{Asset, FieldValue};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ContentStore) {
        let temp = TempDir::new().unwrap();
        let store = ContentStore::new(temp.path().join("content"));
        store.create_directories().await.unwrap();
        (temp, store)
    }

    fn about_page(id: u64) -> Page {
        Page::new(id, "sobre", "Sobre", "about")
    }

    #[tokio::test]
    async fn photo_resolves_to_medium_rendition() {
        let (_temp, store) = setup().await;
        let asset = Asset::new(42u64)
            .with_alt("Fachada do Rest")
            .with_rendition(RenditionSize::Thumbnail, "/wp-content/uploads/2020/x-150x150.jpg")
            .with_rendition(RenditionSize::Medium, "/wp-content/uploads/2020/x-medium.jpg")
            .with_rendition(RenditionSize::Full, "/wp-content/uploads/2020/x.jpg");
        store.write_asset(&asset).await.unwrap();

        let page = about_page(2).with_field("photo", FieldValue::scalar("42"));
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains(
            "<img src=\"/wp-content/uploads/2020/x-medium.jpg\" alt=\"Fachada do Rest\">"
        ));
        assert!(!out.contains("x-150x150.jpg"));
    }

    #[tokio::test]
    async fn unresolved_asset_omits_the_image() {
        let (_temp, store) = setup().await;
        let page = about_page(2).with_field("photo", FieldValue::scalar("42"));
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(!out.contains("<img"));
        // The photo column still renders, just without the image.
        assert!(out.contains("<div class=\"grid-8\">\n</div>"));
    }

    #[tokio::test]
    async fn non_numeric_reference_omits_the_image() {
        let (_temp, store) = setup().await;
        let page = about_page(2).with_field("photo", FieldValue::scalar("fachada.jpg"));
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(!out.contains("<img"));
    }

    #[tokio::test]
    async fn asset_without_medium_rendition_omits_the_image() {
        let (_temp, store) = setup().await;
        let asset = Asset::new(42u64).with_rendition(RenditionSize::Full, "/uploads/x.jpg");
        store.write_asset(&asset).await.unwrap();
        let page = about_page(2).with_field("photo", FieldValue::scalar("42"));
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(!out.contains("<img"));
    }

    #[tokio::test]
    async fn history_renders_between_heading_and_static_copy() {
        let (_temp, store) = setup().await;
        let page = about_page(2).with_field(
            "history",
            FieldValue::scalar("O Rest nasceu em Copacabana."),
        );
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains("<h2>História</h2>\n<p>O Rest nasceu em Copacabana.</p>"));
        assert!(out.contains("<h2>Visão</h2>"));
        assert!(out.contains("<h2>Valores</h2>"));

        let history = out.find("O Rest nasceu").unwrap();
        let vision = out.find("<h2>Visão</h2>").unwrap();
        assert!(history < vision);
    }

    #[tokio::test]
    async fn absent_history_renders_an_empty_paragraph() {
        let (_temp, store) = setup().await;
        let page = about_page(2);
        store.write_page(&page).await.unwrap();

        let out = render(&store, &page).await.unwrap();
        assert!(out.contains("<h2>História</h2>\n<p></p>"));
    }

    #[tokio::test]
    async fn static_copy_is_identical_regardless_of_data() {
        let (_temp, store) = setup().await;
        let with_history = about_page(2).with_field("history", FieldValue::scalar("x"));
        let without = about_page(3);
        store.write_page(&with_history).await.unwrap();
        store.write_page(&without).await.unwrap();

        let out_a = render(&store, &with_history).await.unwrap();
        let out_b = render(&store, &without).await.unwrap();
        assert!(out_a.contains(STATIC_SECTIONS));
        assert!(out_b.contains(STATIC_SECTIONS));
    }
}
