//! Fallback template for pages without a dedicated render path.
//!
//! Renders the page title and body markup, nothing schema-driven. Also
//! provides the empty state shown when a site has no pages at all.

use bistro_content::Page;

use crate::markup::Html;

/// Render a plain title-and-body section.
pub fn render(page: &Page) -> String {
    let mut html = Html::new();
    html.line("<section class=\"container sobre\">");
    html.raw("<h2 class=\"subtitulo\">").raw(&page.title).raw("</h2>\n");
    html.line("<div class=\"grid-8\">");
    if !page.body.is_empty() {
        html.raw(&page.body).raw("\n");
    }
    html.line("</div>");
    html.line("</section>");
    html.finish()
}

/// Section shown when there is no content to render at all.
pub fn render_empty() -> String {
    let mut html = Html::new();
    html.line("<section class=\"container sobre\">");
    html.line("<p>Nenhum post encontrado</p>");
    html.line("</section>");
    html.finish()
}
