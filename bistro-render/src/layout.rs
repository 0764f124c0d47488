//! The shared page shell: document head plus site header.
//!
//! Every rendered page is the same shell wrapped around one template's
//! section markup. The shell is driven entirely by [`SiteConfig`], so all
//! pages of a site agree on navigation, address, and stylesheets.

use bistro_content::SiteConfig;

use crate::markup::Html;

/// Wrap one page's section markup in the site shell.
pub fn page_shell(site: &SiteConfig, body: &str) -> String {
    let mut html = Html::new();

    html.line("<!DOCTYPE html>");
    match &site.lang {
        Some(lang) => {
            html.raw("<html lang=\"").attr(lang).raw("\">\n");
        }
        None => {
            html.line("<html>");
        }
    }

    html.line("<head>");
    html.line("<meta charset=\"utf-8\">");
    html.raw("<title>").text(&site.name).raw("</title>\n");
    for style in &site.styles {
        html.raw("<link rel=\"stylesheet\" href=\"")
            .attr(&style.link_href())
            .raw("\">\n");
    }
    html.line("</head>");

    html.line("<body>");
    html.line("<header>");

    if !site.nav.is_empty() {
        html.line("<nav>");
        html.line("<ul>");
        for item in &site.nav {
            if item.current {
                html.raw("<li class=\"current_page_item\">");
            } else {
                html.raw("<li>");
            }
            html.raw("<a href=\"")
                .attr(&item.href)
                .raw("\">")
                .text(&item.label)
                .raw("</a></li>\n");
        }
        html.line("</ul>");
        html.line("</nav>");
    }

    if let Some(logo) = &site.logo {
        html.raw("<h1><img src=\"")
            .attr(&logo.src)
            .raw("\" alt=\"")
            .attr(&logo.alt)
            .raw("\"></h1>\n");
    }

    for address_line in &site.address {
        html.raw("<p>").text(address_line).raw("</p>\n");
    }
    if !site.phone.is_empty() {
        html.raw("<p class=\"telefone\">")
            .text(&site.phone)
            .raw("</p>\n");
    }

    html.line("</header>");
    html.raw(body);
    html.line("</body>");
    html.line("</html>");

    html.finish()
}
