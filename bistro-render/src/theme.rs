//! Theme - one site's render configuration.
//!
//! A theme pairs the site settings with the frozen schema registry and
//! dispatches each page to its template. Pages whose template has no
//! dedicated render path fall back to the plain title-and-body template.

use bistro_content::{ContentStore, Page, SiteConfig};
use bistro_fields::defaults::{TEMPLATE_ABOUT, TEMPLATE_WEEKLY_MENU};
use bistro_fields::SchemaRegistry;
use tracing::debug;

use crate::error::Result;
use crate::layout::page_shell;
use crate::templates;

/// Render configuration for one site.
pub struct Theme {
    site: SiteConfig,
    registry: SchemaRegistry,
}

impl Theme {
    /// Create a theme with the built-in schema registry.
    pub fn new(site: SiteConfig) -> Result<Self> {
        Ok(Self {
            site,
            registry: bistro_fields::default_registry()?,
        })
    }

    /// Create a theme with a caller-provided registry.
    pub fn with_registry(site: SiteConfig, registry: SchemaRegistry) -> Self {
        Self { site, registry }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Render one page to a complete HTML document.
    pub async fn render_page(&self, store: &ContentStore, page: &Page) -> Result<String> {
        debug!(page = %page.id, template = %page.template, "rendering page");

        let section = match page.template.as_str() {
            TEMPLATE_WEEKLY_MENU => templates::menu::render(store, page).await?,
            TEMPLATE_ABOUT => templates::about::render(store, page).await?,
            other => {
                debug!(template = other, "no dedicated template, using fallback");
                templates::fallback::render(page)
            }
        };

        Ok(page_shell(&self.site, &section))
    }

    /// Render the document shown when the site has no pages.
    pub fn render_empty(&self) -> String {
        page_shell(&self.site, &templates::fallback::render_empty())
    }
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

    #[tokio::test]
    async fn dispatches_menu_template() {
        let (_temp, store) = setup().await;
        let page = Page::new(1u64, "index", "Menu da Semana", "weekly-menu")
            .with_field("dish_of_the_day", FieldValue::scalar("Peixes"));
        store.write_page(&page).await.unwrap();

        let theme = Theme::new(SiteConfig::new("Rest")).unwrap();
        let out = theme.render_page(&store, &page).await.unwrap();
        assert!(out.contains("<h2>Peixes</h2>"));
        assert!(out.contains("<h2>Carnes</h2>"));
        assert!(out.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn dispatches_about_template() {
        let (_temp, store) = setup().await;
        let page = Page::new(2u64, "sobre", "Sobre", "about")
            .with_field("history", FieldValue::scalar("Desde 1987."));
        store.write_page(&page).await.unwrap();

        let theme = Theme::new(SiteConfig::new("Rest")).unwrap();
        let out = theme.render_page(&store, &page).await.unwrap();
        assert!(out.contains("<h2>História</h2>"));
        assert!(out.contains("Desde 1987."));
    }

    #[tokio::test]
    async fn unknown_template_uses_fallback() {
        let (_temp, store) = setup().await;
        let page = Page::new(3u64, "contato", "Contato", "contact")
            .with_body("<p>Fale conosco.</p>");
        store.write_page(&page).await.unwrap();

        let theme = Theme::new(SiteConfig::new("Rest")).unwrap();
        let out = theme.render_page(&store, &page).await.unwrap();
        assert!(out.contains("<h2 class=\"subtitulo\">Contato</h2>"));
        assert!(out.contains("<p>Fale conosco.</p>"));
        assert!(!out.contains("Carnes"));
    }

    #[tokio::test]
    async fn empty_site_renders_the_not_found_document() {
        let theme = Theme::new(SiteConfig::new("Rest")).unwrap();
        let out = theme.render_empty();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<p>Nenhum post encontrado</p>"));
    }

    #[tokio::test]
    async fn theme_exposes_registry_for_validation() {
        let theme = Theme::new(SiteConfig::new("Rest")).unwrap();
        assert!(theme.registry().get("weekly-menu").is_some());
        assert_eq!(theme.site().name, "Rest");
    }
}
