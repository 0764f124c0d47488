//! Site-level configuration: identity, navigation, and stylesheets.
//!
//! Stored as `site.yaml` at the content root. Everything here is set up
//! once per site and shared by every rendered page.

use serde::{Deserialize, Serialize};

/// Site-wide settings shared by every page shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name, used as the document title.
    pub name: String,
    /// Value of the `lang` attribute on the root element, e.g. `pt-BR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Header logo, rendered inside the site heading when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Address lines printed in the header.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<String>,
    /// Phone number printed in the header.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    /// Navigation items in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<MenuItem>,
    /// Stylesheets linked from every page, in registration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<Stylesheet>,
}

impl SiteConfig {
    /// Create a minimal config with just the site name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: None,
            logo: None,
            address: Vec::new(),
            phone: String::new(),
            nav: Vec::new(),
            styles: Vec::new(),
        }
    }
}

/// One entry in the header navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
    /// Marks the item for the page the visitor is on; the shell adds the
    /// `current_page_item` class to it.
    #[serde(default)]
    pub current: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            current: false,
        }
    }

    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

/// A registered stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub href: String,
    /// Cache-busting version, appended as a `ver` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Stylesheet {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The href to link, with the version parameter appended when set.
    pub fn link_href(&self) -> String {
        match &self.version {
            Some(version) => format!("{}?ver={}", self.href, version),
            None => self.href.clone(),
        }
    }
}

/// The header logo image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,
    pub alt: String,
}

impl Logo {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}
