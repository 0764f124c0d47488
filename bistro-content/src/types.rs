//! Core content types: pages, field values, and media assets.
//!
//! All types serialize to/from YAML via serde. Pages carry their field
//! values inline as an ordered map. A field value is either one string or
//! an ordered list of entries, matching the two field shapes editors can
//! fill in.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Numeric page identifier assigned by the hosting platform.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl PageId {
    /// Parse an id from a file stem, e.g. `"12"` from `12.yaml`.
    ///
    /// Strict about form: `"007"` and `"+7"` parse numerically but are
    /// not the stem id 7 writes back to, so they name no page.
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        let id: u64 = stem.parse().ok()?;
        (id.to_string() == stem).then_some(Self(id))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Numeric identifier of an uploaded media item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl AssetId {
    /// Parse an id from stored field text, e.g. `"42"`.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok().map(Self)
    }

    /// Parse an id from a file stem, e.g. `"42"` from `42.yaml`.
    ///
    /// Strict like [`PageId::from_file_stem`]: only the id's canonical
    /// decimal form is accepted.
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        let id: u64 = stem.parse().ok()?;
        (id.to_string() == stem).then_some(Self(id))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One entry of a group value: sub-field key to stored text, in the order
/// the editor filled the sub-fields in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupEntry(pub IndexMap<String, String>);

impl GroupEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one sub-field value, preserving insertion order.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Stored text for a sub-field, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A stored field value.
///
/// Scalar fields hold one string. Group fields hold an ordered list of
/// entries. The YAML representation is untagged: a plain string is a
/// scalar, a sequence of mappings is a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    Group(Vec<GroupEntry>),
}

impl FieldValue {
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    pub fn group(entries: Vec<GroupEntry>) -> Self {
        Self::Group(entries)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&[GroupEntry]> {
        match self {
            Self::Scalar(_) => None,
            Self::Group(entries) => Some(entries),
        }
    }
}

/// A content page created in the hosting platform's edit UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Derived from the file name, not stored in the file body.
    #[serde(skip)]
    pub id: PageId,
    /// URL path segment the page publishes under.
    pub slug: String,
    pub title: String,
    /// Template id that selects the render path and the field schema.
    pub template: String,
    /// Free-form body markup, used by templates that place it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Field values keyed by field key, in authoring order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldValue>,
}

impl Page {
    pub fn new(
        id: impl Into<PageId>,
        slug: impl Into<String>,
        title: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            template: template.into(),
            body: String::new(),
            fields: IndexMap::new(),
        }
    }

    /// Set the body markup.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set one field value, preserving insertion order.
    pub fn with_field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Stored value for a field key, if present.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

/// The sized renditions the media library keeps for an uploaded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionSize {
    Thumbnail,
    Medium,
    Large,
    /// The original upload.
    Full,
}

/// An uploaded media item and its stored renditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Derived from the file name, not stored in the file body.
    #[serde(skip)]
    pub id: AssetId,
    /// Alternative text maintained in the media library.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt: String,
    /// Size to URL of the stored rendition.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub renditions: IndexMap<RenditionSize, String>,
}

impl Asset {
    pub fn new(id: impl Into<AssetId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_rendition(mut self, size: RenditionSize, url: impl Into<String>) -> Self {
        self.renditions.insert(size, url.into());
        self
    }

    /// URL of the rendition at `size`, if the media library stored one.
    pub fn rendition(&self, size: RenditionSize) -> Option<&str> {
        self.renditions.get(&size).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_value_is_a_plain_yaml_string() {
        let value = FieldValue::scalar("Feijoada Completa");
        let yaml = serde_yaml::to_string(&value).unwrap();
        let parsed: FieldValue = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value, parsed);
        assert_eq!(parsed.as_scalar(), Some("Feijoada Completa"));
    }

    #[test]
    fn group_value_is_a_yaml_sequence_of_mappings() {
        let yaml_input = r#"
- name: Moqueca de Camarão
  description: Camarões frescos ao leite de coco
  price: "98"
- name: Salmão Grelhado
  price: "79"
"#;
        let value: FieldValue = serde_yaml::from_str(yaml_input).unwrap();
        let entries = value.as_group().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get("name"), Some("Moqueca de Camarão"));
        assert_eq!(entries[0].get("price"), Some("98"));
        assert_eq!(entries[1].get("description"), None);
    }

    #[test]
    fn group_entry_preserves_sub_field_order() {
        let entry = GroupEntry::new()
            .with("name", "Picanha")
            .with("description", "Na brasa")
            .with("price", "129");
        let keys: Vec<&String> = entry.0.keys().collect();
        assert_eq!(keys, vec!["name", "description", "price"]);
    }

    #[test]
    fn page_yaml_round_trip_skips_id() {
        let page = Page::new(12u64, "index", "Menu da Semana", "weekly-menu")
            .with_field("dish_of_the_day", FieldValue::scalar("Peixes"))
            .with_field(
                "dishes",
                FieldValue::group(vec![GroupEntry::new()
                    .with("name", "Salmão Grelhado")
                    .with("price", "79")]),
            );

        let yaml = serde_yaml::to_string(&page).unwrap();
        assert!(!yaml.contains("id:"));

        let mut parsed: Page = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, PageId::default());
        parsed.id = PageId(12);
        assert_eq!(page, parsed);
    }

    #[test]
    fn page_fields_keep_authoring_order() {
        let yaml_input = r#"
slug: index
title: Menu da Semana
template: weekly-menu
fields:
  dish_of_the_day: Peixes
  description: Renovado toda segunda
  dishes:
    - name: Salmão
      price: "79"
"#;
        let page: Page = serde_yaml::from_str(yaml_input).unwrap();
        let keys: Vec<&String> = page.fields.keys().collect();
        assert_eq!(keys, vec!["dish_of_the_day", "description", "dishes"]);
        assert!(page.field("dishes").unwrap().as_group().is_some());
        assert!(page.field("missing").is_none());
    }

    #[test]
    fn asset_yaml_round_trip() {
        let asset = Asset::new(42u64)
            .with_alt("Fachada do Rest")
            .with_rendition(RenditionSize::Thumbnail, "/uploads/2020/x-150x150.jpg")
            .with_rendition(RenditionSize::Medium, "/uploads/2020/x-medium.jpg")
            .with_rendition(RenditionSize::Full, "/uploads/2020/x.jpg");

        let yaml = serde_yaml::to_string(&asset).unwrap();
        assert!(yaml.contains("medium:"));

        let mut parsed: Asset = serde_yaml::from_str(&yaml).unwrap();
        parsed.id = AssetId(42);
        assert_eq!(asset, parsed);
        assert_eq!(
            parsed.rendition(RenditionSize::Medium),
            Some("/uploads/2020/x-medium.jpg")
        );
        assert_eq!(parsed.rendition(RenditionSize::Large), None);
    }

    #[test]
    fn asset_id_parses_stored_field_text() {
        assert_eq!(AssetId::parse("42"), Some(AssetId(42)));
        assert_eq!(AssetId::parse(" 42 "), Some(AssetId(42)));
        assert_eq!(AssetId::parse("not-an-id"), None);
        assert_eq!(AssetId::parse(""), None);
    }

    #[test]
    fn page_id_from_file_stem() {
        assert_eq!(PageId::from_file_stem("12"), Some(PageId(12)));
        assert_eq!(PageId::from_file_stem("draft"), None);
        // Numeric but not the form the id writes back to
        assert_eq!(PageId::from_file_stem("007"), None);
        assert_eq!(PageId::from_file_stem("+7"), None);
    }

    #[test]
    fn asset_id_from_file_stem_is_strict() {
        assert_eq!(AssetId::from_file_stem("42"), Some(AssetId(42)));
        assert_eq!(AssetId::from_file_stem("042"), None);
        assert_eq!(AssetId::from_file_stem("photo"), None);
    }
}
