//! Core field types for page schemas.
//!
//! All types serialize to/from YAML via serde. Scalar definitions describe
//! single-valued named fields. Group definitions describe ordered, repeatable
//! collections of scalar sub-fields.

use serde::{Deserialize, Serialize};

/// The value kind of a scalar field — determines what shape the stored
/// value takes and how the edit panel renders it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Single-line text input.
    ShortText,
    /// Multi-line text area.
    LongText,
    /// Numeric id of an uploaded media item, resolved to a URL at render time.
    AssetRef,
}

/// A single-valued named field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScalarDef {
    /// Stable key the value is stored and retrieved under.
    pub key: String,
    /// Human label shown in the edit panel.
    pub label: String,
    pub kind: ValueKind,
}

impl ScalarDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Position placeholder recognised in a group's entry title template.
pub const ENTRY_POSITION_PLACEHOLDER: &str = "{#}";

/// Presentation hints for a group's edit panel. These shape the editing
/// form only; the stored data has the same shape regardless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupOptions {
    /// Per-entry title template, e.g. "Dish {#}". `{#}` expands to the
    /// entry's 1-based position.
    pub entry_title: String,
    /// Label of the add-entry button.
    pub add_label: String,
    /// Whether the editor may add more than one entry.
    #[serde(default = "default_true")]
    pub repeatable: bool,
    /// Whether entries can be reordered by dragging.
    #[serde(default)]
    pub sortable: bool,
}

fn default_true() -> bool {
    true
}

impl GroupOptions {
    pub fn new(entry_title: impl Into<String>, add_label: impl Into<String>) -> Self {
        Self {
            entry_title: entry_title.into(),
            add_label: add_label.into(),
            repeatable: true,
            sortable: false,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Title for the entry at 1-based position `position`.
    pub fn entry_title_for(&self, position: usize) -> String {
        self.entry_title
            .replace(ENTRY_POSITION_PLACEHOLDER, &position.to_string())
    }
}

/// An ordered, repeatable collection of scalar sub-fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDef {
    pub key: String,
    pub label: String,
    /// Sub-fields in declaration order; every entry of the group carries
    /// values keyed by these.
    pub sub_fields: Vec<ScalarDef>,
    pub options: GroupOptions,
}

impl GroupDef {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        sub_fields: Vec<ScalarDef>,
        options: GroupOptions,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sub_fields,
            options,
        }
    }

    /// Look up a sub-field by key.
    pub fn sub_field(&self, key: &str) -> Option<&ScalarDef> {
        self.sub_fields.iter().find(|s| s.key == key)
    }
}

/// A field definition — the complete schema for one named piece of
/// page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", rename_all = "kebab-case")]
pub enum FieldDef {
    Scalar(ScalarDef),
    Group(GroupDef),
}

impl FieldDef {
    /// Shorthand for a scalar definition.
    pub fn scalar(key: impl Into<String>, label: impl Into<String>, kind: ValueKind) -> Self {
        Self::Scalar(ScalarDef::new(key, label, kind))
    }

    /// Shorthand for a group definition.
    pub fn group(
        key: impl Into<String>,
        label: impl Into<String>,
        sub_fields: Vec<ScalarDef>,
        options: GroupOptions,
    ) -> Self {
        Self::Group(GroupDef::new(key, label, sub_fields, options))
    }

    /// The key the field's value is stored under.
    pub fn key(&self) -> &str {
        match self {
            Self::Scalar(def) => &def.key,
            Self::Group(def) => &def.key,
        }
    }

    /// The human label shown in the edit panel.
    pub fn label(&self) -> &str {
        match self {
            Self::Scalar(def) => &def.label,
            Self::Group(def) => &def.label,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarDef> {
        match self {
            Self::Scalar(def) => Some(def),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupDef> {
        match self {
            Self::Scalar(_) => None,
            Self::Group(def) => Some(def),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_def_yaml_round_trip() {
        let def = FieldDef::scalar("dish_of_the_day", "Dish of the day", ValueKind::ShortText);
        let yaml = serde_yaml::to_string(&def).unwrap();
        let parsed: FieldDef = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(def, parsed);
    }

    #[test]
    fn group_def_yaml_round_trip() {
        let def = FieldDef::group(
            "dishes",
            "Dishes",
            vec![
                ScalarDef::new("name", "Name", ValueKind::ShortText),
                ScalarDef::new("price", "Price", ValueKind::ShortText),
            ],
            GroupOptions::new("Dish {#}", "Add dish").sortable(true),
        );
        let yaml = serde_yaml::to_string(&def).unwrap();
        let parsed: FieldDef = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(def, parsed);
    }

    #[test]
    fn field_def_tags_with_field_key() {
        let def = FieldDef::scalar("photo", "Restaurant photo", ValueKind::AssetRef);
        let yaml = serde_yaml::to_string(&def).unwrap();
        assert!(yaml.contains("field: scalar"));
        assert!(yaml.contains("kind: asset-ref"));
    }

    #[test]
    fn field_def_json_shape() {
        let def = FieldDef::scalar("photo", "Restaurant photo", ValueKind::AssetRef);
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["field"], "scalar");
        assert_eq!(json["kind"], "asset-ref");
    }

    #[test]
    fn group_def_from_yaml() {
        let yaml_input = r#"
field: group
key: dishes
label: Dishes
sub_fields:
  - key: name
    label: Name
    kind: short-text
  - key: description
    label: Description
    kind: long-text
  - key: price
    label: Price
    kind: short-text
options:
  entry_title: "Dish {#}"
  add_label: Add dish
  sortable: true
"#;
        let def: FieldDef = serde_yaml::from_str(yaml_input).unwrap();
        let group = def.as_group().unwrap();
        assert_eq!(group.key, "dishes");
        assert_eq!(group.sub_fields.len(), 3);
        assert_eq!(group.sub_field("price").unwrap().kind, ValueKind::ShortText);
        assert!(group.options.repeatable);
        assert!(group.options.sortable);
    }

    #[test]
    fn entry_title_substitutes_position() {
        let options = GroupOptions::new("Dish {#}", "Add dish");
        assert_eq!(options.entry_title_for(1), "Dish 1");
        assert_eq!(options.entry_title_for(12), "Dish 12");
    }

    #[test]
    fn entry_title_without_placeholder_is_unchanged() {
        let options = GroupOptions::new("Dish", "Add dish");
        assert_eq!(options.entry_title_for(3), "Dish");
    }

    #[test]
    fn repeatable_defaults_to_true() {
        let yaml_input = r#"
entry_title: "Entry {#}"
add_label: Add entry
"#;
        let options: GroupOptions = serde_yaml::from_str(yaml_input).unwrap();
        assert!(options.repeatable);
        assert!(!options.sortable);
    }

    #[test]
    fn field_def_key_and_label() {
        let scalar = FieldDef::scalar("history", "Our history", ValueKind::LongText);
        assert_eq!(scalar.key(), "history");
        assert_eq!(scalar.label(), "Our history");
        assert!(scalar.as_scalar().is_some());
        assert!(scalar.as_group().is_none());
    }
}
