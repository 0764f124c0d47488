//! Page schemas and the registry that holds them.
//!
//! A [`PageSchema`] declares the ordered set of fields one page template
//! edits and renders. The [`SchemaRegistry`] is built once at startup from
//! every declared schema and never changes afterwards, so lookups do not
//! depend on any registration order at call time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::types::FieldDef;

/// Sub-field keys the edit panel reserves for its own per-entry bookkeeping.
pub const RESERVED_SUB_FIELD_KEYS: &[&str] = &["id"];

/// The ordered set of fields one page template declares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSchema {
    /// Template identifier pages reference, e.g. `weekly-menu`.
    pub template: String,
    /// Field definitions in edit-panel order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl PageSchema {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field definition, preserving declaration order.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Look up a field definition by key.
    pub fn get(&self, key: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.key() == key)
    }

    /// Field keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key())
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashMap::new();
        for field in &self.fields {
            if seen.insert(field.key(), ()).is_some() {
                return Err(SchemaError::DuplicateFieldKey {
                    template: self.template.clone(),
                    key: field.key().to_string(),
                });
            }
            if let Some(group) = field.as_group() {
                let mut sub_seen = HashMap::new();
                for sub in &group.sub_fields {
                    if RESERVED_SUB_FIELD_KEYS.contains(&sub.key.as_str()) {
                        return Err(SchemaError::ReservedSubFieldKey {
                            group: group.key.clone(),
                            key: sub.key.clone(),
                        });
                    }
                    if sub_seen.insert(sub.key.as_str(), ()).is_some() {
                        return Err(SchemaError::DuplicateSubFieldKey {
                            group: group.key.clone(),
                            key: sub.key.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Immutable template-to-schema map, built once before any page renders.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<PageSchema>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder {
            schemas: Vec::new(),
        }
    }

    /// Look up the schema for a template, if one is registered.
    pub fn get(&self, template: &str) -> Option<&PageSchema> {
        self.index.get(template).map(|&i| &self.schemas[i])
    }

    /// Look up the schema for a template, erroring when none is registered.
    pub fn require(&self, template: &str) -> Result<&PageSchema> {
        self.get(template).ok_or_else(|| SchemaError::SchemaNotFound {
            template: template.to_string(),
        })
    }

    /// Look up one field definition on one template's schema.
    pub fn field(&self, template: &str, key: &str) -> Option<&FieldDef> {
        self.get(template).and_then(|schema| schema.get(key))
    }

    /// All registered schemas in registration order.
    pub fn all(&self) -> &[PageSchema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Collects schema declarations and checks them as a whole.
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    schemas: Vec<PageSchema>,
}

impl SchemaRegistryBuilder {
    /// Add one schema declaration.
    pub fn schema(mut self, schema: PageSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Validate every declaration and freeze the registry.
    ///
    /// Registering the same template twice with identical fields is
    /// idempotent; registering it with different fields is an error.
    pub fn build(self) -> Result<SchemaRegistry> {
        let mut schemas: Vec<PageSchema> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for schema in self.schemas {
            schema.validate()?;
            if let Some(&existing) = index.get(&schema.template) {
                if schemas[existing] != schema {
                    return Err(SchemaError::SchemaConflict {
                        template: schema.template,
                    });
                }
                continue;
            }
            index.insert(schema.template.clone(), schemas.len());
            schemas.push(schema);
        }
        debug!(templates = schemas.len(), "schema registry built");
        Ok(SchemaRegistry { schemas, index })
    }
}
