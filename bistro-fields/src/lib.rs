//! Field definitions and the page schema registry
//!
//! `bistro-fields` is a standalone, schema-only crate. It declares which
//! named fields each page template edits and renders, and freezes those
//! declarations into an immutable registry at startup. It knows nothing
//! about storage or HTML — consumers look schemas up and act on them.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field definitions, not field values
//! - **Declared in code**: Built-in schemas live in [`defaults`]
//! - **Frozen at startup**: The registry is validated and built once;
//!   lookups never depend on registration order at call time

pub mod defaults;
pub mod error;
pub mod schema;
pub mod types;

pub use defaults::{default_registry, default_schemas};
pub use error::{Result, SchemaError};
pub use schema::{PageSchema, SchemaRegistry, SchemaRegistryBuilder, RESERVED_SUB_FIELD_KEYS};
pub use types::{
    FieldDef, GroupDef, GroupOptions, ScalarDef, ValueKind, ENTRY_POSITION_PLACEHOLDER,
};
