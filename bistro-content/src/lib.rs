//! Content storage and field access
//!
//! `bistro-content` owns everything stored for a site: pages with their
//! field values, uploaded assets with their renditions, and the site-wide
//! settings file. It knows nothing about HTML or schemas.
//!
//! # Architecture
//!
//! - **Value-only**: Stores what editors typed; `bistro-fields` declares
//!   what they are allowed to type
//! - **YAML on disk**: One `.yaml` file per page and per asset, ids taken
//!   from file names
//! - **Explicit page scope**: Templates read values through a
//!   [`FieldAccessor`] constructed for the page being rendered

pub mod accessor;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use accessor::FieldAccessor;
pub use config::{Logo, MenuItem, SiteConfig, Stylesheet};
pub use error::{ContentError, Result};
pub use store::ContentStore;
pub use types::{Asset, AssetId, FieldValue, GroupEntry, Page, PageId, RenditionSize};
