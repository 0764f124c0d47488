//! Page templates and HTML rendering
//!
//! `bistro-render` turns stored content into complete HTML documents.
//! Field values are read through `bistro-content`'s accessor, trusted
//! editor markup passes through verbatim, and everything else is escaped
//! on the way out.
//!
//! # Architecture
//!
//! - **One render path per template**: see [`templates`]
//! - **Shared shell**: [`layout::page_shell`] wraps every section
//! - **Explicit trust split**: [`markup::Html`] has separate raw and
//!   escaping writers, chosen at each call site

pub mod error;
pub mod layout;
pub mod markup;
pub mod templates;
pub mod theme;

pub use error::{RenderError, Result};
pub use layout::page_shell;
pub use markup::Html;
pub use theme::Theme;
