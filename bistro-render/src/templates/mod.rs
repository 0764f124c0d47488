//! Per-template render paths.
//!
//! Each module renders one template's section markup; the shared shell
//! around it lives in [`crate::layout`].

pub mod about;
pub mod fallback;
pub mod menu;
