//! Bistro - restaurant site generator with typed page fields.
//!
//! Library crate behind the `bistro` binary. Each command lives in its
//! own module; `main` parses the CLI and dispatches.
//!
//! # Architecture
//!
//! - **Commands are functions**: `run_init`, `run_build`, `run_check`,
//!   `run_schemas` take plain arguments and return `Result`
//! - **Content flows one way**: schemas from [`bistro_fields`], values
//!   from [`bistro_content`], documents from [`bistro_render`]
//! - **Sample site**: `init` seeds the content an empty directory needs
//!   to produce the full reference output

pub mod build;
pub mod check;
pub mod cli;
pub mod error;
pub mod init;
pub mod sample;
pub mod schemas;

pub use cli::{Cli, Commands};
pub use error::{CliError, Result};
