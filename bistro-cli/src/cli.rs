//! CLI definition for the bistro command-line interface.
//!
//! This module only depends on `clap` and `std`, so the argument surface
//! stays easy to read in one place.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bistro - restaurant site engine
///
/// Renders schema-driven pages and a fixed house menu to static HTML.
#[derive(Parser, Debug)]
#[command(name = "bistro")]
#[command(version)]
#[command(about = "Restaurant site engine - schema-driven pages rendered to static HTML")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a content directory seeded with the sample site
    Init {
        /// Content directory to create
        #[arg(default_value = "content")]
        dir: PathBuf,
    },
    /// Render every page to static HTML
    Build {
        /// Content directory to read
        #[arg(default_value = "content")]
        dir: PathBuf,
        /// Output directory for rendered pages
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
    },
    /// Validate stored content against the registered schemas
    Check {
        /// Content directory to read
        #[arg(default_value = "content")]
        dir: PathBuf,
    },
    /// Print the registered page schemas
    Schemas {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
