//! Bistro CLI - restaurant site generator command-line interface.
//!
//! Commands:
//! - `bistro init [dir]`: Seed a content directory with the sample site
//! - `bistro build [dir]`: Render every page to static HTML
//! - `bistro check [dir]`: Validate stored content against the schemas
//! - `bistro schemas`: Print the built-in page schemas
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error, or `check` found at least one error-level finding

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bistro::{build, check, init, schemas};
use bistro::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("bistro=debug,bistro_fields=debug,bistro_content=debug,bistro_render=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = dispatch_command(cli).await;
    std::process::exit(exit_code);
}

/// Dispatch a parsed CLI to the appropriate command handler.
async fn dispatch_command(cli: Cli) -> i32 {
    match cli.command {
        Commands::Init { dir } => result_to_exit(init::run_init(&dir).await),
        Commands::Build { dir, out } => result_to_exit(build::run_build(&dir, &out).await),
        Commands::Check { dir } => match check::run_check(&dir).await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Schemas { json } => result_to_exit(schemas::run_schemas(json)),
    }
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
