//! Bistro Init - scaffold a content directory.

use std::path::Path;

use bistro_content::ContentStore;
use tokio::fs;

use crate::error::{CliError, Result};
use crate::sample;

/// Run the init command.
///
/// Creates the content directory structure and seeds it with the sample
/// site. Refuses to touch a directory that is already initialized.
pub async fn run_init(dir: &Path) -> Result<()> {
    let store = ContentStore::new(dir);
    if store.is_initialized() {
        return Err(CliError::Validation(format!(
            "Already initialized: {}",
            store.site_path().display()
        )));
    }

    store.create_directories().await?;
    store.write_site(&sample::sample_site()).await?;

    let pages = sample::sample_pages();
    for page in &pages {
        store.write_page(page).await?;
    }
    let assets = sample::sample_assets();
    for asset in &assets {
        store.write_asset(asset).await?;
    }

    let static_dir = dir.join("static");
    fs::create_dir_all(&static_dir).await?;
    fs::write(static_dir.join("style.css"), sample::SAMPLE_STYLESHEET).await?;

    println!("Initialized content directory:\n");
    println!("  {}/", dir.display());
    println!("  ├── site.yaml");
    println!("  ├── pages/          {} sample pages", pages.len());
    println!("  ├── assets/         {} sample asset", assets.len());
    println!("  └── static/");
    println!("      └── style.css");
    println!("\nNext: bistro build {}", dir.display());

    Ok(())
}
