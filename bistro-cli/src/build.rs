//! Bistro Build - render every page to static HTML.

use std::collections::HashMap;
use std::path::Path;

use bistro_content::{ContentStore, PageId};
use bistro_render::Theme;
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CliError, Result};

/// Run the build command.
///
/// Reads the content directory, renders one document per page into the
/// output directory, and copies the static directory alongside. A site
/// with no pages still produces an index document with the empty state.
pub async fn run_build(dir: &Path, out: &Path) -> Result<()> {
    let store = ContentStore::new(dir);
    let site = store.read_site().await?;
    let theme = Theme::new(site)?;

    fs::create_dir_all(out).await?;

    let pages = store.read_all_pages().await?;
    if pages.is_empty() {
        let path = out.join("index.html");
        fs::write(&path, theme.render_empty()).await?;
        println!("No pages found; wrote {}", path.display());
        return Ok(());
    }

    // Slugs become file names; check all of them before writing anything.
    let mut slugs: HashMap<&str, PageId> = HashMap::new();
    for page in &pages {
        if !is_valid_slug(&page.slug) {
            return Err(CliError::Validation(format!(
                "Invalid slug '{}' on page {}. Must be lowercase, alphanumeric with hyphens.",
                page.slug, page.id
            )));
        }
        if let Some(first) = slugs.insert(page.slug.as_str(), page.id) {
            return Err(CliError::Validation(format!(
                "Pages {} and {} share the slug '{}'. Slugs name output files and must be unique.",
                first, page.id, page.slug
            )));
        }
    }

    for page in &pages {
        let document = theme.render_page(&store, page).await?;
        let path = out.join(format!("{}.html", page.slug));
        fs::write(&path, document).await?;
        debug!(page = %page.id, file = %path.display(), "wrote page");
    }

    let copied = copy_static(&dir.join("static"), out).await?;

    println!("Rendered {} pages to {}", pages.len(), out.display());
    if copied > 0 {
        println!("Copied {} static files", copied);
    }
    Ok(())
}

/// Slugs become file names; keep them boring.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 64
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Copy the static directory into the output, preserving relative paths.
async fn copy_static(static_dir: &Path, out: &Path) -> Result<usize> {
    if !static_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(static_dir) else {
            continue;
        };
        let dest = out.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::copy(entry.path(), &dest).await?;
        copied += 1;
    }
    Ok(copied)
}
