//! ContentStore - I/O primitives for the content directory
//!
//! The store provides access to stored pages, assets, and site settings.
//! No rendering logic lives here, just data access primitives; templates
//! and commands do all the work.
//!
//! Layout under the content root:
//!
//! ```text
//! content/
//!   site.yaml          site-wide settings
//!   pages/<id>.yaml    one file per page
//!   assets/<id>.yaml   one file per media item
//! ```

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::config::SiteConfig;
use crate::error::{ContentError, Result};
use crate::types::{Asset, AssetId, FieldValue, Page, PageId};

/// File-backed store for one site's content directory.
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Create a store for the given content directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to site.yaml
    pub fn site_path(&self) -> PathBuf {
        self.root.join("site.yaml")
    }

    /// Path to the pages directory
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    /// Path to a page's YAML file
    pub fn page_path(&self, id: PageId) -> PathBuf {
        self.pages_dir().join(format!("{}.yaml", id))
    }

    /// Path to the assets directory
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// Path to an asset's YAML file
    pub fn asset_path(&self, id: AssetId) -> PathBuf {
        self.assets_dir().join(format!("{}.yaml", id))
    }

    // =========================================================================
    // Directory initialization
    // =========================================================================

    /// Check if the content directory has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.site_path().exists()
    }

    /// Create the directory structure for a new content root.
    ///
    /// This is idempotent - safe to call multiple times.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.pages_dir()).await?;
        fs::create_dir_all(self.assets_dir()).await?;
        Ok(())
    }

    // =========================================================================
    // Site I/O
    // =========================================================================

    /// Read the site file.
    pub async fn read_site(&self) -> Result<SiteConfig> {
        let path = self.site_path();
        if !path.exists() {
            return Err(ContentError::NotInitialized {
                path: self.root.clone(),
            });
        }

        let content = fs::read_to_string(&path).await?;
        let site: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(site)
    }

    /// Write the site file (atomic write via temp file).
    pub async fn write_site(&self, site: &SiteConfig) -> Result<()> {
        let path = self.site_path();
        let content = serde_yaml::to_string(site)?;
        atomic_write(&path, content.as_bytes()).await
    }

    // =========================================================================
    // Page I/O
    // =========================================================================

    /// Read a page file. The id comes from the file name, not the file body.
    pub async fn read_page(&self, id: PageId) -> Result<Page> {
        let path = self.page_path(id);
        if !path.exists() {
            return Err(ContentError::PageNotFound { id });
        }

        let content = fs::read_to_string(&path).await?;
        let mut page: Page = serde_yaml::from_str(&content)?;
        page.id = id;
        Ok(page)
    }

    /// Write a page file (atomic write via temp file).
    pub async fn write_page(&self, page: &Page) -> Result<()> {
        let path = self.page_path(page.id);
        let content = serde_yaml::to_string(page)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// List all page ids by reading the pages directory, sorted ascending
    /// so directory iteration order never leaks into build output.
    pub async fn list_page_ids(&self) -> Result<Vec<PageId>> {
        let pages_dir = self.pages_dir();
        if !pages_dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&pages_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("yaml") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                match PageId::from_file_stem(stem) {
                    Some(id) => ids.push(id),
                    None => warn!(file = %path.display(), "skipping page file whose name is not a page id"),
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Read all pages in id order.
    pub async fn read_all_pages(&self) -> Result<Vec<Page>> {
        let ids = self.list_page_ids().await?;
        let mut pages = Vec::with_capacity(ids.len());

        for id in ids {
            pages.push(self.read_page(id).await?);
        }

        Ok(pages)
    }

    /// Read one field value off a page.
    ///
    /// Returns `Ok(None)` when the page does not exist or stores nothing
    /// under `key`; absence is a normal state, not an error.
    pub async fn read_value(&self, id: PageId, key: &str) -> Result<Option<FieldValue>> {
        let path = self.page_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        let page: Page = serde_yaml::from_str(&content)?;
        Ok(page.fields.get(key).cloned())
    }

    // =========================================================================
    // Asset I/O
    // =========================================================================

    /// Read an asset file. The id comes from the file name.
    pub async fn read_asset(&self, id: AssetId) -> Result<Asset> {
        let path = self.asset_path(id);
        if !path.exists() {
            return Err(ContentError::AssetNotFound { id });
        }

        let content = fs::read_to_string(&path).await?;
        let mut asset: Asset = serde_yaml::from_str(&content)?;
        asset.id = id;
        Ok(asset)
    }

    /// Write an asset file (atomic write via temp file).
    pub async fn write_asset(&self, asset: &Asset) -> Result<()> {
        let path = self.asset_path(asset.id);
        let content = serde_yaml::to_string(asset)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// List all asset ids by reading the assets directory, sorted ascending.
    pub async fn list_asset_ids(&self) -> Result<Vec<AssetId>> {
        let assets_dir = self.assets_dir();
        if !assets_dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&assets_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("yaml") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                match AssetId::from_file_stem(stem) {
                    Some(id) => ids.push(id),
                    None => warn!(file = %path.display(), "skipping asset file whose name is not an asset id"),
                }
            }
        }

        ids.sort();
        Ok(ids)
    }
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}
