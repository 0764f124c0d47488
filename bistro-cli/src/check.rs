//! Bistro Check - validate stored content against the field schemas.
//!
//! Findings:
//! - Error: stored value shape disagrees with the declaration, an asset
//!   reference does not resolve, or two pages share a slug. These render
//!   wrong, not at all, or overwrite each other in the build output.
//! - Warning: unknown template, undeclared field, unknown sub-field.
//!   These render (the fallback picks up unknown templates) but usually
//!   point at a typo.
//!
//! A declared field with no stored value is not a finding; templates
//! treat absent values as empty.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use bistro_content::{AssetId, ContentError, ContentStore, FieldValue, Page, PageId};
use bistro_fields::{default_registry, FieldDef, SchemaRegistry, ValueKind};

use crate::error::Result;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One problem found in the content directory.
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Walks every page and collects findings against the schema registry.
pub struct ContentChecker<'a> {
    store: &'a ContentStore,
    registry: SchemaRegistry,
    findings: Vec<Finding>,
}

impl<'a> ContentChecker<'a> {
    pub fn new(store: &'a ContentStore) -> Result<Self> {
        Ok(Self {
            store,
            registry: default_registry()?,
            findings: Vec::new(),
        })
    }

    /// Run all checks across the stored pages.
    pub async fn run(&mut self) -> Result<()> {
        let pages = self.store.read_all_pages().await?;
        self.check_slugs(&pages);
        for page in &pages {
            self.check_page(page).await?;
        }
        Ok(())
    }

    /// Two pages sharing a slug would build to the same output file.
    fn check_slugs(&mut self, pages: &[Page]) {
        let mut seen: HashMap<&str, PageId> = HashMap::new();
        for page in pages {
            if let Some(first) = seen.insert(page.slug.as_str(), page.id) {
                self.findings.push(Finding::error(format!(
                    "pages {} and {} share the slug '{}', build would write both to the same file",
                    first, page.id, page.slug
                )));
            }
        }
    }

    async fn check_page(&mut self, page: &Page) -> Result<()> {
        let Some(schema) = self.registry.get(&page.template).cloned() else {
            self.findings.push(Finding::warning(format!(
                "page {}: template '{}' has no schema, page will use the fallback layout",
                page.id, page.template
            )));
            return Ok(());
        };

        for (key, value) in &page.fields {
            match schema.get(key) {
                None => {
                    self.findings.push(Finding::warning(format!(
                        "page {}: field '{}' is not declared for template '{}'",
                        page.id, key, page.template
                    )));
                }
                Some(FieldDef::Scalar(def)) => match value {
                    FieldValue::Scalar(text) => {
                        if def.kind == ValueKind::AssetRef {
                            self.check_asset_ref(page, key, text).await?;
                        }
                    }
                    FieldValue::Group(_) => {
                        self.findings.push(Finding::error(format!(
                            "page {}: field '{}' is declared scalar but holds a list of entries",
                            page.id, key
                        )));
                    }
                },
                Some(FieldDef::Group(def)) => match value {
                    FieldValue::Scalar(_) => {
                        self.findings.push(Finding::error(format!(
                            "page {}: field '{}' is declared as a group but holds plain text",
                            page.id, key
                        )));
                    }
                    FieldValue::Group(entries) => {
                        for (position, entry) in entries.iter().enumerate() {
                            for sub_key in entry.0.keys() {
                                if def.sub_field(sub_key).is_none() {
                                    self.findings.push(Finding::warning(format!(
                                        "page {}: entry {} of '{}' has unknown sub-field '{}'",
                                        page.id,
                                        position + 1,
                                        key,
                                        sub_key
                                    )));
                                }
                            }
                        }
                    }
                },
            }
        }
        Ok(())
    }

    async fn check_asset_ref(&mut self, page: &Page, key: &str, text: &str) -> Result<()> {
        let Some(id) = AssetId::parse(text) else {
            self.findings.push(Finding::error(format!(
                "page {}: field '{}' holds '{}', which is not an asset id",
                page.id, key, text
            )));
            return Ok(());
        };
        match self.store.read_asset(id).await {
            Ok(_) => {}
            Err(ContentError::AssetNotFound { .. }) => {
                self.findings.push(Finding::error(format!(
                    "page {}: field '{}' references asset {} which does not exist",
                    page.id, key, id
                )));
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Exit code: 1 when any finding is an error, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.count(Severity::Error) > 0 {
            1
        } else {
            0
        }
    }
}

/// Run the check command and print findings.
pub async fn run_check(dir: &Path) -> Result<i32> {
    let store = ContentStore::new(dir);
    store.read_site().await?;

    let mut checker = ContentChecker::new(&store)?;
    checker.run().await?;

    for finding in checker.findings() {
        println!("{:>7}: {}", finding.severity, finding.message);
    }

    let errors = checker.count(Severity::Error);
    let warnings = checker.count(Severity::Warning);
    if errors == 0 && warnings == 0 {
        println!("Content OK");
    } else {
        println!("{} errors, {} warnings", errors, warnings);
    }
    Ok(checker.exit_code())
}
