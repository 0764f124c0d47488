//! FieldAccessor - the field retrieval facade templates call.
//!
//! An accessor is constructed per render with the page being rendered, so
//! "which page am I reading from" is always explicit in the call site and
//! never ambient process state. Templates that need another page's values
//! say so by id.

use tracing::warn;

use crate::error::Result;
use crate::store::ContentStore;
use crate::types::{FieldValue, GroupEntry, PageId};

/// Read access to one page's field values.
pub struct FieldAccessor<'a> {
    store: &'a ContentStore,
    page: PageId,
}

impl<'a> FieldAccessor<'a> {
    /// Create an accessor scoped to the given page.
    pub fn new(store: &'a ContentStore, page: PageId) -> Self {
        Self { store, page }
    }

    /// The page this accessor reads from by default.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Stored value for `key` on this accessor's page. Absent is `None`.
    pub async fn get(&self, key: &str) -> Result<Option<FieldValue>> {
        self.get_for(self.page, key).await
    }

    /// Stored value for `key` on an explicitly named page.
    pub async fn get_for(&self, page: PageId, key: &str) -> Result<Option<FieldValue>> {
        self.store.read_value(page, key).await
    }

    /// Scalar text for `key`, or `None` when absent.
    ///
    /// A group stored under the key is a shape mismatch: it is logged and
    /// treated as absent rather than rendered wrongly.
    pub async fn scalar(&self, key: &str) -> Result<Option<String>> {
        match self.get(key).await? {
            Some(FieldValue::Scalar(text)) => Ok(Some(text)),
            Some(FieldValue::Group(_)) => {
                warn!(page = %self.page, key, "expected scalar value, found group");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Group entries for `key`, or `None` when absent.
    ///
    /// A scalar stored under the key is a shape mismatch: it is logged and
    /// treated as absent.
    pub async fn group(&self, key: &str) -> Result<Option<Vec<GroupEntry>>> {
        match self.get(key).await? {
            Some(FieldValue::Group(entries)) => Ok(Some(entries)),
            Some(FieldValue::Scalar(_)) => {
                warn!(page = %self.page, key, "expected group value, found scalar");
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
