use super::backend::StorageBackend;
use super::PageStore;
use crate::error::{LandyError, Result};
use crate::model::{PageSpec, PageSummary};
use tracing::warn;
use uuid::Uuid;

/// Store implementation over any [`StorageBackend`].
///
/// All business rules that do not depend on the storage medium live here:
/// create-only-once, the version check on replace, and listing order.
pub struct DocumentStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StorageBackend> PageStore for DocumentStore<B> {
    fn create(&mut self, page: &PageSpec) -> Result<()> {
        if self.backend.read_document(page.id)?.is_some() {
            return Err(LandyError::Store(format!(
                "Page already exists: {}",
                page.id
            )));
        }
        self.backend.write_document(page)
    }

    fn get(&self, id: Uuid) -> Result<PageSpec> {
        self.backend
            .read_document(id)?
            .ok_or(LandyError::PageNotFound(id))
    }

    fn list(&self) -> Result<Vec<PageSummary>> {
        let mut summaries = Vec::new();
        for id in self.backend.list_ids()? {
            match self.backend.read_document(id) {
                Ok(Some(page)) => summaries.push(page.summary()),
                // Deleted between list_ids and read; nothing to show
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping unreadable page document {}: {}", id, e);
                }
            }
        }
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn replace(&mut self, id: Uuid, expected_version: u64, page: &PageSpec) -> Result<()> {
        let stored = self
            .backend
            .read_document(id)?
            .ok_or(LandyError::PageNotFound(id))?;

        if stored.version != expected_version {
            return Err(LandyError::Conflict {
                page_id: id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        self.backend.write_document(page)
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        if !self.backend.delete_document(id)? {
            return Err(LandyError::PageNotFound(id));
        }
        Ok(())
    }
}
