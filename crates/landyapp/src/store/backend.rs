use crate::error::Result;
use crate::model::PageSpec;
use uuid::Uuid;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocumentStore handles the "what" (version checks, listing order).
pub trait StorageBackend {
    /// Read a page document.
    /// Returns Ok(None) if no document with this id exists.
    /// Returns Err only on actual I/O or parse errors.
    fn read_document(&self, id: Uuid) -> Result<Option<PageSpec>>;

    /// Write a page document, keyed by `page.id`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_document(&self, page: &PageSpec) -> Result<()>;

    /// Delete a page document. Returns false if there was nothing to delete.
    fn delete_document(&self, id: Uuid) -> Result<bool>;

    /// List ids of all stored documents, in no particular order.
    fn list_ids(&self) -> Result<Vec<Uuid>>;
}
