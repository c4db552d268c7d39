//! # Storage Layer
//!
//! This module defines the storage abstraction for landy. The [`PageStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Whole-Document Storage
//!
//! A page is stored as a single JSON document. There is no index file and no
//! per-field storage: every read loads the full [`PageSpec`], every write
//! replaces it. This keeps the section array and the version counter in one
//! place, so a document can never be half-updated.
//!
//! ## Optimistic Concurrency
//!
//! [`PageStore::replace`] takes the version the caller loaded. If the stored
//! document has moved on since (another process edited the page), the write is
//! rejected with a version conflict instead of silently clobbering the newer
//! state. Callers react by reloading and retrying or by surfacing the conflict.
//!
//! ## Implementations
//!
//! - [`DocumentStore`] over [`fs_backend::FsBackend`]: production storage,
//!   one file per page with atomic writes.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── page-{uuid}.json    # One PageSpec document per page
//! ```

use crate::error::Result;
use crate::model::{PageSpec, PageSummary};
use uuid::Uuid;

pub mod backend;
pub mod document_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use document_store::DocumentStore;

/// Abstract interface for page storage.
///
/// Implementations must persist whole documents and enforce the version
/// check on replace.
pub trait PageStore {
    /// Persist a brand-new page. Fails if a document with this id exists.
    fn create(&mut self, page: &PageSpec) -> Result<()>;

    /// Load a page by id.
    fn get(&self, id: Uuid) -> Result<PageSpec>;

    /// List summaries of all stored pages, newest first.
    fn list(&self) -> Result<Vec<PageSummary>>;

    /// Replace a stored page, but only if its stored version still equals
    /// `expected_version` (the version the caller loaded before mutating).
    fn replace(&mut self, id: Uuid, expected_version: u64, page: &PageSpec) -> Result<()>;

    /// Delete a page permanently. Deleting an absent page is an error.
    fn delete(&mut self, id: Uuid) -> Result<()>;
}
