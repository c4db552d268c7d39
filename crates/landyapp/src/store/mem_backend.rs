use super::backend::StorageBackend;
use crate::error::{LandyError, Result};
use crate::model::PageSpec;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since landy is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    documents: RefCell<HashMap<Uuid, PageSpec>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            documents: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self, id: Uuid) -> Result<Option<PageSpec>> {
        let documents = self.documents.borrow();
        Ok(documents.get(&id).cloned())
    }

    fn write_document(&self, page: &PageSpec) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(LandyError::Store("Simulated write error".to_string()));
        }
        let mut documents = self.documents.borrow_mut();
        documents.insert(page.id, page.clone());
        Ok(())
    }

    fn delete_document(&self, id: Uuid) -> Result<bool> {
        let mut documents = self.documents.borrow_mut();
        Ok(documents.remove(&id).is_some())
    }

    fn list_ids(&self) -> Result<Vec<Uuid>> {
        let documents = self.documents.borrow();
        Ok(documents.keys().copied().collect())
    }
}
