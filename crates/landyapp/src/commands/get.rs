use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PageStore;
use uuid::Uuid;

pub fn run<S: PageStore>(store: &S, page_id: Uuid) -> Result<CmdResult> {
    let page = store.get(page_id)?;
    Ok(CmdResult::default().with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandyError;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn test_get_returns_full_document() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let result = run(&store, page.id).unwrap();
        let loaded = result.page.unwrap();
        assert_eq!(loaded.id, page.id);
        assert_eq!(loaded.sections.len(), page.sections.len());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_get_unknown_page() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        match run(&store, id) {
            Err(LandyError::PageNotFound(err_id)) => assert_eq!(err_id, id),
            other => panic!("Expected PageNotFound, got {other:?}"),
        }
    }
}
