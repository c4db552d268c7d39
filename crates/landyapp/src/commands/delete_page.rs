use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PageStore;
use uuid::Uuid;

/// Remove a page permanently. There is no undo and no tombstone; a second
/// delete of the same id reports the page as missing.
pub fn run<S: PageStore>(store: &mut S, page_id: Uuid) -> Result<CmdResult> {
    store.delete(page_id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Page deleted: {page_id}")));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandyError;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn test_delete_page_removes_it() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let result = run(&mut store, page.id).unwrap();

        assert!(result.page.is_none());
        assert!(matches!(
            store.get(page.id),
            Err(LandyError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_delete_page_twice_reports_missing() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        run(&mut store, page.id).unwrap();
        match run(&mut store, page.id) {
            Err(LandyError::PageNotFound(id)) => assert_eq!(id, page.id),
            other => panic!("Expected PageNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_page_leaves_others_alone() {
        let mut store = InMemoryStore::new();
        let keep = fixtures::page("Retail");
        let drop = fixtures::page("Travel");
        store.create(&keep).unwrap();
        store.create(&drop).unwrap();

        run(&mut store, drop.id).unwrap();

        assert!(store.get(keep.id).is_ok());
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
