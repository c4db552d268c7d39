use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PageStore;

pub fn run<S: PageStore>(store: &S) -> Result<CmdResult> {
    let summaries = store.list()?;
    Ok(CmdResult::default().with_listed_pages(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_list_empty_store() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_pages.is_empty());
        assert!(result.page.is_none());
    }

    #[test]
    fn test_list_returns_all_summaries() {
        let fixture = StoreFixture::default().with_pages(3);
        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed_pages.len(), 3);
    }
}
