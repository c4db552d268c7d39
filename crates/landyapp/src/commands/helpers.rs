use crate::error::{LandyError, Result};
use crate::model::{PageSpec, Section};
use crate::store::PageStore;
use tracing::debug;
use uuid::Uuid;

/// Locate a section or fail with the error callers surface as 404.
pub fn require_section(page: &PageSpec, section_id: Uuid) -> Result<&Section> {
    page.section(section_id)
        .ok_or(LandyError::SectionNotFound(section_id))
}

pub fn require_section_mut(page: &mut PageSpec, section_id: Uuid) -> Result<&mut Section> {
    page.section_mut(section_id)
        .ok_or(LandyError::SectionNotFound(section_id))
}

/// Finalize a mutation: stamp the version bump and write the document back,
/// keyed to the version it was loaded at. The store rejects the write if a
/// concurrent mutation moved the stored version on, so call this exactly once
/// per operation, after all validation has passed.
pub fn commit<S: PageStore>(store: &mut S, mut page: PageSpec) -> Result<PageSpec> {
    let loaded_version = page.version;
    page.touch();
    store.replace(page.id, loaded_version, &page)?;
    debug!("Committed page {} at version {}", page.id, page.version);
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn test_require_section_finds_by_id() {
        let page = fixtures::page("Retail");
        let wanted = page.sections[1].id;
        assert_eq!(require_section(&page, wanted).unwrap().id, wanted);
    }

    #[test]
    fn test_require_section_missing() {
        let page = fixtures::page("Retail");
        let missing = Uuid::new_v4();
        match require_section(&page, missing) {
            Err(LandyError::SectionNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected SectionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_bumps_version_once() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let loaded = store.get(page.id).unwrap();
        let committed = commit(&mut store, loaded).unwrap();

        assert_eq!(committed.version, 2);
        assert_eq!(store.get(page.id).unwrap().version, 2);
    }

    #[test]
    fn test_commit_stale_load_is_conflict() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let first = store.get(page.id).unwrap();
        let second = store.get(page.id).unwrap();

        commit(&mut store, first).unwrap();
        match commit(&mut store, second) {
            Err(LandyError::Conflict {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected Conflict, got {other:?}"),
        }
        // The loser's write left no trace
        assert_eq!(store.get(page.id).unwrap().version, 2);
    }
}
