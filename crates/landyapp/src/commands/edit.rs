use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PageStore;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Replace a section's content wholesale.
///
/// Deliberately an overwrite, not a field merge: merging would let stale
/// fields from an old client survive unnoticed. The new content is stored
/// as-is; type-specific schemas apply only to generator output.
pub fn run<S: PageStore>(
    store: &mut S,
    page_id: Uuid,
    section_id: Uuid,
    new_content: Map<String, Value>,
) -> Result<CmdResult> {
    let mut page = store.get(page_id)?;

    let section = helpers::require_section_mut(&mut page, section_id)?;
    let kind = section.kind;
    section.content = new_content;

    let page = helpers::commit(store, page)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Section updated ({}): {}",
        kind, section_id
    )));
    Ok(result.with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandyError;
    use crate::store::memory::{fixtures, InMemoryStore};
    use serde_json::json;

    fn new_content() -> Map<String, Value> {
        let mut content = Map::new();
        content.insert("headline".to_string(), json!("Completely new"));
        content
    }

    #[test]
    fn test_edit_replaces_content_wholesale() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        store.create(&page).unwrap();

        let result = run(&mut store, page.id, hero_id, new_content()).unwrap();

        let updated = result.page.unwrap();
        assert_eq!(updated.version, 2);
        let hero = updated.section(hero_id).unwrap();
        assert_eq!(hero.content["headline"], json!("Completely new"));
        // Old fields are gone, not merged
        assert!(!hero.content.contains_key("subheadline"));
    }

    #[test]
    fn test_edit_leaves_other_sections_untouched() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        let features_before = page.sections[1].clone();
        store.create(&page).unwrap();

        run(&mut store, page.id, hero_id, new_content()).unwrap();

        let stored = store.get(page.id).unwrap();
        let features_after = stored.section(features_before.id).unwrap();
        assert_eq!(features_after.kind, features_before.kind);
        assert_eq!(features_after.content, features_before.content);
        // Identity and order preserved
        assert_eq!(stored.sections[0].id, hero_id);
        assert_eq!(stored.sections[1].id, features_before.id);
    }

    #[test]
    fn test_edit_unknown_section() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let missing = Uuid::new_v4();
        match run(&mut store, page.id, missing, new_content()) {
            Err(LandyError::SectionNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected SectionNotFound, got {other:?}"),
        }
        // Failed edit does not bump the version
        assert_eq!(store.get(page.id).unwrap().version, 1);
    }

    #[test]
    fn test_edit_unknown_page() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, Uuid::new_v4(), Uuid::new_v4(), new_content()),
            Err(LandyError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_edit_accepts_arbitrary_object() {
        // Edits are not schema validated; any JSON object may be stored
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        store.create(&page).unwrap();

        let mut odd = Map::new();
        odd.insert("customField".to_string(), json!({"nested": [1, 2, 3]}));
        let result = run(&mut store, page.id, hero_id, odd).unwrap();

        let updated = result.page.unwrap();
        let hero_content = &updated.section(hero_id).unwrap().content;
        assert_eq!(hero_content["customField"]["nested"], json!([1, 2, 3]));
    }
}
