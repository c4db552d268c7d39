use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::generator::{GenerateError, PageGenerator};
use crate::store::PageStore;
use uuid::Uuid;

/// Replace one section's content with a fresh generation.
///
/// The section keeps its id and its kind; a generator that answers with a
/// different kind is rejected and the stored page is left as it was. The
/// prompt is built from the page's original generation context — regeneration
/// does not re-crawl the competitor site.
pub fn run<S: PageStore>(
    store: &mut S,
    generator: &dyn PageGenerator,
    page_id: Uuid,
    section_id: Uuid,
) -> Result<CmdResult> {
    let mut page = store.get(page_id)?;

    let section = helpers::require_section(&page, section_id)?;
    let fresh = generator.regenerate_section(&page.context, section, None)?;
    if fresh.kind != section.kind {
        return Err(GenerateError::Rejected(format!(
            "Asked for a {} section, generator answered with {}",
            section.kind, fresh.kind
        ))
        .into());
    }

    let kind = section.kind;
    helpers::require_section_mut(&mut page, section_id)?.content = fresh.content;
    let page = helpers::commit(store, page)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Section regenerated ({}): {}",
        kind, section_id
    )));
    Ok(result.with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandyError;
    use crate::generator::mock::MockGenerator;
    use crate::model::SectionKind;
    use crate::store::memory::{fixtures, InMemoryStore};
    use serde_json::json;

    #[test]
    fn test_regenerate_replaces_content_keeps_identity() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        store.create(&page).unwrap();

        let generator = MockGenerator::returning(Vec::new());
        let result = run(&mut store, &generator, page.id, hero_id).unwrap();

        let updated = result.page.unwrap();
        assert_eq!(updated.version, 2);
        let hero = updated.section(hero_id).unwrap();
        assert_eq!(hero.kind, SectionKind::Hero);
        assert_eq!(hero.content["regenerated"], json!(true));
        // Position unchanged
        assert_eq!(updated.sections[0].id, hero_id);
    }

    #[test]
    fn test_regenerate_rejects_kind_change() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        let original_content = page.sections[0].content.clone();
        store.create(&page).unwrap();

        let generator = MockGenerator::returning(Vec::new()).with_kind_override(SectionKind::Faq);
        let result = run(&mut store, &generator, page.id, hero_id);
        assert!(matches!(result, Err(LandyError::Generation(_))));

        // Nothing changed in the store
        let stored = store.get(page.id).unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.section(hero_id).unwrap().content, original_content);
    }

    #[test]
    fn test_regenerate_generator_failure_leaves_page_untouched() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        let hero_id = page.sections[0].id;
        store.create(&page).unwrap();

        let generator = MockGenerator::failing();
        assert!(matches!(
            run(&mut store, &generator, page.id, hero_id),
            Err(LandyError::Generation(_))
        ));
        assert_eq!(store.get(page.id).unwrap().version, 1);
    }

    #[test]
    fn test_regenerate_unknown_section() {
        let mut store = InMemoryStore::new();
        let page = fixtures::page("Retail");
        store.create(&page).unwrap();

        let generator = MockGenerator::returning(Vec::new());
        let missing = Uuid::new_v4();
        match run(&mut store, &generator, page.id, missing) {
            Err(LandyError::SectionNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected SectionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_regenerate_unknown_page() {
        let mut store = InMemoryStore::new();
        let generator = MockGenerator::returning(Vec::new());
        assert!(matches!(
            run(&mut store, &generator, Uuid::new_v4(), Uuid::new_v4()),
            Err(LandyError::PageNotFound(_))
        ));
    }
}
