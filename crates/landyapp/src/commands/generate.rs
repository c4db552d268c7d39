use crate::commands::{CmdMessage, CmdResult};
use crate::crawler::{SiteCrawler, SiteSignals};
use crate::error::Result;
use crate::generator::{GenerateError, PageGenerator};
use crate::model::{GenerationContext, PageSpec};
use crate::store::PageStore;
use tracing::{info, warn};

/// Generate a new page: crawl the competitor (best effort), ask the generator
/// for a full section set, persist the result.
///
/// The crawl can fail without consequence; a generator failure aborts the
/// whole operation and nothing is stored.
pub fn run<S: PageStore>(
    store: &mut S,
    crawler: Option<&dyn SiteCrawler>,
    generator: &dyn PageGenerator,
    context: GenerationContext,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let signals = match (&context.competitor_url, crawler) {
        (Some(url), Some(crawler)) => crawl_signals(crawler, url, &mut result),
        _ => None,
    };

    let sections = generator.generate_page(&context, signals.as_ref())?;
    if sections.is_empty() {
        return Err(GenerateError::Rejected("Generator returned no sections".to_string()).into());
    }

    let page = PageSpec::new(context, sections);
    store.create(&page)?;
    info!("Generated page {} with {} sections", page.id, page.sections.len());

    result.add_message(CmdMessage::success(format!(
        "Page generated: {} ({} sections)",
        page.id,
        page.sections.len()
    )));
    Ok(result.with_page(page))
}

/// Best-effort crawl. A failure is downgraded to a warning so generation can
/// proceed on textual context alone.
fn crawl_signals(
    crawler: &dyn SiteCrawler,
    url: &str,
    result: &mut CmdResult,
) -> Option<SiteSignals> {
    match crawler.crawl(url) {
        Ok(signals) => {
            result.add_message(CmdMessage::info(format!(
                "Crawled {} ({} inner pages)",
                signals.source_url,
                signals.inner_pages.len()
            )));
            Some(signals)
        }
        Err(e) => {
            warn!("Website crawl failed for {}: {}", url, e);
            result.add_message(CmdMessage::warning(
                "Website crawl failed, proceeding without brand context",
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::mock::MockCrawler;
    use crate::error::LandyError;
    use crate::generator::mock::MockGenerator;
    use crate::model::PageStatus;
    use crate::store::memory::{fixtures, InMemoryStore};

    fn context_with_url() -> GenerationContext {
        GenerationContext {
            competitor_url: Some("https://example.com".to_string()),
            ..fixtures::context("E-commerce")
        }
    }

    #[test]
    fn test_generate_creates_draft_at_version_one() {
        let mut store = InMemoryStore::new();
        let generator = MockGenerator::returning(fixtures::sections());

        let result = run(&mut store, None, &generator, fixtures::context("E-commerce")).unwrap();

        let page = result.page.unwrap();
        assert_eq!(page.status, PageStatus::Draft);
        assert_eq!(page.version, 1);
        assert_eq!(page.sections.len(), 2);

        let stored = store.get(page.id).unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.context.industry, "E-commerce");
    }

    #[test]
    fn test_generate_passes_crawl_signals_to_generator() {
        let mut store = InMemoryStore::new();
        let crawler = MockCrawler::returning(SiteSignals::default());
        let generator = MockGenerator::returning(fixtures::sections());

        run(&mut store, Some(&crawler), &generator, context_with_url()).unwrap();
        assert!(generator.saw_signals());
    }

    #[test]
    fn test_generate_skips_crawl_without_url() {
        let mut store = InMemoryStore::new();
        let crawler = MockCrawler::returning(SiteSignals::default());
        let generator = MockGenerator::returning(fixtures::sections());

        run(
            &mut store,
            Some(&crawler),
            &generator,
            fixtures::context("E-commerce"),
        )
        .unwrap();
        assert!(!generator.saw_signals());
    }

    #[test]
    fn test_generate_absorbs_crawl_failure() {
        let mut store = InMemoryStore::new();
        let crawler = MockCrawler::failing();
        let generator = MockGenerator::returning(fixtures::sections());

        let result = run(&mut store, Some(&crawler), &generator, context_with_url()).unwrap();

        // Generation succeeded anyway, from textual context alone
        let page = result.page.unwrap();
        assert_eq!(page.version, 1);
        assert_eq!(page.status, PageStatus::Draft);
        assert!(!generator.saw_signals());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("crawl failed")));
    }

    #[test]
    fn test_generate_fails_when_generator_fails() {
        let mut store = InMemoryStore::new();
        let generator = MockGenerator::failing();

        let result = run(&mut store, None, &generator, fixtures::context("E-commerce"));
        assert!(matches!(result, Err(LandyError::Generation(_))));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_generate_rejects_empty_section_set() {
        let mut store = InMemoryStore::new();
        let generator = MockGenerator::returning(Vec::new());

        let result = run(&mut store, None, &generator, fixtures::context("E-commerce"));
        assert!(matches!(result, Err(LandyError::Generation(_))));
        // Nothing was persisted
        assert!(store.list().unwrap().is_empty());
    }
}
