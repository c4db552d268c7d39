use super::document_store::DocumentStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocumentStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocumentStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{GenerationContext, PageSpec, PageStatus, Section, SectionKind};
    use crate::store::PageStore;
    use serde_json::json;

    pub fn context(industry: &str) -> GenerationContext {
        GenerationContext {
            industry: industry.to_string(),
            offer: "eco friendly shoes".to_string(),
            target_audience: "teenagers".to_string(),
            brand_tone: "playful".to_string(),
            competitor_url: None,
        }
    }

    pub fn sections() -> Vec<Section> {
        let mut hero = serde_json::Map::new();
        hero.insert("headline".to_string(), json!("Step into better"));
        hero.insert("subheadline".to_string(), json!("Shoes that tread lightly"));
        hero.insert("ctaText".to_string(), json!("Shop now"));

        let mut features = serde_json::Map::new();
        features.insert("title".to_string(), json!("Why us"));
        features.insert(
            "items".to_string(),
            json!([{"title": "Recycled soles", "description": "Made from ocean plastic", "icon": "leaf"}]),
        );

        vec![
            Section::new(SectionKind::Hero, hero),
            Section::new(SectionKind::Features, features),
        ]
    }

    /// A complete draft page ready to be stored.
    pub fn page(industry: &str) -> PageSpec {
        PageSpec::new(context(industry), sections())
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_pages(mut self, count: usize) -> Self {
            for i in 0..count {
                let page = page(&format!("Industry {}", i + 1));
                self.store.create(&page).unwrap();
            }
            self
        }

        pub fn with_draft_page(mut self, industry: &str) -> Self {
            self.store.create(&page(industry)).unwrap();
            self
        }

        pub fn with_published_page(mut self, industry: &str) -> Self {
            let mut page = page(industry);
            page.status = PageStatus::Published;
            page.touch();
            self.store.create(&page).unwrap();
            self
        }
    }
}
