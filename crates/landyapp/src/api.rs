//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all landy operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., converting 1-based positions to section ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Section References
//!
//! Users rarely want to paste a UUID to touch a section (`landy edit <page> 2`
//! should work). [`SectionRef`] is the accepted grammar:
//!
//! - **Section id**: a full UUID (e.g., `8f14e45f-...`)
//! - **Position**: a 1-based index into the page's current section order
//!   (e.g., `1` is the first section)
//!
//! Positions are resolved against the page **at call time**; `0` and anything
//! past the last section fail validation. Resolution happens here so the
//! command layer only ever sees concrete ids.
//!
//! ## Adapters Are Optional
//!
//! The crawler and generator are attached with [`LandyApi::with_crawler`] and
//! [`LandyApi::with_generator`]. Purely local operations (list, show, edit,
//! reorder, publish, delete) never need them, so a caller without an API key
//! can still manage existing pages. Operations that do generate fail
//! validation if no generator was attached.
//!
//! ## Generic Over PageStore
//!
//! `LandyApi<S: PageStore>` is generic over the storage backend:
//! - Production: `LandyApi<FsStore>`
//! - Testing: `LandyApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.
//!
//! ## Testing Strategy
//!
//! API tests should verify:
//! - Section reference parsing and resolution
//! - The validation error paths for missing adapters
//!
//! API tests should **not** verify:
//! - Command logic (tested in command modules)
//! - Storage behavior (tested in store modules)

use crate::commands;
use crate::crawler::SiteCrawler;
use crate::error::{LandyError, Result};
use crate::generator::PageGenerator;
use crate::model::{GenerationContext, PageSpec};
use crate::store::PageStore;
use serde_json::{Map, Value};
use std::str::FromStr;
use uuid::Uuid;

/// How a caller names a section: by id, or by 1-based position in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRef {
    Id(Uuid),
    Position(usize),
}

impl FromStr for SectionRef {
    type Err = LandyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(SectionRef::Id(id));
        }
        s.parse::<usize>().map(SectionRef::Position).map_err(|_| {
            LandyError::Validation(format!(
                "Invalid section reference '{s}': expected a section id or a position like 1"
            ))
        })
    }
}

/// The main API facade for landy operations.
///
/// Generic over `PageStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct LandyApi<S: PageStore> {
    store: S,
    crawler: Option<Box<dyn SiteCrawler>>,
    generator: Option<Box<dyn PageGenerator>>,
}

impl<S: PageStore> LandyApi<S> {
    /// An API over a store, with no adapters attached. Enough for every
    /// operation that does not generate content.
    pub fn new(store: S) -> Self {
        Self {
            store,
            crawler: None,
            generator: None,
        }
    }

    pub fn with_crawler(mut self, crawler: Box<dyn SiteCrawler>) -> Self {
        self.crawler = Some(crawler);
        self
    }

    pub fn with_generator(mut self, generator: Box<dyn PageGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn generate_page(&mut self, context: GenerationContext) -> Result<commands::CmdResult> {
        let generator = require_generator(self.generator.as_deref())?;
        commands::generate::run(&mut self.store, self.crawler.as_deref(), generator, context)
    }

    pub fn list_pages(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_page(&self, page_id: Uuid) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, page_id)
    }

    pub fn edit_section(
        &mut self,
        page_id: Uuid,
        section: &SectionRef,
        content: Map<String, Value>,
    ) -> Result<commands::CmdResult> {
        let section_id = self.resolve_section(page_id, section)?;
        commands::edit::run(&mut self.store, page_id, section_id, content)
    }

    pub fn regenerate_section(
        &mut self,
        page_id: Uuid,
        section: &SectionRef,
    ) -> Result<commands::CmdResult> {
        let section_id = self.resolve_section(page_id, section)?;
        let generator = require_generator(self.generator.as_deref())?;
        commands::regenerate::run(&mut self.store, generator, page_id, section_id)
    }

    pub fn reorder_sections(
        &mut self,
        page_id: Uuid,
        order: &[SectionRef],
    ) -> Result<commands::CmdResult> {
        let page = self.store.get(page_id)?;
        let ids = order
            .iter()
            .map(|section| resolve_in_page(&page, section))
            .collect::<Result<Vec<Uuid>>>()?;
        commands::reorder::run(&mut self.store, page_id, &ids)
    }

    pub fn delete_section(
        &mut self,
        page_id: Uuid,
        section: &SectionRef,
    ) -> Result<commands::CmdResult> {
        let section_id = self.resolve_section(page_id, section)?;
        commands::delete_section::run(&mut self.store, page_id, section_id)
    }

    pub fn publish_page(&mut self, page_id: Uuid) -> Result<commands::CmdResult> {
        commands::publish::run(&mut self.store, page_id)
    }

    pub fn delete_page(&mut self, page_id: Uuid) -> Result<commands::CmdResult> {
        commands::delete_page::run(&mut self.store, page_id)
    }

    /// Resolve a section reference to a concrete id. Id references pass
    /// through untouched (the command validates existence); positions are
    /// looked up against the current page.
    fn resolve_section(&self, page_id: Uuid, section: &SectionRef) -> Result<Uuid> {
        if let SectionRef::Id(id) = section {
            return Ok(*id);
        }
        let page = self.store.get(page_id)?;
        resolve_in_page(&page, section)
    }
}

fn require_generator(generator: Option<&dyn PageGenerator>) -> Result<&dyn PageGenerator> {
    generator.ok_or_else(|| {
        LandyError::Validation(
            "No generator configured. Set OPENAI_API_KEY to enable content generation"
                .to_string(),
        )
    })
}

fn resolve_in_page(page: &PageSpec, section: &SectionRef) -> Result<Uuid> {
    match section {
        SectionRef::Id(id) => Ok(*id),
        SectionRef::Position(pos) => {
            if *pos == 0 || *pos > page.sections.len() {
                return Err(LandyError::Validation(format!(
                    "No section at position {} (page has {} sections)",
                    pos,
                    page.sections.len()
                )));
            }
            Ok(page.sections[pos - 1].id)
        }
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
