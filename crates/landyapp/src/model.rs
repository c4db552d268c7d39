//! # Domain Model: Pages, Sections, and the Version Counter
//!
//! This module defines the persisted shapes for landy: [`PageSpec`], [`Section`],
//! and the small enums around them.
//!
//! ## The Aggregate
//!
//! A [`PageSpec`] is one generated landing page: an immutable snapshot of the
//! business inputs it was generated from ([`GenerationContext`]), plus an
//! ordered list of [`Section`]s. The whole aggregate is read and written as a
//! single document; there is no partial-field storage below it.
//!
//! ## Ordering
//!
//! The position of a section in `sections` IS its display order. There is no
//! `order_index` field to drift out of sync with the array; reordering means
//! rewriting the array. Section ids stay stable across reorders and edits.
//!
//! ## The Version Counter
//!
//! `version` starts at 1 and goes up by exactly 1 per successful mutation via
//! [`PageSpec::touch`]. The store compares it on write (optimistic
//! concurrency), so a failed operation never bumps it. `context` is written
//! once at creation and never touched again.
//!
//! ## Section Content
//!
//! `Section.content` is a free-form JSON object. Its expected shape depends on
//! the section kind (a hero has a headline, features have items, ...), but that
//! schema is only enforced where model output enters the system — see
//! `generator::schema`. Edits replace content wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

impl Default for PageStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// The closed set of section types a page can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Testimonials,
    Faq,
    Contact,
    Footer,
}

impl SectionKind {
    /// All kinds in canonical page order (top of page to bottom).
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "faq",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered block of page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: Map<String, Value>,
}

impl Section {
    pub fn new(kind: SectionKind, content: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
        }
    }
}

/// The business inputs a page was generated from. Write-once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    pub industry: String,
    pub offer: String,
    pub target_audience: String,
    pub brand_tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_url: Option<String>,
}

/// The root persisted document describing one generated landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    pub id: Uuid,
    pub context: GenerationContext,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub status: PageStatus,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageSpec {
    pub fn new(context: GenerationContext, sections: Vec<Section>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            context,
            sections,
            status: PageStatus::Draft,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful mutation: bump the version and refresh `updated_at`.
    /// Call this exactly once per operation, after the new state is computed.
    pub fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }

    pub fn section(&self, section_id: Uuid) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_mut(&mut self, section_id: Uuid) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn position_of(&self, section_id: Uuid) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            id: self.id,
            industry: self.context.industry.clone(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Listing projection: enough to identify a page without loading its sections.
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub id: Uuid,
    pub industry: String,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
}
