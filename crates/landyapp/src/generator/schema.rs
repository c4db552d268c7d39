//! Validation of generated section content.
//!
//! These schemas gate what the generator is allowed to hand back: no kind may
//! come with an empty content map, and each section kind has a typed shape
//! with a few hard requirements (a hero needs a headline, FAQ items need both
//! question and answer). Extra fields the model invents are allowed through
//! untouched. Note the asymmetry with edits: user edits bypass these checks
//! entirely and may store any JSON object.

use super::GenerateError;
use crate::model::{Section, SectionKind};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
struct PagePayload {
    sections: Vec<SectionPayload>,
}

#[derive(Deserialize)]
struct SectionPayload {
    #[serde(rename = "type")]
    kind: SectionKind,
    content: Map<String, Value>,
}

// The content structs exist to prove the payload deserializes; most fields
// are never read back, only the ones with hard requirements.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct HeroContent {
    headline: String,
    subheadline: Option<String>,
    cta_text: Option<String>,
    background_image: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct FeaturesContent {
    title: Option<String>,
    items: Vec<FeatureItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct FeatureItem {
    title: String,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct TestimonialsContent {
    title: Option<String>,
    items: Vec<TestimonialItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct TestimonialItem {
    quote: String,
    author: Option<String>,
    role: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct FaqContent {
    title: Option<String>,
    items: Vec<FaqItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaqItem {
    question: String,
    answer: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct ContactContent {
    title: String,
    subtitle: Option<String>,
    cta_text: Option<String>,
    email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct FooterContent {
    company_name: Option<String>,
    tagline: Option<String>,
    links: Option<Vec<FooterLink>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct FooterLink {
    label: String,
    url: String,
}

/// Parse a whole generated page into sections with fresh ids.
pub(crate) fn parse_page_sections(raw: &str) -> Result<Vec<Section>, GenerateError> {
    let payload: PagePayload = serde_json::from_str(raw)
        .map_err(|e| GenerateError::Malformed(format!("Invalid page JSON: {e}")))?;

    if payload.sections.is_empty() {
        return Err(GenerateError::Rejected(
            "Generator returned no sections".to_string(),
        ));
    }

    let mut sections = Vec::with_capacity(payload.sections.len());
    for section in payload.sections {
        validate_content(section.kind, &section.content)
            .map_err(|reason| GenerateError::Rejected(format!("{} section: {reason}", section.kind)))?;
        sections.push(Section::new(section.kind, section.content));
    }
    Ok(sections)
}

/// Parse a single regenerated section.
pub(crate) fn parse_single_section(raw: &str) -> Result<Section, GenerateError> {
    let payload: SectionPayload = serde_json::from_str(raw)
        .map_err(|e| GenerateError::Malformed(format!("Invalid section JSON: {e}")))?;

    validate_content(payload.kind, &payload.content)
        .map_err(|reason| GenerateError::Rejected(format!("{} section: {reason}", payload.kind)))?;
    Ok(Section::new(payload.kind, payload.content))
}

/// Check content against the schema for its kind. Errors describe the first
/// problem found, in terms a user reading a failure message can act on.
pub(crate) fn validate_content(kind: SectionKind, content: &Map<String, Value>) -> Result<(), String> {
    if content.is_empty() {
        return Err("content must not be empty".to_string());
    }

    let value = Value::Object(content.clone());
    match kind {
        SectionKind::Hero => {
            let hero: HeroContent = typed(value)?;
            require_text("headline", &hero.headline)
        }
        SectionKind::Features => {
            let features: FeaturesContent = typed(value)?;
            require_items(features.items.len())?;
            for item in &features.items {
                require_text("feature title", &item.title)?;
            }
            Ok(())
        }
        SectionKind::Testimonials => {
            let testimonials: TestimonialsContent = typed(value)?;
            require_items(testimonials.items.len())?;
            for item in &testimonials.items {
                require_text("quote", &item.quote)?;
            }
            Ok(())
        }
        SectionKind::Faq => {
            let faq: FaqContent = typed(value)?;
            require_items(faq.items.len())?;
            for item in &faq.items {
                require_text("question", &item.question)?;
                require_text("answer", &item.answer)?;
            }
            Ok(())
        }
        SectionKind::Contact => {
            let contact: ContactContent = typed(value)?;
            require_text("title", &contact.title)
        }
        SectionKind::Footer => {
            // Shape check only beyond the empty-map gate; every footer field
            // is optional
            let _: FooterContent = typed(value)?;
            Ok(())
        }
    }
}

fn typed<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn require_items(count: usize) -> Result<(), String> {
    if count == 0 {
        Err("items must not be empty".to_string())
    } else {
        Ok(())
    }
}
