//! # Page Generation
//!
//! The bridge between landy and a chat-completions endpoint. [`PageGenerator`]
//! is the seam the rest of the crate programs against; [`HttpGenerator`] is
//! the production implementation speaking the OpenAI wire format.
//!
//! ## Contract
//!
//! Generation is all-or-nothing and single-attempt. One request goes out; if
//! the endpoint fails, the output cannot be parsed, or the parsed output does
//! not validate against the per-kind schemas, the whole operation fails with a
//! [`GenerateError`] and nothing is persisted by callers. There is no retry
//! loop here: a failed generation is surfaced to the user, who decides whether
//! to run it again.
//!
//! Model output is treated as untrusted input. It is fence-stripped (models
//! wrap JSON in markdown fences no matter how firmly told not to), parsed, and
//! validated in [`schema`] before a single [`Section`] is built from it.

use crate::config::LandyConfig;
use crate::crawler::SiteSignals;
use crate::error::Result;
use crate::model::{GenerationContext, Section};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
pub mod schema;

const TEMPERATURE: f32 = 0.7;
const PAGE_MAX_TOKENS: u32 = 2500;
const SECTION_MAX_TOKENS: u32 = 2000;

const SYSTEM_PROMPT: &str = "You are an expert landing page designer and conversion copywriter. \
You create compelling marketing copy that drives action, matches brand voice, \
and resonates with target audiences. You have deep knowledge of persuasive writing, \
user psychology, and marketing best practices. \
You always return your work as valid JSON with no markdown formatting.";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Generation endpoint returned HTTP {status}: {detail}")]
    Endpoint { status: u16, detail: String },
    #[error("Could not parse generated output: {0}")]
    Malformed(String),
    #[error("Unusable generated output: {0}")]
    Rejected(String),
}

/// Abstract interface for content generation.
///
/// Implementations produce whole section sets or single replacement sections.
/// A regenerated section must come back with the kind that was asked for;
/// callers verify this and reject mismatches.
pub trait PageGenerator {
    /// Generate the full section set for a new page.
    fn generate_page(
        &self,
        context: &GenerationContext,
        signals: Option<&SiteSignals>,
    ) -> std::result::Result<Vec<Section>, GenerateError>;

    /// Generate a fresh replacement for one section, keeping its kind.
    fn regenerate_section(
        &self,
        context: &GenerationContext,
        section: &Section,
        signals: Option<&SiteSignals>,
    ) -> std::result::Result<Section, GenerateError>;
}

// --- Wire Types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Production generator over a blocking HTTP client.
pub struct HttpGenerator {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl HttpGenerator {
    pub fn new(config: &LandyConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(GenerateError::Transport)?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// One chat-completions round trip. Single attempt; callers own retries.
    fn complete(&self, prompt: &str, max_tokens: u32) -> std::result::Result<String, GenerateError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens,
        };

        debug!(
            "Sending generation request to {} (model {}, prompt {} chars)",
            self.api_url,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            warn!("Generation endpoint returned {}: {}", status, detail);
            return Err(GenerateError::Endpoint {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| GenerateError::Malformed(format!("Bad response envelope: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerateError::Malformed("Response contained no choices".to_string()))
    }
}

impl PageGenerator for HttpGenerator {
    fn generate_page(
        &self,
        context: &GenerationContext,
        signals: Option<&SiteSignals>,
    ) -> std::result::Result<Vec<Section>, GenerateError> {
        let prompt = prompts::page_prompt(context, signals);
        let raw = self.complete(&prompt, PAGE_MAX_TOKENS)?;
        schema::parse_page_sections(strip_fences(&raw))
    }

    fn regenerate_section(
        &self,
        context: &GenerationContext,
        section: &Section,
        signals: Option<&SiteSignals>,
    ) -> std::result::Result<Section, GenerateError> {
        let prompt = prompts::section_prompt(context, section, signals);
        let raw = self.complete(&prompt, SECTION_MAX_TOKENS)?;
        let fresh = schema::parse_single_section(strip_fences(&raw))?;

        if fresh.kind != section.kind {
            return Err(GenerateError::Rejected(format!(
                "Asked for a {} section, got {}",
                section.kind, fresh.kind
            )));
        }

        // The replacement keeps the identity of the section it replaces
        Ok(Section {
            id: section.id,
            kind: fresh.kind,
            content: fresh.content,
        })
    }
}

/// Strip a markdown code fence if the model wrapped its JSON in one.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(inner) = rest.trim_start().strip_suffix("```") {
            return inner.trim();
        }
    }
    trimmed
}

// --- Test Doubles ---

#[cfg(any(test, feature = "test_utils"))]
pub mod mock {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    /// Canned generator for tests.
    ///
    /// Returns fixed sections, optionally lies about the section kind on
    /// regeneration, and records whether it was handed crawl signals.
    pub struct MockGenerator {
        fail: bool,
        page_sections: Vec<Section>,
        kind_override: Option<crate::model::SectionKind>,
        saw_signals: Cell<bool>,
    }

    impl MockGenerator {
        pub fn returning(page_sections: Vec<Section>) -> Self {
            Self {
                fail: false,
                page_sections,
                kind_override: None,
                saw_signals: Cell::new(false),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                page_sections: Vec::new(),
                kind_override: None,
                saw_signals: Cell::new(false),
            }
        }

        /// Make regeneration come back with this kind, whatever was asked.
        pub fn with_kind_override(mut self, kind: crate::model::SectionKind) -> Self {
            self.kind_override = Some(kind);
            self
        }

        pub fn saw_signals(&self) -> bool {
            self.saw_signals.get()
        }
    }

    impl PageGenerator for MockGenerator {
        fn generate_page(
            &self,
            _context: &GenerationContext,
            signals: Option<&SiteSignals>,
        ) -> std::result::Result<Vec<Section>, GenerateError> {
            self.saw_signals.set(signals.is_some());
            if self.fail {
                return Err(GenerateError::Rejected(
                    "Simulated generation failure".to_string(),
                ));
            }
            Ok(self.page_sections.clone())
        }

        fn regenerate_section(
            &self,
            _context: &GenerationContext,
            section: &Section,
            signals: Option<&SiteSignals>,
        ) -> std::result::Result<Section, GenerateError> {
            self.saw_signals.set(signals.is_some());
            if self.fail {
                return Err(GenerateError::Rejected(
                    "Simulated generation failure".to_string(),
                ));
            }

            let mut content = serde_json::Map::new();
            content.insert("headline".to_string(), json!("Fresh angle"));
            content.insert("regenerated".to_string(), json!(true));

            Ok(Section {
                id: section.id,
                kind: self.kind_override.unwrap_or(section.kind),
                content,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_plain_json_untouched() {
        assert_eq!(strip_fences(r#"{"sections": []}"#), r#"{"sections": []}"#);
    }

    #[test]
    fn test_strip_fences_removes_json_fence() {
        let fenced = "```json\n{\"sections\": []}\n```";
        assert_eq!(strip_fences(fenced), "{\"sections\": []}");
    }

    #[test]
    fn test_strip_fences_removes_bare_fence() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fences_keeps_unterminated_fence() {
        // Half a fence is model garbage; let the JSON parser report it
        let broken = "```json\n{\"a\": 1}";
        assert_eq!(strip_fences(broken), broken);
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: TEMPERATURE,
            max_tokens: 100,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 100);
    }

    #[test]
    fn test_chat_response_parses_content() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "hi");
    }

    #[test]
    fn test_mock_generator_kind_override() {
        use super::mock::MockGenerator;
        use crate::model::{Section, SectionKind};

        let generator = MockGenerator::returning(Vec::new())
            .with_kind_override(SectionKind::Hero);
        let faq = Section::new(SectionKind::Faq, serde_json::Map::new());
        let context = crate::store::memory::fixtures::context("Retail");

        let result = generator.regenerate_section(&context, &faq, None).unwrap();
        assert_eq!(result.kind, SectionKind::Hero);
        assert_eq!(result.id, faq.id);
    }
}
