//! # Command Layer
//!
//! This module contains the **core business logic** of landy: every user-facing
//! page operation lives in its own submodule as a pure function over the store
//! and the adapter traits.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement one operation each (generate, edit, reorder, publish, ...)
//! - Enforce the structural invariants: section ids stay unique, array order is
//!   the display order, the version counter moves by exactly 1 per success
//! - Perform each mutation as a single load → compute → write-back transaction
//! - Return structured [`CmdResult`] values, never formatted strings
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr, or formatting concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Retries**: a version conflict or a failed generation is returned to the
//!   caller as-is; whether to try again is the caller's decision
//!
//! ## The Write-Back Contract
//!
//! Every mutating command follows the same shape: load the document, compute
//! the new state in memory, then [`helpers::commit`] it — which stamps the
//! version bump and hands the store the version that was loaded. If another
//! writer got there first, the store rejects the write and nothing is
//! persisted. Validation happens before the write, so a failed command never
//! leaves a half-updated document.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` plus the mock adapters, cover every error branch, and
//! assert on `CmdResult` contents and on the stored document afterwards.
//!
//! ## Command Modules
//!
//! - [`generate`]: Create a page from business context (crawl + LLM)
//! - [`get`]: Load one page
//! - [`list`]: Summaries of all pages
//! - [`edit`]: Replace a section's content wholesale
//! - [`regenerate`]: Ask the LLM for a fresh take on one section
//! - [`reorder`]: Rewrite the section order from a permutation of ids
//! - [`delete_section`]: Remove one section
//! - [`publish`]: Mark a page published (rejects empty pages)
//! - [`delete_page`]: Remove a page permanently
//! - [`helpers`]: Shared section lookup and the commit step

use crate::model::{PageSpec, PageSummary};
use serde::Serialize;

pub mod delete_page;
pub mod delete_section;
pub mod edit;
pub mod generate;
pub mod get;
pub mod helpers;
pub mod list;
pub mod publish;
pub mod regenerate;
pub mod reorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured result of one command.
///
/// `page` is the document after the operation (absent for `delete_page` and
/// `list`), `listed_pages` the summaries for `list`. The UI layer decides how
/// to render all of it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<PageSpec>,
    pub listed_pages: Vec<PageSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_listed_pages(mut self, pages: Vec<PageSummary>) -> Self {
        self.listed_pages = pages;
        self
    }
}
