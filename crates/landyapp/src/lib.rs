//! # Landy Architecture
//!
//! Landy is a **UI-agnostic landing page engine**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (the landy binary crate)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions → section ids)              │
//! │  - Holds the optional crawler/generator adapters            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one operation per module            │
//! │  - Owns the version counter and the write-back contract     │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                      │
//!                    ▼                      ▼
//! ┌───────────────────────────┐  ┌─────────────────────────────┐
//! │  Storage Layer (store/)   │  │  Adapters                   │
//! │  - PageStore trait        │  │  - SiteCrawler (crawler.rs) │
//! │  - FsStore (production)   │  │  - PageGenerator            │
//! │  - InMemoryStore (tests)  │  │    (generator/)             │
//! └───────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## The Document Model
//!
//! Everything revolves around one document type: [`model::PageSpec`], a
//! generated landing page as an ordered list of typed sections plus the
//! business context it was generated from. Pages are whole-document
//! read/modify/write with an optimistic version counter; there is no partial
//! update path and no cross-page transaction.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The two places that talk to the network—the crawler and the generator—sit
//! behind traits, so the same core can serve a REST API, a browser app, or
//! test suites that never open a socket.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    over `InMemoryStore` and the mock adapters. This is where the lion's
//!    share of testing lives.
//!
//! 2. **API** (`api.rs`): Tests for input normalization and adapter wiring,
//!    not the logic behind it.
//!
//! 3. **Storage** (`store/`): Backend unit tests plus filesystem integration
//!    tests in `tests/`.
//!
//! 4. **CLI** (the binary crate): Argument parsing and output formatting.
//!
//! ## Development Workflow
//!
//! When implementing features, work **inside-out**:
//!
//! 1. **Logic**: Implement and fully test in `commands/<cmd>.rs`
//! 2. **API**: Add facade method in `api.rs`, test normalization
//! 3. **CLI**: Add the subcommand and handler in the binary crate
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`PageSpec`, `Section`, `GenerationContext`)
//! - [`crawler`]: Best-effort competitor site crawling
//! - [`generator`]: LLM-backed content generation and output validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod crawler;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
