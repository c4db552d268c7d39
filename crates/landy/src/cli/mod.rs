//! # CLI Behavior
//!
//! This is **one possible UI client** for landy—not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in
//! [`crate`].
//!
//! ## Adapter Wiring
//!
//! Only `generate` and `regenerate` talk to the generation endpoint, and only
//! `generate` may crawl a competitor site. The other commands work entirely
//! against local storage, so the HTTP adapters are constructed **only when
//! the chosen subcommand needs them**. In practice: you can list, show, edit,
//! reorder, publish and delete pages without an API key configured.
//!
//! ## Naming Sections
//!
//! Wherever a command takes a section, both forms work:
//!
//! - `landy edit <page> 2 --content '{...}'` — 1-based position
//! - `landy edit <page> 8f14e45f-... --content '{...}'` — section id
//!
//! Positions refer to the page's current order, so `1` is always whatever
//! section is on top right now.
//!
//! ## JSON Output
//!
//! `list`, `show` and `generate` accept `--json`, which prints the raw
//! document(s) to stdout and suppresses the human-readable rendering and
//! status messages. Log output goes to stderr, so `--json` stdout is always
//! clean enough to pipe into `jq`.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring, dispatch, per-command handlers
//! - `render`: Output formatting (page rendering, tables, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
