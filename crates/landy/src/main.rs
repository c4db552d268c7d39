//! # Landy CLI Architecture
//!
//! Landy ships with a fully fledged CLI client, but the binary is
//! intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination. The CLI itself is
//! organized to keep the UI-specific concerns **entirely separate** from the
//! application logic.
//!
//! ## Workspace Structure
//!
//! Landy is organized as a Cargo workspace with two crates:
//! - `crates/landyapp/` — Core library with UI-agnostic business logic
//! - `crates/landy/` — This CLI tool, depends on the `landyapp` library
//!
//! ## Layering
//!
//! The overall architecture mirrors the library docs, but from the CLI
//! vantage point:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/landy/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/landyapp/src/api.rs)                     │
//! │  - Normalizes section references → section ids              │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/landyapp/src/commands/*)             │
//! │  - Pure business logic + data access                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic: functions take normal Rust
//! values, return normal Rust types, and never assume terminal I/O. The CLI
//! layer is therefore responsible for **all** user-facing concerns: argument
//! parsing, adapter wiring, dispatch, error handling, and rendering.
//!
//! ## Exit Codes
//!
//! - `0`: The operation succeeded
//! - `1`: The operation failed (not found, validation, conflict, network)
//! - `2`: clap rejected the arguments
//!
//! Errors print as a single `Error: ...` line on stderr; diagnostics beyond
//! that are available via the `LANDY_LOG` environment variable, which feeds a
//! `tracing` filter writing to stderr.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
