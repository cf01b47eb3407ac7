//! # Quire Architecture
//!
//! Quire catalogues a directory of markdown writing. It reads the YAML header
//! at the top of each `.md` file, groups documents by their `category`, and
//! orders each group by a chosen sort policy. The library does the reading and
//! organising; the `quire` binary is one client that renders the result.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, styles output, runs the browse loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session, parses selectors                       │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, view, path, open, export, config                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (scanner, header, model, sort, tree, session)         │
//! │  - Read-only pass over the filesystem, no caching           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! A scan only fails when its root is missing or is not a directory. Anything
//! wrong with an individual file (unreadable, not UTF-8, malformed header,
//! unreadable metadata) is logged with `tracing` and the document is still
//! produced with safe defaults.
//!
//! ## Module Overview
//!
//! - [`header`]: YAML front-matter detection and parsing
//! - [`model`]: `Document`, its metadata, and the serializable record view
//! - [`scanner`]: directory walk and category grouping
//! - [`sort`]: the four sort policies
//! - [`tree`]: display-ordered catalog tree and summary
//! - [`session`]: one browsing run (scan, re-sort, selection)
//! - [`index`]: display index and selector parsing
//! - [`api`]: facade over the command layer
//! - [`commands`]: per-command logic
//! - [`config`]: `config.json` and setting precedence
//! - [`editor`]: external editor resolution and launch
//! - [`peek`]: condensed body previews
//! - [`error`]: error types
//! - `cli`: argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod header;
pub mod index;
pub mod model;
pub mod peek;
pub mod scanner;
pub mod session;
pub mod sort;
pub mod tree;
