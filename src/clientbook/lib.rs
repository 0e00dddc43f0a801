//! # Clientbook Architecture
//!
//! Clientbook is a **UI-agnostic client-management library**. It keeps an ordered list of
//! client records in memory and exposes the handful of operations a CRM front-end needs:
//! create, update, delete, search and per-status counts. The terminal client shipped in
//! this package is one possible front-end; the same core could back a web view or a bot.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the session, renders output       │
//! │  - Owns the draft form and the delete confirmation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ClientBook: the only sanctioned way to touch the store   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, ordering rules, filtering                    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - InMemoryStore (ordered Vec + monotonic id counter)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns `Result<CmdResult>`
//! and never writes to stdout/stderr. Diagnostics go through `tracing`; whether anything
//! is emitted is decided by the binary that installs a subscriber.
//!
//! ## Records Are Session State
//!
//! Nothing is persisted. A session starts from the sample records in [`seed`] (or from an
//! empty store) and ends with the process. The only file ever read is the optional
//! configuration (see [`config`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Client`, `ClientDraft`, `Status`)
//! - [`seed`]: Sample records a session starts with
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`error`]: Error types
//! - `cli`: Argument parsing, interactive session and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod seed;
pub mod store;
