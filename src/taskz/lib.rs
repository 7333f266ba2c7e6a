//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task-list library**. The CLI is a thin client;
//! the same core could back a mobile screen, a REST endpoint, or a TUI.
//!
//! ## The Layers, Inside-Out
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade over commands                                     │
//! │  - Owns the read cache and mutation event listeners         │
//! │  - Serializes mutations via &mut self                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: read-modify-write per operation     │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait: one document, load/save only │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Single-Document Model
//!
//! The whole collection persists as one JSON array in one slot. Every
//! mutation loads the full document, transforms it in memory, and saves the
//! full document back. That keeps the store trivial (two primitives) at the
//! cost of making mutation interleaving dangerous — which is why the API
//! layer insists on exclusive access for mutations.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The one concession is the `log` crate: the API layer logs the diagnostic
//! when it downgrades a storage failure to a safe fallback.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Task`, `TaskUpdate`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
