//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic reading-list library**. It keeps an ordered
//! list of books, lets you mark them read or unread, remove them and search
//! them by title, and persists the whole list under a single key of a local
//! key-value store. The `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: records, persistence, id generator     │
//! │  - command -> persist -> render                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure transitions over the RecordStore                    │
//! │  - Report whether the shelf changed                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (persistence.rs + store/)                          │
//! │  - One JSON blob under one key                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering ([`render`]) sits beside the command layer: it turns books into a
//! two-list [`render::ShelfView`] and never changes data.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns regular Rust types and never prints or
//! exits. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`records`]: The in-memory Record Store
//! - [`persistence`]: Serializes the shelf to and from a key-value store
//! - [`store`]: Key-value store abstraction and implementations
//! - [`render`]: Builds the read / to-read view
//! - [`events`]: Notifications emitted on save and load
//! - [`id`]: Book id generation
//! - [`model`]: Core data types (`Book`, `BookId`, `Year`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod id;
pub mod init;
pub mod model;
pub mod persistence;
pub mod records;
pub mod render;
pub mod store;
