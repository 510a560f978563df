//! # Stockroom Architecture
//!
//! Stockroom is a **file-backed inventory library**: categories,
//! products, suppliers and orders kept in one JSON document that other
//! tools can read and edit. The CLI is just one client; everything
//! below `main.rs` is plain library code.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs, binary only)                      │
//! │  - Parses arguments, prints rows, owns exit codes          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                           │
//! │  - One Warehouse holding a repository per record kind      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Repositories (repo/)                                      │
//! │  - Generic CRUD plus the per-kind query surface            │
//! │  - Every call is one load or one load-mutate-save cycle    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                          │
//! │  - DocumentStore trait over the whole document             │
//! │  - FileStore (production), MemoryStore (testing)           │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Document Is the Database
//!
//! There is no cache and no open handle. Each operation loads the
//! current file, works on it, and (for mutations) atomically replaces
//! it. That keeps the file free for other programs between calls and
//! makes the stored bytes the only state to reason about. The flip
//! side is that every operation pays a full parse, which is the right
//! trade for the small documents this is meant for.
//!
//! ## Absence Is Not an Error
//!
//! Lookups return `Option`, updates and deletes return `bool`.
//! [`error::StoreError`] is reserved for real faults: unreadable or
//! corrupt files, failed writes, unknown sort fields.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::Warehouse`] facade, entry point for embedding
//! - [`repo`]: Generic CRUD repository and the per-kind queries
//! - [`store`]: Storage trait plus the file and memory stores
//! - [`document`]: The document itself, record plumbing, audit
//! - [`model`]: The four record types
//! - [`error`]: Error types

pub mod api;
pub mod document;
pub mod error;
pub mod model;
pub mod repo;
pub mod store;
