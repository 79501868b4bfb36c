//! # Doculite - In-Memory Document Store Simulator
//!
//! Doculite is a lightweight, embedded, in-memory simulation of a
//! multi-database document store, paired with an ad-hoc query console. It
//! backs admin tooling that needs a believable document-database data model
//! (databases → collections → documents) without a server, a disk, or a
//! network.
//!
//! ## Key Features
//!
//! - **Embedded**: no separate process, no I/O; all state lives in memory
//!   for the lifetime of the session
//! - **Structural mutation**: create/drop databases and collections, with
//!   cascading drops
//! - **Document CRUD**: insert with automatic id assignment, positional
//!   updates, and per-document deletes
//! - **Immutable revisions**: every mutation produces new persistent
//!   containers along the path from root to changed leaf, plus a revision
//!   counter for cheap change detection
//! - **Query console**: a tiny `find()` / `find({...})` / `count()`
//!   interpreter with a timestamped, append-only transcript
//! - **Total operations**: store operations never fail; unknown names
//!   degrade to no-ops or zero-valued results
//!
//! ## Quick Start
//!
//! ```rust
//! use doculite::console::{QueryConsole, QueryOutcome};
//! use doculite::store::DocumentStore;
//! use doculite::doc;
//!
//! // A new store carries the built-in seed catalog.
//! let store = DocumentStore::new();
//!
//! // Structural mutation and document CRUD through the handle.
//! store.add_database("appdb");
//! store.add_collection("appdb", "events");
//! store.add_document("appdb", "events", doc! { kind: "login", user: "alice" });
//!
//! // Ad-hoc queries against one collection.
//! let mut console = QueryConsole::new(store.clone(), "appdb", "events");
//! let outcome = console.execute(r#"find({"kind": "login"})"#);
//! assert_eq!(outcome, QueryOutcome::Found(1));
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Documents, collections, and id generation
//! - [`common`] - Common types, constants, and utilities
//! - [`console`] - The query console, command grammar, and transcript
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Equality filters for the console's query language
//! - [`store`] - The document store, databases, and statistics

use once_cell::sync::Lazy;

use crate::collection::TokenIdGenerator;

pub mod collection;
pub mod common;
pub mod console;
pub mod errors;
pub mod filter;
pub mod store;

pub(crate) static ID_GENERATOR: Lazy<TokenIdGenerator> = Lazy::new(TokenIdGenerator::new);
