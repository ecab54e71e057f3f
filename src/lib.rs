//! # Simple Asset - A Ledger-Backed Key/Value Accessor
//!
//! Simple Asset keeps named assets in a host-provided state store. A host
//! initializes one key/value pair, then invokes `set` and `get` against it.
//! Each invocation is validated, routed by name, and turned into at most one
//! store read or write.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           Simple Asset                              │
//! │                                                                     │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐              │
//! │  │ Host        │───>│ Invocation  │───>│  Command    │              │
//! │  │ (external)  │    │ (protocol)  │    │  Handler    │              │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘              │
//! │         ▲                                     │                     │
//! │         │ Response                            ▼                     │
//! │         │                            ┌──────────────────────┐       │
//! │         └────────────────────────────│ StateStore (trait)   │       │
//! │                                      │  host ledger state   │       │
//! │                                      │  MemoryStore         │       │
//! │                                      └──────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use simple_asset::{CommandHandler, Invocation, MemoryStore};
//! use bytes::Bytes;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let handler = CommandHandler::new(Arc::clone(&store));
//!
//! // Initialize the asset
//! let resp = handler.init(&["asset1".to_string(), "100".to_string()]);
//! assert!(resp.is_success());
//!
//! // Overwrite it
//! let resp = handler.invoke(&Invocation::new("set", ["asset1", "200"]));
//! assert_eq!(resp.payload, Bytes::from("200"));
//!
//! // Read it back
//! let resp = handler.invoke(&Invocation::new("get", ["asset1"]));
//! assert_eq!(resp.payload, Bytes::from("200"));
//!
//! // Unknown functions are rejected
//! let resp = handler.invoke(&Invocation::new("delete", ["asset1"]));
//! assert_eq!(resp.message, "Unknown method: delete");
//! ```
//!
//! ## Module Overview
//!
//! - [`protocol`]: invocation and response types, raw argument decoding
//! - [`commands`]: the command handler and its errors
//! - [`storage`]: the state store capability and an in-memory implementation
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per invocation, `trace` per
//! store operation) and never installs a subscriber; that is the host's call.

pub mod commands;
pub mod protocol;
pub mod storage;

// Re-export commonly used types for convenience
pub use commands::{CommandError, CommandHandler, ErrorKind};
pub use protocol::{Invocation, ParseError, Response};
pub use storage::{MemoryStore, StateStore, StoreConfig, StoreError};

/// Version of Simple Asset
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
