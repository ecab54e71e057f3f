//! Command Module
//!
//! This module implements the command processing layer: argument validation,
//! routing by function name, and execution against the state store.
//!
//! ## Architecture
//!
//! ```text
//! Host Invocation
//!       │
//!       ▼
//! ┌─────────────────┐
//! │  Invocation     │  (protocol module)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (this module)
//! │                 │
//! │  - Dispatch     │
//! │  - Validate     │
//! │  - Execute      │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  StateStore     │  (storage module)
//! └─────────────────┘
//! ```
//!
//! ## Supported Commands
//!
//! - `init key value` (initialize entry point only)
//! - `set key value`
//! - `get key`

pub mod error;
pub mod handler;

pub use error::{CommandError, ErrorKind};
pub use handler::{names, CommandHandler};
