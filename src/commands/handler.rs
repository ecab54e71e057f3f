//! Command Handler
//!
//! Validates each invocation's arguments and routes it to a single store
//! read or write.
//!
//! ## Commands
//!
//! - `set key value` - Store `value` under `key`, replacing any previous value.
//!   Returns the value written.
//! - `get key` - Return the value stored under `key`.
//!
//! Initialization (`init key value`) is a separate entry point and cannot be
//! reached through `invoke`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandHandler                          │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │  │  invoke()   │───>│  dispatch() │───>│ set / get   │     │
//! │  └─────────────┘    └─────────────┘    └─────────────┘     │
//! │                                               │             │
//! │                                               ▼             │
//! │                                         StateStore          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation touches the store at most once. Invocations rejected
//! during argument validation never touch it.

use crate::commands::error::CommandError;
use crate::protocol::{Invocation, Response};
use crate::storage::StateStore;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Command names accepted by [`CommandHandler::dispatch`].
pub mod names {
    pub const SET: &str = "set";
    pub const GET: &str = "get";
}

/// Validates invocations and executes them against a [`StateStore`].
pub struct CommandHandler<S> {
    store: Arc<S>,
}

impl<S> Clone for CommandHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> std::fmt::Debug for CommandHandler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHandler").finish_non_exhaustive()
    }
}

impl<S: StateStore> CommandHandler<S> {
    /// Creates a new command handler over the given store.
    pub fn new(store: Arc<S>) -> Self {
        debug!("command handler created");
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// Initialize entry point: stores the initial key/value pair.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_asset::{CommandHandler, MemoryStore, Invocation};
    /// use std::sync::Arc;
    ///
    /// let handler = CommandHandler::new(Arc::new(MemoryStore::new()));
    ///
    /// let resp = handler.init(&["color".to_string(), "blue".to_string()]);
    /// assert!(resp.is_success());
    /// assert!(resp.payload.is_empty());
    ///
    /// let resp = handler.invoke(&Invocation::new("get", ["color"]));
    /// assert_eq!(&resp.payload[..], b"blue");
    /// ```
    pub fn init(&self, args: &[String]) -> Response {
        match self.initialize(args) {
            Ok(()) => Response::success(Bytes::new()),
            Err(e) => {
                debug!(kind = %e.kind(), "init failed");
                Response::error(e.to_string())
            }
        }
    }

    /// Invoke entry point: dispatches one command and wraps its outcome.
    pub fn invoke(&self, invocation: &Invocation) -> Response {
        match self.dispatch(invocation.function(), invocation.args()) {
            Ok(value) => Response::success(value),
            Err(e) => {
                debug!(function = invocation.function(), kind = %e.kind(), "invoke failed");
                Response::error(e.to_string())
            }
        }
    }

    /// Routes a command by name.
    ///
    /// Names are case-sensitive. The chosen command's result is returned
    /// unchanged.
    pub fn dispatch(&self, name: &str, args: &[String]) -> Result<Bytes, CommandError> {
        debug!(function = name, argc = args.len(), "dispatch");

        match name {
            names::SET => self.set(args),
            names::GET => self.get(args),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// init key value
    pub fn initialize(&self, args: &[String]) -> Result<(), CommandError> {
        let [key, value] = args else {
            return Err(CommandError::argument(
                2,
                args.len(),
                "Incorrect arguments. Expecting a key and value",
            ));
        };

        self.store
            .put(key, Bytes::copy_from_slice(value.as_bytes()))
            .map_err(|e| CommandError::store(format!("Failed to create asset: {}", key), e))
    }

    /// set key value
    ///
    /// Overwrites any existing value and returns the value written.
    pub fn set(&self, args: &[String]) -> Result<Bytes, CommandError> {
        let [key, value] = args else {
            return Err(CommandError::argument(
                2,
                args.len(),
                "Incorrect arguments. Expecting a key and a value",
            ));
        };

        let value = Bytes::copy_from_slice(value.as_bytes());
        self.store
            .put(key, value.clone())
            .map_err(|e| CommandError::store(format!("Failed to set asset: {}", key), e))?;

        Ok(value)
    }

    /// get key
    pub fn get(&self, args: &[String]) -> Result<Bytes, CommandError> {
        let [key] = args else {
            return Err(CommandError::argument(
                1,
                args.len(),
                "Incorrect arguments. Expecting a key",
            ));
        };

        match self.store.get(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(CommandError::NotFound(key.clone())),
            Err(e) => Err(CommandError::store(
                format!("Failed to get asset: {} with error: {}", key, e),
                e,
            )),
        }
    }
}
