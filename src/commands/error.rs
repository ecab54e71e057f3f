//! Command Errors
//!
//! Every failed invocation produces exactly one [`CommandError`]. Its
//! `Display` text is what the host sees in the error response.

use crate::storage::StoreError;
use std::fmt;
use thiserror::Error;

/// Errors returned by command operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments
    #[error("{message}")]
    Argument {
        /// Arguments the command takes
        expected: usize,
        /// Arguments the caller supplied
        given: usize,
        /// Text shown to the caller
        message: &'static str,
    },

    /// The key has no value
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The store rejected a read or write
    #[error("{message}")]
    Store {
        /// Text shown to the caller
        message: String,
        /// The store's own error
        #[source]
        source: StoreError,
    },

    /// No command answers to this name
    #[error("Unknown method: {0}")]
    UnknownCommand(String),
}

/// Fieldless classification of a [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Argument,
    NotFound,
    Store,
    UnknownCommand,
}

impl CommandError {
    /// Creates an arity error.
    pub fn argument(expected: usize, given: usize, message: &'static str) -> Self {
        CommandError::Argument {
            expected,
            given,
            message,
        }
    }

    /// Creates a store error with caller-facing text.
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        CommandError::Store {
            message: message.into(),
            source,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Argument { .. } => ErrorKind::Argument,
            CommandError::NotFound(_) => ErrorKind::NotFound,
            CommandError::Store { .. } => ErrorKind::Store,
            CommandError::UnknownCommand(_) => ErrorKind::UnknownCommand,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Argument => "argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Store => "store",
            ErrorKind::UnknownCommand => "unknown_command",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = CommandError::argument(1, 2, "Incorrect arguments. Expecting a key");
        assert_eq!(err.to_string(), "Incorrect arguments. Expecting a key");

        let err = CommandError::NotFound("size".into());
        assert_eq!(err.to_string(), "Asset not found: size");

        let err = CommandError::UnknownCommand("delete".into());
        assert_eq!(err.to_string(), "Unknown method: delete");

        let err = CommandError::store("Failed to set asset: color", StoreError::Poisoned);
        assert_eq!(err.to_string(), "Failed to set asset: color");
    }

    #[test]
    fn test_store_source() {
        let err = CommandError::store("Failed to set asset: color", StoreError::EmptyKey);
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "key must not be an empty string");

        assert!(CommandError::NotFound("x".into()).source().is_none());
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            CommandError::argument(2, 0, "Incorrect arguments. Expecting a key and a value").kind(),
            ErrorKind::Argument
        );
        assert_eq!(CommandError::NotFound("k".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            CommandError::store("Failed", StoreError::Poisoned).kind(),
            ErrorKind::Store
        );
        assert_eq!(
            CommandError::UnknownCommand("delete".into()).kind(),
            ErrorKind::UnknownCommand
        );
        assert_eq!(ErrorKind::UnknownCommand.to_string(), "unknown_command");
    }
}
