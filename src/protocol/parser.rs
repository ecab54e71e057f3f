//! Raw Argument Decoding
//!
//! Hosts deliver invocation arguments as raw byte strings. Commands work on
//! text, so every argument must be valid UTF-8 before it reaches a handler.
//! Decoding reuses the argument's buffer when it can (`Bytes` into `Vec<u8>`
//! is free for a uniquely owned buffer).

use crate::protocol::types::Invocation;
use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while decoding raw arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An argument is not valid UTF-8
    #[error("invalid UTF-8 in argument {index}: {reason}")]
    InvalidUtf8 {
        /// Position of the offending argument in the raw list
        index: usize,
        /// Decoder error text
        reason: String,
    },
}

/// Result type for decoding operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Decodes raw argument bytes into strings.
///
/// # Example
/// ```
/// use simple_asset::protocol::decode_args;
/// use bytes::Bytes;
///
/// let args = decode_args(vec![Bytes::from("color"), Bytes::from("blue")]).unwrap();
/// assert_eq!(args, ["color", "blue"]);
/// ```
pub fn decode_args(raw: Vec<Bytes>) -> ParseResult<Vec<String>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            String::from_utf8(Vec::from(arg)).map_err(|e| ParseError::InvalidUtf8 {
                index,
                reason: e.utf8_error().to_string(),
            })
        })
        .collect()
}

impl Invocation {
    /// Decodes a raw argument list and splits it into function and parameters.
    pub fn from_raw(raw: Vec<Bytes>) -> ParseResult<Self> {
        decode_args(raw).map(Invocation::from_args)
    }
}
