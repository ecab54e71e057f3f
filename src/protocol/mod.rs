//! Invocation Protocol Module
//!
//! The types a host uses to talk to the component: the [`Invocation`] it
//! sends, the [`Response`] it gets back, and decoding of raw argument bytes.
//!
//! ## Example
//!
//! ```
//! use simple_asset::protocol::{Invocation, Response};
//! use bytes::Bytes;
//!
//! let inv = Invocation::from_raw(vec![Bytes::from("get"), Bytes::from("color")]).unwrap();
//! assert_eq!(inv.function(), "get");
//! assert_eq!(inv.args(), ["color"]);
//!
//! let resp = Response::success("blue");
//! assert_eq!(resp.payload, Bytes::from("blue"));
//! ```

pub mod parser;
pub mod types;

pub use parser::{decode_args, ParseError, ParseResult};
pub use types::{status, Invocation, Response};
