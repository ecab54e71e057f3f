//! Invocation Surface Types
//!
//! A host drives the component with two kinds of calls:
//!
//! - **init**: exactly two positional arguments, a key and its initial value
//! - **invoke**: a function name followed by that function's arguments
//!
//! Both return a [`Response`]: a status code, an error message (empty on
//! success) and a byte payload (empty on error).
//!
//! ## Examples
//!
//! Invocation: `["set", "color", "blue"]` → function `set`, args `["color", "blue"]`
//! Success:    `status 200, payload "blue"`
//! Error:      `status 500, message "Asset not found: size"`

use bytes::Bytes;
use std::fmt;

/// Response status codes used by the host.
pub mod status {
    /// Invocation succeeded
    pub const OK: i32 = 200;
    /// Invocation failed; the message explains why
    pub const ERROR: i32 = 500;
}

/// A single call into the component: a function name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    function: String,
    args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation from a function name and its arguments.
    ///
    /// # Example
    /// ```
    /// use simple_asset::protocol::Invocation;
    /// let inv = Invocation::new("get", ["color"]);
    /// assert_eq!(inv.function(), "get");
    /// ```
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a flat argument list into function name and parameters.
    ///
    /// The first element names the function. An empty list yields an empty
    /// function name, which no command answers to.
    ///
    /// # Example
    /// ```
    /// use simple_asset::protocol::Invocation;
    /// let inv = Invocation::from_args(vec!["set".into(), "color".into(), "blue".into()]);
    /// assert_eq!(inv.function(), "set");
    /// assert_eq!(inv.args(), ["color", "blue"]);
    /// ```
    pub fn from_args(mut args: Vec<String>) -> Self {
        if args.is_empty() {
            return Self::default();
        }
        let function = args.remove(0);
        Self { function, args }
    }

    /// Returns the function name.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns the function's arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\"", arg)?;
        }
        write!(f, ")")
    }
}

/// The outcome of an `init` or `invoke` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// One of the [`status`] codes
    pub status: i32,
    /// Error text; empty on success
    pub message: String,
    /// Result bytes; empty on error
    pub payload: Bytes,
}

impl Response {
    /// Creates a success response carrying `payload`.
    ///
    /// # Example
    /// ```
    /// use simple_asset::protocol::Response;
    /// let ok = Response::success("blue");
    /// assert!(ok.is_success());
    /// ```
    pub fn success(payload: impl Into<Bytes>) -> Self {
        Self {
            status: status::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Creates an error response.
    ///
    /// # Example
    /// ```
    /// use simple_asset::protocol::Response;
    /// let err = Response::error("Unknown method: delete");
    /// assert!(err.is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: status::ERROR,
            message: message.into(),
            payload: Bytes::new(),
        }
    }

    /// Returns true if this response reports success.
    pub fn is_success(&self) -> bool {
        self.status == status::OK
    }

    /// Returns true if this response reports an error.
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            match std::str::from_utf8(&self.payload) {
                Ok(s) => write!(f, "({}) \"{}\"", self.status, s),
                Err(_) => write!(f, "({}) {:?}", self.status, self.payload),
            }
        } else {
            write!(f, "({}) {}", self.status, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let inv = Invocation::from_args(vec!["get".into(), "color".into()]);
        assert_eq!(inv.function(), "get");
        assert_eq!(inv.args(), ["color"]);
    }

    #[test]
    fn test_from_args_function_only() {
        let inv = Invocation::from_args(vec!["get".into()]);
        assert_eq!(inv.function(), "get");
        assert!(inv.args().is_empty());
    }

    #[test]
    fn test_from_args_empty() {
        let inv = Invocation::from_args(vec![]);
        assert_eq!(inv.function(), "");
        assert!(inv.args().is_empty());
    }

    #[test]
    fn test_invocation_display() {
        let inv = Invocation::new("set", ["color", "blue"]);
        assert_eq!(inv.to_string(), "set(\"color\", \"blue\")");

        let inv = Invocation::new("get", Vec::<String>::new());
        assert_eq!(inv.to_string(), "get()");
    }

    #[test]
    fn test_success_response() {
        let resp = Response::success(Bytes::from("blue"));
        assert_eq!(resp.status, status::OK);
        assert!(resp.message.is_empty());
        assert_eq!(resp.payload, Bytes::from("blue"));
        assert!(resp.is_success());
        assert!(!resp.is_error());
    }

    #[test]
    fn test_error_response() {
        let resp = Response::error("Asset not found: size");
        assert_eq!(resp.status, status::ERROR);
        assert_eq!(resp.message, "Asset not found: size");
        assert!(resp.payload.is_empty());
        assert!(resp.is_error());
    }

    #[test]
    fn test_response_display() {
        assert_eq!(Response::success("blue").to_string(), "(200) \"blue\"");
        assert_eq!(
            Response::error("Unknown method: delete").to_string(),
            "(500) Unknown method: delete"
        );
    }
}
