//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context. The taxonomy mirrors the failure modes
//! of the tool-server wire contract: transport failures, server-side
//! rejections, and contract-shape violations are kept distinct so callers can
//! route them without string matching.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the toolbridge client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (connection refused, DNS, timeout).
    /// Never retried by the client itself.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server rejected the tool call with a non-2xx status.
    /// Carries the status code and the server-provided `detail` message.
    #[error("tool invocation failed (status {status}): {message}")]
    Invocation { status: u16, message: String },

    /// Response shape violates the wire contract (missing `output` or
    /// `tools` field, non-JSON success body). A defect in client or server.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Local precondition failure, detected before any network I/O.
    #[error("validation error: {0}")]
    Validation(String),

    /// Tool not present in a client-side catalog lookup.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn invocation(status: u16, message: impl Into<String>) -> Self {
        Self::Invocation {
            status,
            message: message.into(),
        }
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl Error {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Invocation { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for unknown-tool failures, whether detected locally or by the
    /// server (status 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_)) || self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_includes_status() {
        let err = Error::invocation(404, "Tool 'bogus' not found");
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_status_extraction() {
        assert_eq!(Error::invocation(500, "boom").status(), Some(500));
        assert_eq!(Error::protocol("missing output").status(), None);
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::invocation(404, "no such tool").is_not_found());
        assert!(Error::not_found("hello").is_not_found());
        assert!(!Error::invocation(500, "boom").is_not_found());
        assert!(!Error::validation("empty name").is_not_found());
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("must fail");
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
