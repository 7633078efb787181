//! Error types for the webcall core library
//!
//! A single crate-level error enum using thiserror, with anyhow carrying
//! underlying causes where one exists. All errors surface to the immediate
//! caller of a verb function; nothing is retried or silently defaulted.

use thiserror::Error;

/// Main error type for webcall operations
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying transport failure (connection, DNS, TLS, body decode)
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The transport reported a non-2xx status; raised before any body read,
    /// so no response record exists for this exchange
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// A required response field was never supplied to the builder
    #[error("missing response field: {field}")]
    MissingField { field: &'static str },

    /// An authorization scheme name outside the supported set
    #[error("invalid authorization scheme: {scheme}")]
    InvalidScheme { scheme: String },

    /// The blocking wrapper could not construct its runtime
    #[error("runtime error: {message}")]
    Runtime {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP status 404: Not Found");
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = Error::MissingField { field: "type" };
        assert_eq!(err.to_string(), "missing response field: type");
    }

    #[test]
    fn test_invalid_scheme_names_the_scheme() {
        let err = Error::InvalidScheme {
            scheme: "token".to_string(),
        };
        assert_eq!(err.to_string(), "invalid authorization scheme: token");
    }

    #[test]
    fn test_transport_source_is_preserved() {
        let err = Error::Transport {
            message: "connection refused".to_string(),
            source: Some(anyhow::anyhow!("tcp connect failed")),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
