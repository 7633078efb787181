//! Webcall Core - a blocking convenience layer over HTTP
//!
//! This crate wraps a generic HTTP transport in one-shot, blocking verb calls
//! and reshapes each completed exchange into an immutable record.
//!
//! # Main Components
//!
//! - **Error Handling**: a single error enum using `thiserror`, with `anyhow` sources
//! - **Authorization**: renders `Authorization` header values for the common schemes
//! - **Builders**: fluent accumulators for headers, URLs, and response records
//! - **HttpService**: one entry point per HTTP verb, each performing exactly one exchange
//!
//! # Example
//!
//! ```no_run
//! use webcall_core::{HttpService, Result};
//!
//! fn example() -> Result<()> {
//!     let service = HttpService::default();
//!     let response = service.get("https://jsonplaceholder.typicode.com/posts/1", Default::default())?;
//!     println!("{}", response.dict());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use http::{
    Authorization, HeaderBuilder, Headers, HttpResponse, HttpResponseBuilder,
    HttpResponseFactory, HttpService, Method, ReqwestTransport, Transport, TransportReply,
    TransportRequest, UrlBuilder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MissingField { field: "status" };
        assert!(err.to_string().contains("status"));
    }
}
