//! Blocking HTTP convenience layer
//!
//! This module provides:
//! - Authorization header rendering for the common schemes
//! - Fluent builders for headers, URLs, and response records
//! - A minimal transport capability backed by reqwest
//! - Verb-named entry points that issue one exchange and package the result

pub mod auth;
pub mod header;
pub mod method;
pub mod response;
pub mod service;
pub mod transport;
pub mod url;

pub use self::auth::Authorization;
pub use self::header::{HeaderBuilder, Headers};
pub use self::method::Method;
pub use self::response::{HttpResponse, HttpResponseBuilder, HttpResponseFactory};
pub use self::service::HttpService;
pub use self::transport::{ReqwestTransport, Transport, TransportReply, TransportRequest};
pub use self::url::UrlBuilder;
