//! Transport capability
//!
//! The minimal interface the service needs from an HTTP transport: issue one
//! request and hand back a reply exposing status, reason phrase, and declared
//! content type before any body read, plus one-shot body reads in the three
//! decoded forms. The reqwest implementation opens a fresh client per call so
//! the underlying session is scoped to a single exchange and released on
//! every exit path.

use async_trait::async_trait;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};
use crate::http::header::Headers;
use crate::http::method::Method;

/// Media type assumed when a reply declares none.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A single outgoing request as handed to the transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub data: Option<Map<String, Value>>,
}

/// Issues one request and returns a reply handle.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<Box<dyn TransportReply>>;
}

/// A received reply.
///
/// Status line and content type are readable without touching the body; the
/// body reads consume the reply, so each exchange is read at most once and in
/// exactly one form.
#[async_trait]
pub trait TransportReply: Send {
    /// Numeric status code.
    fn status(&self) -> u16;

    /// Reason phrase for the status.
    fn reason(&self) -> &str;

    /// Declared media type with parameters stripped;
    /// [`DEFAULT_CONTENT_TYPE`] when the reply declares none.
    fn content_type(&self) -> &str;

    /// Reads the body as a JSON structure.
    async fn json(self: Box<Self>) -> Result<Value>;

    /// Reads the body as text.
    async fn text(self: Box<Self>) -> Result<String>;

    /// Reads the body as raw bytes.
    async fn bytes(self: Box<Self>) -> Result<Vec<u8>>;
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
            Method::Trace => Self::TRACE,
        }
    }
}

/// Transport backed by reqwest.
///
/// Each call builds its own client, scoping the session to the exchange; the
/// client and any connection it holds are released when the reply is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<Box<dyn TransportReply>> {
        let url = Url::parse(&request.url).map_err(|e| Error::Transport {
            message: format!("invalid URL: {}", request.url),
            source: Some(e.into()),
        })?;

        let client = reqwest::Client::new();
        let mut builder = client.request(request.method.into(), url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|e| Error::Transport {
            message: format!("request to {} failed: {}", request.url, e),
            source: Some(e.into()),
        })?;

        Ok(Box::new(ReqwestReply::new(response)))
    }
}

struct ReqwestReply {
    reason: String,
    content_type: String,
    response: reqwest::Response,
}

impl ReqwestReply {
    fn new(response: reqwest::Response) -> Self {
        let reason = response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Self {
            reason,
            content_type,
            response,
        }
    }
}

#[async_trait]
impl TransportReply for ReqwestReply {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn reason(&self) -> &str {
        &self.reason
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn json(self: Box<Self>) -> Result<Value> {
        self.response.json().await.map_err(|e| Error::Transport {
            message: format!("failed to read body as JSON: {}", e),
            source: Some(e.into()),
        })
    }

    async fn text(self: Box<Self>) -> Result<String> {
        self.response.text().await.map_err(|e| Error::Transport {
            message: format!("failed to read body as text: {}", e),
            source: Some(e.into()),
        })
    }

    async fn bytes(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(self
            .response
            .bytes()
            .await
            .map_err(|e| Error::Transport {
                message: format!("failed to read body as bytes: {}", e),
                source: Some(e.into()),
            })?
            .to_vec())
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::stub::{StubReply, StubTransport};
    use super::*;

    fn request() -> TransportRequest {
        TransportRequest {
            method: Method::Get,
            url: "https://example.com".to_string(),
            headers: Headers::new(),
            data: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_transport_error() {
        let transport = ReqwestTransport;
        let result = transport
            .send(TransportRequest {
                url: "not a url".to_string(),
                ..request()
            })
            .await;

        assert!(matches!(result, Err(Error::Transport { .. })));
    }

    #[tokio::test]
    async fn test_stub_replays_replies_in_order() {
        let transport = StubTransport::new(vec![
            Ok(StubReply::new(200, "OK", "application/json", b"{}")),
            Ok(StubReply::new(204, "No Content", "application/octet-stream", b"")),
        ]);

        let first = transport.send(request()).await.unwrap();
        assert_eq!(first.status(), 200);

        let second = transport.send(request()).await.unwrap();
        assert_eq!(second.status(), 204);
        assert_eq!(second.reason(), "No Content");
    }

    #[tokio::test]
    async fn test_stub_body_reads() {
        let reply = Box::new(StubReply::new(
            200,
            "OK",
            "application/json",
            br#"{"id": 1}"#,
        ));
        assert_eq!(reply.json().await.unwrap(), serde_json::json!({"id": 1}));

        let reply = Box::new(StubReply::new(200, "OK", "text/plain", b"hello"));
        assert_eq!(reply.text().await.unwrap(), "hello");

        let reply = Box::new(StubReply::new(200, "OK", "image/png", &[1, 2, 3]));
        assert_eq!(reply.bytes().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stub_undecodable_json_is_a_transport_error() {
        let reply = Box::new(StubReply::new(200, "OK", "application/json", b"not json"));
        assert!(matches!(reply.json().await, Err(Error::Transport { .. })));
    }
}
