//! Verb-named entry points
//!
//! One method per HTTP verb. Each call is a self-contained unit of work:
//! record method, URL, request headers, and start time; run the exchange to
//! completion on its own runtime; dispatch on the declared content type; and
//! assemble the response record. A non-2xx status aborts the call before any
//! body read, so no partial record is ever observable.

use chrono::Local;
use log::debug;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::http::header::Headers;
use crate::http::method::Method;
use crate::http::response::{HttpResponse, HttpResponseBuilder};
use crate::http::transport::{ReqwestTransport, Transport, TransportReply, TransportRequest};

/// Issues blocking, one-shot HTTP requests over a transport.
///
/// Every verb call owns its transport session exclusively for its lifetime;
/// no state is shared between calls and nothing survives a call except the
/// returned record. Timeouts, redirects, and retries are whatever the
/// transport's defaults impose; the service defines none of its own.
pub struct HttpService {
    transport: Box<dyn Transport>,
}

impl Default for HttpService {
    fn default() -> Self {
        Self::new(ReqwestTransport)
    }
}

impl HttpService {
    /// Creates a service over the given transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Makes a GET request to the URL.
    pub fn get(&self, url: &str, headers: Headers) -> Result<HttpResponse> {
        self.execute(Method::Get, url, headers, None)
    }

    /// Makes a POST request carrying `data` as a JSON body.
    pub fn post(
        &self,
        url: &str,
        data: Map<String, Value>,
        headers: Headers,
    ) -> Result<HttpResponse> {
        self.execute(Method::Post, url, headers, Some(data))
    }

    /// Makes a PUT request carrying `data` as a JSON body.
    pub fn put(
        &self,
        url: &str,
        data: Map<String, Value>,
        headers: Headers,
    ) -> Result<HttpResponse> {
        self.execute(Method::Put, url, headers, Some(data))
    }

    /// Makes a DELETE request carrying `data` as a JSON body.
    pub fn delete(
        &self,
        url: &str,
        data: Map<String, Value>,
        headers: Headers,
    ) -> Result<HttpResponse> {
        self.execute(Method::Delete, url, headers, Some(data))
    }

    /// Makes a PATCH request carrying `data` as a JSON body.
    pub fn patch(
        &self,
        url: &str,
        data: Map<String, Value>,
        headers: Headers,
    ) -> Result<HttpResponse> {
        self.execute(Method::Patch, url, headers, Some(data))
    }

    /// Makes an OPTIONS request; headers only, no body.
    pub fn options(&self, url: &str, headers: Headers) -> Result<HttpResponse> {
        self.execute(Method::Options, url, headers, None)
    }

    /// Makes a TRACE request.
    pub fn trace(&self, url: &str, headers: Headers) -> Result<HttpResponse> {
        self.execute(Method::Trace, url, headers, None)
    }

    /// Runs one exchange to completion on a runtime owned by this call.
    fn execute(
        &self,
        method: Method,
        url: &str,
        headers: Headers,
        data: Option<Map<String, Value>>,
    ) -> Result<HttpResponse> {
        let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Runtime {
            message: "failed to create runtime for blocking call".to_string(),
            source: e,
        })?;

        runtime.block_on(self.execute_async(method, url, headers, data))
    }

    async fn execute_async(
        &self,
        method: Method,
        url: &str,
        headers: Headers,
        data: Option<Map<String, Value>>,
    ) -> Result<HttpResponse> {
        let builder = HttpResponseBuilder::new()
            .with_method(method)
            .with_url(url)
            .with_headers(record_headers(&headers))
            .with_start(Local::now());

        debug!("{} {}", method, url);

        let reply = self
            .transport
            .send(TransportRequest {
                method,
                url: url.to_string(),
                headers,
                data,
            })
            .await?;

        let status = reply.status();

        if !(200..300).contains(&status) {
            return Err(Error::Status {
                status,
                message: reply.reason().to_string(),
            });
        }

        let message = reply.reason().to_string();
        let content_type = reply.content_type().to_string();
        let body = decode_body(reply).await?;

        let response = builder
            .with_status(status)
            .with_message(message)
            .with_content_type(content_type)
            .with_body(body)
            .with_end(Local::now())
            .build()?;

        debug!(
            "{} {} -> {} in {}s",
            method,
            url,
            response.status(),
            response.duration()
        );

        Ok(response)
    }
}

/// Picks the body decoding from the declared media type: JSON structure for
/// `application/json`, raw bytes for `application/octet-stream` and images,
/// text for everything else.
async fn decode_body(reply: Box<dyn TransportReply>) -> Result<Value> {
    let content_type = reply.content_type().to_string();

    match content_type.as_str() {
        "application/json" => reply.json().await,
        "application/xml" => reply.text().await.map(Value::String),
        other if other == "application/octet-stream" || other.starts_with("image/") => {
            let bytes = reply.bytes().await?;
            Ok(Value::Array(bytes.into_iter().map(Value::from).collect()))
        }
        _ => reply.text().await.map(Value::String),
    }
}

fn record_headers(headers: &Headers) -> Map<String, Value> {
    headers
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}
