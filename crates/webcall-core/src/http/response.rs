//! Response records
//!
//! [`HttpResponse`] is the immutable record of a completed exchange. It is
//! constructed exactly once, by [`HttpResponseFactory`], from a configuration
//! accumulated in [`HttpResponseBuilder`]. The builder fails closed: a
//! required field that was never set is a named error, not a lookup failure.

use std::fmt;

use chrono::{DateTime, Local};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::http::method::Method;

/// Timestamp rendering used on the serialization surface: seconds precision,
/// no timezone, no fraction. Consumers diff serialized records against this
/// exact pattern.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable record of a completed HTTP exchange.
///
/// `duration` is derived from `end - start` once at construction; ordering of
/// the two timestamps is not enforced here, so a reversed pair yields a
/// negative duration rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    body: Map<String, Value>,
    duration: f64,
    end: DateTime<Local>,
    headers: Map<String, Value>,
    message: String,
    method: Method,
    start: DateTime<Local>,
    status: u16,
    content_type: String,
    url: String,
}

impl HttpResponse {
    /// The decoded body; an empty map when the exchange carried none.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Elapsed seconds between `start` and `end`.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end
    }

    /// The request headers as recorded when the call was issued.
    pub fn headers(&self) -> &Map<String, Value> {
        &self.headers
    }

    /// Reason phrase reported for the status.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Declared media type of the body, serialized under the key `type`.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Looks up a key in the body; an absent key is `None`, not an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// The record as a JSON view with fixed field names, timestamps rendered
    /// as `YYYY-MM-DD HH:MM:SS`, and the method as its wire token.
    pub fn dict(&self) -> Value {
        json!({
            "body": self.body,
            "duration": self.duration,
            "end": self.end.format(TIMESTAMP_FORMAT).to_string(),
            "headers": self.headers,
            "message": self.message,
            "method": self.method.as_str(),
            "start": self.start.format(TIMESTAMP_FORMAT).to_string(),
            "status": self.status,
            "type": self.content_type,
            "url": self.url,
        })
    }

    /// Whether the exchange produced no content (status 204).
    pub fn empty(&self) -> bool {
        self.status == 204
    }

    /// Whether the status falls in the 2xx range.
    pub fn success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dict())
    }
}

/// The single construction point for [`HttpResponse`].
///
/// Computes the derived duration once and freezes the record; nothing else
/// in the crate constructs a response.
#[derive(Debug)]
pub struct HttpResponseFactory;

impl HttpResponseFactory {
    #[allow(clippy::too_many_arguments)]
    pub fn create_response(
        end: DateTime<Local>,
        headers: Map<String, Value>,
        message: String,
        method: Method,
        start: DateTime<Local>,
        status: u16,
        content_type: String,
        url: String,
        body: Option<Map<String, Value>>,
    ) -> HttpResponse {
        let elapsed = end - start;
        let duration = elapsed.num_microseconds().map_or_else(
            || elapsed.num_milliseconds() as f64 / 1_000.0,
            |micros| micros as f64 / 1_000_000.0,
        );

        HttpResponse {
            body: body.unwrap_or_default(),
            duration,
            end,
            headers,
            message,
            method,
            start,
            status,
            content_type,
            url,
        }
    }
}

/// Staged accumulator for a response record.
///
/// Setters may run in any order and overwrite on repetition. [`Self::build`]
/// validates completeness and delegates construction to the factory; the
/// configuration is re-read rather than consumed, so repeated builds see the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct HttpResponseBuilder {
    body: Option<Map<String, Value>>,
    end: Option<DateTime<Local>>,
    headers: Option<Map<String, Value>>,
    message: Option<String>,
    method: Option<Method>,
    start: Option<DateTime<Local>>,
    status: Option<u16>,
    content_type: Option<String>,
    url: Option<String>,
}

impl HttpResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the record, failing with [`Error::MissingField`] naming the
    /// first required field that was never set. `body` is the only optional
    /// field and defaults to an empty map.
    pub fn build(&self) -> Result<HttpResponse> {
        let end = self.end.ok_or(Error::MissingField { field: "end" })?;
        let headers = self
            .headers
            .clone()
            .ok_or(Error::MissingField { field: "headers" })?;
        let message = self
            .message
            .clone()
            .ok_or(Error::MissingField { field: "message" })?;
        let method = self.method.ok_or(Error::MissingField { field: "method" })?;
        let start = self.start.ok_or(Error::MissingField { field: "start" })?;
        let status = self.status.ok_or(Error::MissingField { field: "status" })?;
        let content_type = self
            .content_type
            .clone()
            .ok_or(Error::MissingField { field: "type" })?;
        let url = self.url.clone().ok_or(Error::MissingField { field: "url" })?;

        Ok(HttpResponseFactory::create_response(
            end,
            headers,
            message,
            method,
            start,
            status,
            content_type,
            url,
            self.body.clone(),
        ))
    }

    /// Stores the body; an object is kept as-is, any other value is wrapped
    /// under a `"body"` key.
    pub fn with_body(mut self, value: Value) -> Self {
        self.body = Some(match value {
            Value::Object(map) => map,
            other => Map::from_iter([("body".to_string(), other)]),
        });
        self
    }

    pub fn with_end(mut self, value: DateTime<Local>) -> Self {
        self.end = Some(value);
        self
    }

    pub fn with_headers(mut self, value: Map<String, Value>) -> Self {
        self.headers = Some(value);
        self
    }

    pub fn with_message(mut self, value: impl Into<String>) -> Self {
        self.message = Some(value.into());
        self
    }

    pub fn with_method(mut self, value: Method) -> Self {
        self.method = Some(value);
        self
    }

    pub fn with_start(mut self, value: DateTime<Local>) -> Self {
        self.start = Some(value);
        self
    }

    pub fn with_status(mut self, value: u16) -> Self {
        self.status = Some(value);
        self
    }

    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    pub fn with_url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }
}
