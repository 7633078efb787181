//! Authorization header rendering
//!
//! Holds a credential pair and renders the header value for the common
//! schemes. Scheme dispatch is an explicit closed match; an unknown name is
//! a named error rather than a lookup failure.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::http::header::Headers;

/// Scheme names accepted by [`Authorization::header`].
pub const SCHEMES: [&str; 6] = ["basic", "bearer", "custom", "digest", "oauth", "oauth2"];

/// An immutable credential pair rendering `Authorization` header values.
///
/// Renderers are pure string computation; nothing is stored beyond the pair,
/// and the password never appears in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    username: String,
    password: String,
}

impl Authorization {
    /// Creates an authorization from a credential pair. Empty strings are
    /// accepted; no validation is applied.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `Basic <base64(username:password)>`, standard alphabet, padding kept.
    pub fn basic(&self) -> String {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", self.username, self.password))
        )
    }

    /// `Bearer <password>`.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.password)
    }

    /// `<scheme> <password>` for an arbitrary caller-supplied scheme token.
    pub fn custom(&self, scheme: &str) -> String {
        format!("{} {}", scheme, self.password)
    }

    /// `Digest <password>`.
    pub fn digest(&self) -> String {
        format!("Digest {}", self.password)
    }

    /// `OAuth <password>`.
    pub fn oauth(&self) -> String {
        format!("OAuth {}", self.password)
    }

    /// `OAuth2 <password>`.
    pub fn oauth2(&self) -> String {
        format!("OAuth2 {}", self.password)
    }

    /// Renders the named scheme as a one-entry header map.
    ///
    /// `scheme` must be one of [`SCHEMES`]; any other name fails with
    /// [`Error::InvalidScheme`]. The `custom` name dispatches through
    /// [`Authorization::custom`] with itself as the token; call that renderer
    /// directly for arbitrary tokens.
    pub fn header(&self, scheme: &str) -> Result<Headers> {
        let value = match scheme {
            "basic" => self.basic(),
            "bearer" => self.bearer(),
            "custom" => self.custom(scheme),
            "digest" => self.digest(),
            "oauth" => self.oauth(),
            "oauth2" => self.oauth2(),
            _ => {
                return Err(Error::InvalidScheme {
                    scheme: scheme.to_string(),
                })
            }
        };

        Ok(Headers::from([("Authorization".to_string(), value)]))
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("username", &self.username)
            .field("password", &"*".repeat(self.password.len()))
            .finish()
    }
}
