//! Header accumulation

use std::collections::HashMap;

/// Header names mapped to values, as handed to the transport.
pub type Headers = HashMap<String, String>;

/// Accumulates header pairs into a final map.
///
/// `add` overwrites on repeated keys and returns the builder for chaining;
/// `build` returns a snapshot and leaves the builder reusable. Header name
/// and value legality is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder {
    configuration: Headers,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a header.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.configuration.insert(key.into(), value.into());
        self
    }

    /// Returns the accumulated map.
    pub fn build(&self) -> Headers {
        self.configuration.clone()
    }
}
