//! Query parameter types with user-friendly parse errors.
//!
//! Numeric parameters are taken as raw strings and parsed here so a bad value
//! produces a `{"message": ...}` 400 instead of axum's plain-text rejection.

use serde::Deserialize;

use smart_notes_core::{Error, Result};

/// Parse an optional numeric query parameter. Empty values count as absent.
///
/// `expected` names the accepted range in the error message.
fn parse_optional<T: std::str::FromStr>(
    name: &str,
    raw: Option<&str>,
    expected: &str,
) -> Result<Option<T>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_| {
            Error::InvalidInput(format!(
                "Invalid value for '{}': '{}' is not {}",
                name, s, expected
            ))
        }),
    }
}

/// Parameters of `GET /notes/filter/`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub query: Option<String>,
    pub tag: Option<String>,
    pub threshold: Option<String>,
}

impl FilterQuery {
    /// Similarity threshold, if given. Values outside 0-100 are passed through.
    pub fn threshold(&self) -> Result<Option<i32>> {
        parse_optional("threshold", self.threshold.as_deref(), "an integer")
    }
}

/// Parameters of `GET /notes/recent/`.
#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<String>,
}

impl RecentQuery {
    pub fn limit(&self) -> Result<Option<u32>> {
        parse_optional("limit", self.limit.as_deref(), "a non-negative integer")
    }
}
