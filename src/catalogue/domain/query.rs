//! Free-text product query.

use std::fmt;

/// Separator between a product name and its audience, as in
/// `"Trail Shoes for Runners"`.
const AUDIENCE_SEPARATOR: &str = " for ";

/// Audience assumed when the query names none.
pub const DEFAULT_TARGET_AUDIENCE: &str = "General consumers";

/// Free-text query as received from the orchestration engine.
///
/// The raw text is kept untouched; trimming and lowercasing happen in the
/// accessors that need them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductQuery(String);

impl ProductQuery {
    /// Wraps raw query text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the query with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    /// Returns the lowercased query used for matching.
    #[must_use]
    pub fn lowercased(&self) -> String {
        self.0.to_lowercase()
    }

    /// Splits the query into product name and target audience.
    ///
    /// Only the first two `" for "` segments are used. Without a separator
    /// the whole raw query is the product name and the audience is
    /// [`DEFAULT_TARGET_AUDIENCE`].
    #[must_use]
    pub fn name_and_audience(&self) -> (String, String) {
        if !self.0.contains(AUDIENCE_SEPARATOR) {
            return (self.0.clone(), DEFAULT_TARGET_AUDIENCE.to_owned());
        }

        let mut segments = self.0.split(AUDIENCE_SEPARATOR);
        let name = segments.next().unwrap_or_default().trim().to_owned();
        let audience = segments.next().unwrap_or_default().trim().to_owned();
        (name, audience)
    }
}

impl From<&str> for ProductQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
