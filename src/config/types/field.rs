//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A config field path with support for nested and indexed segments.
///
/// Paths use the raw declaration's key spelling, so diagnostics point at
/// exactly what the user wrote:
///
/// ```
/// use docsite_config::FieldPath;
///
/// let path = FieldPath::new("headerLinks").index(3).child("label");
/// assert_eq!(path.as_str(), "headerLinks[3].label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a nested field segment: `colors` + `primaryColor` becomes
    /// `colors.primaryColor`.
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Append a list index segment: `headerLinks` + 3 becomes `headerLinks[3]`.
    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{idx}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
