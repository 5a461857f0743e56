//! Site colors (`colors`) and code-highlight theme (`highlight`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::raw::RawObject;
use crate::config::types::{ConfigDiagnostics, ErrorKind};

/// `#rgb` or `#rrggbb` hex color.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap()
});

/// CSS color keywords accepted for `colors` values (CSS Level 1/2 set plus
/// `orange`).
const NAMED_COLORS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "silver", "teal", "white", "yellow",
];

/// Primary and secondary theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsConfig {
    pub primary_color: String,
    pub secondary_color: String,
}

impl ColorsConfig {
    pub(crate) fn parse(obj: &RawObject<'_>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let primary = color_field(obj, "primaryColor", diag);
        let secondary = color_field(obj, "secondaryColor", diag);
        Some(Self {
            primary_color: primary?,
            secondary_color: secondary?,
        })
    }
}

/// Code-highlight settings for fenced code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Highlight.js theme name.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "default".into(),
        }
    }
}

impl HighlightConfig {
    pub(crate) fn parse(obj: &RawObject<'_>, diag: &mut ConfigDiagnostics) -> Self {
        Self {
            theme: obj
                .opt_str("theme", diag)
                .unwrap_or_else(|| "default".into()),
        }
    }
}

fn color_field(
    obj: &RawObject<'_>,
    key: &str,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    let value = obj.require_str(key, diag)?;
    if !is_valid_color(&value) {
        diag.error_with_hint(
            obj.field(key),
            ErrorKind::PatternMismatch,
            format!("'{value}' is not a hex or named color"),
            "use a hex value like \"#4283f4\" or a CSS color name",
        );
        return None;
    }
    Some(value)
}

/// A color value is a hex color or a CSS color keyword.
pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value) || NAMED_COLORS.contains(&value.to_ascii_lowercase().as_str())
}
