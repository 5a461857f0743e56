//! Site configuration schema and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Field-group definitions
//! │   ├── header     # NavLink union + headerLinks
//! │   ├── search     # searchIntegration
//! │   ├── theme      # colors, highlight
//! │   └── users      # users showcase
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ErrorKind, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── raw.rs         # Raw-value cursor (diagnostic-collecting accessors)
//! ├── util.rs        # URL resolution
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The declaration is validated once at build start; the resulting
//! [`SiteConfig`] is immutable and shared read-only by every downstream
//! consumer for the rest of the build.

pub mod raw;
pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    ColorsConfig, HighlightConfig, NavLink, SearchConfig, SearchSlot, SiteUser, is_valid_color,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};

pub use util::{is_absolute_url, resolve_url};

use raw::RawObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw keys the schema recognizes; anything else draws an unknown-field
/// warning.
const RECOGNIZED_KEYS: &[&str] = &[
    "title",
    "tagline",
    "url",
    "baseUrl",
    "organizationName",
    "projectName",
    "gaTrackingId",
    "headerLinks",
    "users",
    "searchIntegration",
    "headerIcon",
    "footerIcon",
    "favicon",
    "ogImage",
    "twitterImage",
    "colors",
    "highlight",
    "scripts",
    "stylesheets",
    "onPageNav",
    "scrollToTop",
    "docsSideNavCollapsible",
    "editUrl",
    "disableHeaderTitle",
    "wrapPagesHTML",
    "cleanUrl",
];

// ============================================================================
// root configuration
// ============================================================================

/// Normalized documentation-site configuration.
///
/// Produced by [`SiteConfig::validate`] with defaults applied for every
/// absent optional field; never mutated afterwards. Serializes back to the
/// raw declaration's camelCase keys, so validating its own serialized form
/// is a no-op. There is intentionally no `Deserialize`: validation is the
/// only way to construct one, so every instance carries its defaults and
/// has passed every check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title, shown in the header and page titles.
    pub title: String,

    /// Short slogan shown next to the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Absolute base URL the site is served from (scheme + host).
    pub url: String,

    /// Path prefix under the host; starts and ends with `/`.
    pub base_url: String,

    /// Organization owning the repository; used to build repo/edit URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// Repository name; used to build repo/edit URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Google Analytics tracking identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga_tracking_id: Option<String>,

    /// Header navigation bar entries, rendered left to right.
    pub header_links: Vec<NavLink>,

    /// Organizations listed on the users page.
    pub users: Vec<SiteUser>,

    /// Indexed-search integration; absent disables search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_integration: Option<SearchConfig>,

    /// Header logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_icon: Option<String>,

    /// Footer logo image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,

    /// Favicon path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// Open Graph card image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    /// Twitter card image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,

    /// Primary/secondary theme colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsConfig>,

    /// Code-highlight settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightConfig>,

    /// Script URLs injected into every page, in load order.
    pub scripts: Vec<String>,

    /// Stylesheet URLs injected into every page, in load order.
    pub stylesheets: Vec<String>,

    /// On-page ("table of contents") navigation style.
    pub on_page_nav: OnPageNav,

    /// Show a scroll-to-top button at the bottom of pages.
    pub scroll_to_top: bool,

    /// Render sidebar categories as collapsible.
    pub docs_side_nav_collapsible: bool,

    /// URL template pointing at the documentation source location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,

    /// Show only the header icon, never the title text.
    pub disable_header_title: bool,

    /// Wrap externally generated HTML pages in the site's page chrome.
    #[serde(rename = "wrapPagesHTML")]
    pub wrap_pages_html: bool,

    /// Omit the trailing file extension from generated links.
    pub clean_url: bool,
}

/// On-page navigation style for the current documentation page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    /// No on-page navigation.
    #[default]
    None,
    /// Separate column alongside the content.
    Separate,
}

impl OnPageNav {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "separate" => Some(Self::Separate),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Separate => "separate",
        }
    }
}

impl SiteConfig {
    // ========================================================================
    // validation
    // ========================================================================

    /// Validate a raw declaration value.
    ///
    /// Collects every violation instead of failing on the first, so a user
    /// fixes all problems in one edit-validate cycle. On success, every
    /// absent optional field takes its documented default. Pure: performs no
    /// I/O and prints nothing. Unrecognized top-level fields are warnings,
    /// never errors; a successful result discards them, so callers that want
    /// to inspect or report warnings should use [`SiteConfig::validate_raw`].
    pub fn validate(value: &Value) -> Result<Self, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        match Self::validate_raw(value, &mut diag) {
            Some(config) => Ok(config),
            None => Err(diag),
        }
    }

    /// Validate a raw declaration value into a caller-supplied accumulator.
    ///
    /// Records every error and warning into `diag` and returns the
    /// normalized configuration when the declaration is valid; `diag` then
    /// carries only warnings. Returns `None` when any error was recorded.
    pub fn validate_raw(value: &Value, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let errors_before = diag.len();

        let Value::Object(map) = value else {
            diag.error(
                FieldPath::new("<declaration>"),
                ErrorKind::TypeMismatch,
                format!("expected object, got {}", raw::type_name(value)),
            );
            return None;
        };
        let obj = RawObject::root(map);

        for key in obj.keys() {
            if !RECOGNIZED_KEYS.contains(&key.as_str()) {
                diag.warn(FieldPath::new(key.clone()), "unknown field, ignoring");
            }
        }

        // Required fields
        let title = obj.require_str("title", diag);
        let url = obj.require_str("url", diag);
        let base_url = obj.require_str("baseUrl", diag);

        if let Some(url) = &url {
            validate_site_url(url, obj.field("url"), diag);
        }
        if let Some(base_url) = &base_url {
            validate_base_url(base_url, obj.field("baseUrl"), diag);
        }

        // Sections
        let header_links = match obj.opt_array("headerLinks", diag) {
            Some(items) => section::parse_header_links(items, &obj.field("headerLinks"), diag),
            None => Vec::new(),
        };
        let users = match obj.opt_array("users", diag) {
            Some(items) => section::parse_users(items, &obj.field("users"), diag),
            None => Vec::new(),
        };
        let search_integration = obj
            .opt_object("searchIntegration", diag)
            .and_then(|section| SearchConfig::parse(&section, diag));
        let colors = obj
            .opt_object("colors", diag)
            .and_then(|section| ColorsConfig::parse(&section, diag));
        let highlight = obj
            .opt_object("highlight", diag)
            .map(|section| HighlightConfig::parse(&section, diag));

        // Scalars and defaults
        let on_page_nav = parse_on_page_nav(&obj, diag);
        let config = Self {
            title: title.unwrap_or_default(),
            tagline: obj.opt_str("tagline", diag),
            url: url.unwrap_or_default(),
            base_url: base_url.unwrap_or_default(),
            organization_name: obj.opt_str("organizationName", diag),
            project_name: obj.opt_str("projectName", diag),
            ga_tracking_id: obj.opt_str("gaTrackingId", diag),
            header_links,
            users,
            search_integration,
            header_icon: obj.opt_str("headerIcon", diag),
            footer_icon: obj.opt_str("footerIcon", diag),
            favicon: obj.opt_str("favicon", diag),
            og_image: obj.opt_str("ogImage", diag),
            twitter_image: obj.opt_str("twitterImage", diag),
            colors,
            highlight,
            scripts: obj.str_list("scripts", diag),
            stylesheets: obj.str_list("stylesheets", diag),
            on_page_nav,
            scroll_to_top: obj.bool_or("scrollToTop", false, diag),
            docs_side_nav_collapsible: obj.bool_or("docsSideNavCollapsible", false, diag),
            edit_url: obj.opt_str("editUrl", diag),
            disable_header_title: obj.bool_or("disableHeaderTitle", false, diag),
            wrap_pages_html: obj.bool_or("wrapPagesHTML", false, diag),
            clean_url: obj.bool_or("cleanUrl", true, diag),
        };

        (diag.len() == errors_before).then_some(config)
    }

    // ========================================================================
    // declaration loading
    // ========================================================================

    /// Parse and validate a JSON declaration.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content)?;
        Self::load_value(&value)
    }

    /// Parse and validate a TOML declaration.
    ///
    /// The document is converted to the common raw value form and validated
    /// identically to JSON input.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Value = toml::from_str(content)?;
        let value = serde_json::to_value(table)?;
        Self::load_value(&value)
    }

    /// Shared loading path. Unlike bare [`SiteConfig::validate`], this layer
    /// reports unknown-field warnings on stderr.
    fn load_value(value: &Value) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let config = Self::validate_raw(value, &mut diag);
        diag.print_warnings();
        match config {
            Some(config) => Ok(config),
            None => Err(ConfigError::Diagnostics(diag)),
        }
    }

    /// Load a declaration file, dispatching on its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
        }
    }

    // ========================================================================
    // url resolution
    // ========================================================================

    /// Resolve a script/stylesheet/link path against this site's `baseUrl`.
    ///
    /// See [`resolve_url`].
    pub fn resolve_url(&self, path: &str) -> String {
        util::resolve_url(path, &self.base_url)
    }
}

/// `url` must be an absolute http(s) URL with a host.
fn validate_site_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    ErrorKind::PatternMismatch,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    ErrorKind::PatternMismatch,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                ErrorKind::PatternMismatch,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// `baseUrl` must start and end with `/`.
fn validate_base_url(base_url: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !base_url.starts_with('/') || !base_url.ends_with('/') {
        diag.error_with_hint(
            field,
            ErrorKind::PatternMismatch,
            format!("'{base_url}' must start and end with '/'"),
            "use \"/\" for a site served at the domain root",
        );
    }
}

fn parse_on_page_nav(obj: &RawObject<'_>, diag: &mut ConfigDiagnostics) -> OnPageNav {
    match obj.get("onPageNav") {
        None | Some(Value::Null) => OnPageNav::default(),
        Some(Value::String(value)) => OnPageNav::parse(value).unwrap_or_else(|| {
            diag.error_with_hint(
                obj.field("onPageNav"),
                ErrorKind::InvalidEnumValue,
                format!("unknown navigation style '{value}'"),
                "expected \"none\" or \"separate\"",
            );
            OnPageNav::default()
        }),
        Some(other) => {
            diag.error(
                obj.field("onPageNav"),
                ErrorKind::TypeMismatch,
                format!("expected string, got {}", raw::type_name(other)),
            );
            OnPageNav::default()
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal raw declaration covering only the required fields.
#[cfg(test)]
pub(crate) fn minimal_raw() -> Value {
    serde_json::json!({
        "title": "Test Site",
        "url": "https://example.com",
        "baseUrl": "/"
    })
}

/// Validate a raw declaration built from the minimal required fields plus
/// `extra` overrides. Panics on validation failure (to catch schema typos
/// in tests).
#[cfg(test)]
pub(crate) fn test_validate(extra: Value) -> SiteConfig {
    let mut value = minimal_raw();
    if let (Value::Object(base), Value::Object(overrides)) = (&mut value, extra) {
        base.extend(overrides);
    }
    SiteConfig::validate(&value).unwrap_or_else(|diag| panic!("validation failed:\n{diag}"))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Assert that validation fails with one error of `kind` at `field`.
    fn assert_single_error(value: Value, kind: ErrorKind, field: &str) {
        let diag = SiteConfig::validate(&value).unwrap_err();
        assert_eq!(diag.len(), 1, "expected one error, got:\n{diag}");
        assert_eq!(diag.errors()[0].kind, kind);
        assert_eq!(diag.errors()[0].field.as_str(), field);
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = test_validate(json!({}));

        assert_eq!(config.title, "Test Site");
        assert_eq!(config.base_url, "/");
        assert!(config.tagline.is_none());
        assert!(config.header_links.is_empty());
        assert!(config.users.is_empty());
        assert!(config.search_integration.is_none());
        assert!(config.colors.is_none());
        assert!(config.scripts.is_empty());
        assert!(config.stylesheets.is_empty());
        assert_eq!(config.on_page_nav, OnPageNav::None);
        assert!(!config.scroll_to_top);
        assert!(!config.docs_side_nav_collapsible);
        assert!(!config.disable_header_title);
        assert!(!config.wrap_pages_html);
        assert!(config.clean_url);
    }

    #[test]
    fn test_missing_required_fields() {
        let diag = SiteConfig::validate(&json!({})).unwrap_err();
        assert_eq!(diag.len(), 3);
        let fields: Vec<&str> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["title", "url", "baseUrl"]);
        assert!(
            diag.errors()
                .iter()
                .all(|e| e.kind == ErrorKind::MissingField)
        );
    }

    #[test]
    fn test_non_object_declaration() {
        let diag = SiteConfig::validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(diag.errors()[0].kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_all_violations_collected_in_one_pass() {
        let diag = SiteConfig::validate(&json!({
            "url": "not a url",
            "baseUrl": "docs",
            "headerLinks": [{"doc": "intro", "href": "https://x"}],
            "onPageNav": "inline"
        }))
        .unwrap_err();

        let kinds: Vec<ErrorKind> = diag.errors().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&ErrorKind::MissingField)); // title
        assert!(kinds.contains(&ErrorKind::PatternMismatch)); // url, baseUrl
        assert!(kinds.contains(&ErrorKind::AmbiguousVariant));
        assert!(kinds.contains(&ErrorKind::InvalidEnumValue));
        assert!(diag.len() >= 5);
    }

    #[test]
    fn test_url_requires_http_scheme() {
        assert_single_error(
            json!({"title": "T", "url": "ftp://example.com", "baseUrl": "/"}),
            ErrorKind::PatternMismatch,
            "url",
        );
    }

    #[test]
    fn test_base_url_pattern() {
        assert_single_error(
            json!({"title": "T", "url": "https://example.com", "baseUrl": "/docs"}),
            ErrorKind::PatternMismatch,
            "baseUrl",
        );
        assert_single_error(
            json!({"title": "T", "url": "https://example.com", "baseUrl": "docs/"}),
            ErrorKind::PatternMismatch,
            "baseUrl",
        );
    }

    #[test]
    fn test_duplicate_search_slot() {
        assert_single_error(
            json!({
                "title": "T", "url": "https://example.com", "baseUrl": "/",
                "headerLinks": [{"search": true}, {"search": true}]
            }),
            ErrorKind::DuplicateSlot,
            "headerLinks[1]",
        );
    }

    #[test]
    fn test_empty_search_api_key() {
        assert_single_error(
            json!({
                "title": "T", "url": "https://example.com", "baseUrl": "/",
                "searchIntegration": {"apiKey": "", "indexName": "x"}
            }),
            ErrorKind::PatternMismatch,
            "searchIntegration.apiKey",
        );
    }

    #[test]
    fn test_on_page_nav_values() {
        let config = test_validate(json!({"onPageNav": "separate"}));
        assert_eq!(config.on_page_nav, OnPageNav::Separate);
        assert_eq!(config.on_page_nav.as_str(), "separate");

        let diag = SiteConfig::validate(&json!({
            "title": "T", "url": "https://example.com", "baseUrl": "/",
            "onPageNav": "inline"
        }))
        .unwrap_err();
        assert_eq!(diag.errors()[0].kind, ErrorKind::InvalidEnumValue);
        assert!(diag.errors()[0].message.contains("inline"));
    }

    #[test]
    fn test_unknown_fields_warn_but_validate() {
        let value = json!({
            "title": "T", "url": "https://example.com", "baseUrl": "/",
            "customField": 1
        });
        // Unknown fields never fail validation
        assert!(SiteConfig::validate(&value).is_ok());

        // The caller-supplied accumulator hands the warnings back instead
        // of printing them
        let mut diag = ConfigDiagnostics::new();
        let config = SiteConfig::validate_raw(&value, &mut diag);
        assert!(config.is_some());
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "customField");
    }

    #[test]
    fn test_validate_raw_reports_errors_in_accumulator() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteConfig::validate_raw(&json!({"title": "T"}), &mut diag);

        assert!(config.is_none());
        assert_eq!(diag.len(), 2); // url, baseUrl
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_full_declaration() {
        let config = test_validate(json!({
            "title": "PyTorch-DP",
            "tagline": "Train PyTorch models with Differential Privacy",
            "url": "https://facebookresearch.github.io/pytorch-dp",
            "baseUrl": "/",
            "cleanUrl": true,
            "organizationName": "pytorch",
            "projectName": "pytorch-dp",
            "gaTrackingId": "UA-139570076-2",
            "headerLinks": [
                {"doc": "introduction", "label": "Getting Started"},
                {"href": "/tutorials/", "label": "Tutorials"},
                {"href": "https://github.com/facebookresearch/pytorch-dp", "label": "GitHub"},
                {"search": true}
            ],
            "users": [],
            "searchIntegration": {
                "apiKey": "207c27d819f967749142d8611de7cb19",
                "indexName": "pytorch-dp"
            },
            "headerIcon": "img/pytorch-dp_logo.png",
            "favicon": "img/pytorch-dp.ico",
            "colors": {"primaryColor": "#4283f4", "secondaryColor": "#2af2bf"},
            "highlight": {"theme": "default"},
            "scripts": [
                "https://buttons.github.io/buttons.js",
                "js/code_block_buttons.js"
            ],
            "stylesheets": ["css/code_block_buttons.css"],
            "onPageNav": "separate",
            "scrollToTop": true,
            "docsSideNavCollapsible": true,
            "editUrl": "https://github.com/facebookresearch/pytorch-dp/tree/master/docs/",
            "disableHeaderTitle": true,
            "ogImage": "img/pytorch-dp-icon.png",
            "twitterImage": "img/pytorch-dp_logo.png",
            "wrapPagesHTML": true
        }));

        assert_eq!(config.header_links.len(), 4);
        assert!(config.header_links[3].is_search());
        assert_eq!(
            config.search_integration.as_ref().map(|s| &*s.index_name),
            Some("pytorch-dp")
        );
        assert_eq!(config.colors.as_ref().unwrap().primary_color, "#4283f4");
        assert!(config.scroll_to_top);
        assert!(config.wrap_pages_html);
        assert!(config.disable_header_title);
        assert_eq!(config.scripts.len(), 2);
    }

    #[test]
    fn test_normalization_idempotent() {
        let config = test_validate(json!({
            "tagline": "docs",
            "headerLinks": [
                {"doc": "intro", "label": "Docs"},
                {"search": true}
            ],
            "users": [{"caption": "Acme", "infoLink": "https://acme.example"}],
            "searchIntegration": {"apiKey": "k", "indexName": "i"},
            "colors": {"primaryColor": "#4283f4", "secondaryColor": "teal"},
            "highlight": {"theme": "dracula"},
            "scripts": ["js/a.js"],
            "onPageNav": "separate",
            "scrollToTop": true
        }));

        let serialized = serde_json::to_value(&config).unwrap();
        let revalidated = SiteConfig::validate(&serialized)
            .unwrap_or_else(|diag| panic!("round-trip failed:\n{diag}"));
        assert_eq!(config, revalidated);
    }

    #[test]
    fn test_resolve_url_uses_base_url() {
        let config = test_validate(json!({"baseUrl": "/site/"}));
        assert_eq!(config.resolve_url("js/a.js"), "/site/js/a.js");
        assert_eq!(config.resolve_url("/js/a.js"), "/site/js/a.js");
        assert_eq!(
            config.resolve_url("https://cdn.example.com/a.js"),
            "https://cdn.example.com/a.js"
        );
    }

    #[test]
    fn test_from_json_str() {
        let config = SiteConfig::from_json_str(
            r#"{"title": "T", "url": "https://example.com", "baseUrl": "/"}"#,
        )
        .unwrap();
        assert_eq!(config.title, "T");

        let err = SiteConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = SiteConfig::from_json_str("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Diagnostics(_)));
    }

    #[test]
    fn test_from_toml_str() {
        let config = SiteConfig::from_toml_str(
            r##"
title = "My Docs"
url = "https://example.com"
baseUrl = "/docs/"
scrollToTop = true

[[headerLinks]]
doc = "intro"
label = "Getting Started"

[[headerLinks]]
search = true

[colors]
primaryColor = "#4283f4"
secondaryColor = "#2af2bf"
"##,
        )
        .unwrap();

        assert_eq!(config.base_url, "/docs/");
        assert!(config.scroll_to_top);
        assert_eq!(config.header_links.len(), 2);
        assert!(config.header_links[1].is_search());
        assert!(config.colors.is_some());
    }

    #[test]
    fn test_from_toml_str_invalid_syntax() {
        let err = SiteConfig::from_toml_str("[base\ntitle = \"My Docs\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siteConfig.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"title": "T", "url": "https://example.com", "baseUrl": "/"}}"#
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.title, "T");

        let missing = dir.path().join("absent.json");
        assert!(matches!(
            SiteConfig::from_path(&missing),
            Err(ConfigError::Io(..))
        ));

        let unknown = dir.path().join("siteConfig.yaml");
        fs::File::create(&unknown).unwrap();
        assert!(matches!(
            SiteConfig::from_path(&unknown),
            Err(ConfigError::UnknownFormat(_))
        ));
    }
}
