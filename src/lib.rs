//! Declarative configuration for static documentation-site generators.
//!
//! This crate defines the [`SiteConfig`] schema — site metadata, navigation
//! links, theming, analytics keys, and script/stylesheet includes — and
//! validates raw declarations against it. Validation collects *every*
//! violation in one pass, so a user fixes all problems in a single
//! edit-validate cycle. The normalized record is immutable; an external
//! site-building pipeline consumes it read-only for the rest of the build.
//!
//! # Example
//!
//! ```
//! use docsite_config::SiteConfig;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "title": "My Docs",
//!     "url": "https://example.com",
//!     "baseUrl": "/docs/",
//!     "headerLinks": [
//!         {"doc": "intro", "label": "Getting Started"},
//!         {"search": true}
//!     ]
//! });
//!
//! let config = SiteConfig::validate(&raw).expect("valid declaration");
//! assert!(config.clean_url); // defaults applied
//! assert_eq!(config.resolve_url("js/app.js"), "/docs/js/app.js");
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ColorsConfig, ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath,
    HighlightConfig, NavLink, OnPageNav, SearchConfig, SearchSlot, SiteConfig, SiteUser,
    is_absolute_url, is_valid_color, resolve_url,
};
