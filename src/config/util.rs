//! URL resolution helpers.

/// Check whether a path carries a URL scheme (absolute URL).
///
/// Relative paths like `js/app.js` or `/img/logo.png` fail to parse without
/// a base and are therefore treated as relative.
pub fn is_absolute_url(path: &str) -> bool {
    url::Url::parse(path).is_ok()
}

/// Resolve a script/stylesheet/link path against the site base URL.
///
/// Absolute URLs pass through unchanged. Relative paths are concatenated
/// onto `base_url` with exactly one `/` at the join point.
///
/// # Examples
/// ```
/// use docsite_config::resolve_url;
///
/// assert_eq!(resolve_url("/img/x.png", "/"), "/img/x.png");
/// assert_eq!(resolve_url("js/a.js", "/site/"), "/site/js/a.js");
/// assert_eq!(
///     resolve_url("https://cdn.example.com/lib.js", "/site/"),
///     "https://cdn.example.com/lib.js"
/// );
/// ```
pub fn resolve_url(path: &str, base_url: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let rel = path.strip_prefix('/').unwrap_or(path);
    format!("{base}/{rel}")
}

// ============================================================================
// tests
// ============================================================================
