//! Users-showcase entries (`users`).
//!
//! Organizations listed on the generated "who is using this" page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::raw::{self, RawObject};
use crate::config::types::{ConfigDiagnostics, ErrorKind, FieldPath};

/// One organization reference on the users page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteUser {
    /// Display name.
    pub caption: String,
    /// Link to the organization or to its usage of the project.
    pub info_link: String,
    /// Logo image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Pinned users appear on the index page, not only the users page.
    #[serde(default)]
    pub pinned: bool,
}

/// Parse and validate the `users` list.
pub(crate) fn parse_users(
    items: &[Value],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<SiteUser> {
    let mut users = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let entry_path = path.index(i);
        let Value::Object(map) = item else {
            diag.error(
                entry_path,
                ErrorKind::TypeMismatch,
                format!("expected object, got {}", raw::type_name(item)),
            );
            continue;
        };

        let entry = RawObject::nested(map, entry_path);
        let caption = entry.require_str("caption", diag);
        let info_link = entry.require_str("infoLink", diag);
        let image = entry.opt_str("image", diag);
        let pinned = entry.bool_or("pinned", false, diag);

        if let (Some(caption), Some(info_link)) = (caption, info_link) {
            users.push(SiteUser {
                caption,
                info_link,
                image,
                pinned,
            });
        }
    }

    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> (Vec<SiteUser>, ConfigDiagnostics) {
        let Value::Array(items) = value else {
            panic!("expected array");
        };
        let mut diag = ConfigDiagnostics::new();
        let users = parse_users(&items, &FieldPath::new("users"), &mut diag);
        (users, diag)
    }

    #[test]
    fn test_valid_entries() {
        let (users, diag) = parse(json!([
            {"caption": "Acme", "infoLink": "https://acme.example", "pinned": true},
            {"caption": "Globex", "infoLink": "https://globex.example", "image": "img/globex.png"}
        ]));

        assert!(diag.is_empty());
        assert_eq!(users.len(), 2);
        assert!(users[0].pinned);
        assert!(!users[1].pinned);
        assert_eq!(users[1].image.as_deref(), Some("img/globex.png"));
    }

    #[test]
    fn test_missing_caption() {
        let (users, diag) = parse(json!([{"infoLink": "https://acme.example"}]));

        assert!(users.is_empty());
        assert_eq!(diag.errors()[0].kind, ErrorKind::MissingField);
        assert_eq!(diag.errors()[0].field.as_str(), "users[0].caption");
    }
}
