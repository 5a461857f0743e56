//! Header navigation bar entries (`headerLinks`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::raw::{self, RawObject};
use crate::config::types::{ConfigDiagnostics, ErrorKind, FieldPath};

/// The three mutually exclusive discriminant keys of a link entry.
const LINK_KEYS: [&str; 3] = ["doc", "href", "search"];

/// One entry in the header navigation bar.
///
/// Entries render left to right in declaration order. The raw shapes are
/// mutually exclusive: `{doc, label}`, `{href, label}`, `{search: true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavLink {
    /// Link to an internal documentation page.
    Doc { doc: String, label: String },
    /// Link to an external or computed URL.
    External { href: String, label: String },
    /// The search box slot; not a link. At most one per site,
    /// conventionally rendered last.
    Search { search: SearchSlot },
}

/// Discriminant of the search slot entry.
///
/// Carries no state; the raw form is the literal `true` (`{"search": true}`),
/// and nothing else round-trips, so a [`NavLink::Search`] cannot hold a
/// disabled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSlot;

impl Serialize for SearchSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for SearchSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(Self)
        } else {
            Err(serde::de::Error::custom("expected `true`"))
        }
    }
}

impl NavLink {
    /// The canonical search slot value.
    pub const fn search_slot() -> Self {
        Self::Search { search: SearchSlot }
    }

    /// Display label; `None` for the search slot.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Doc { label, .. } | Self::External { label, .. } => Some(label),
            Self::Search { .. } => None,
        }
    }

    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search { .. })
    }
}

/// Parse and validate the `headerLinks` list.
///
/// Malformed entries are dropped after recording their errors, so one pass
/// reports every problem; well-formed entries keep their relative order.
pub(crate) fn parse_header_links(
    items: &[Value],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<NavLink> {
    let mut links = Vec::with_capacity(items.len());
    let mut search_seen = false;

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
        if let Some(link) = parse_entry(map, entry_path, &mut search_seen, diag) {
            links.push(link);
        }
    }

    links
}

/// Parse one link entry, matching it against exactly one variant shape.
fn parse_entry(
    map: &Map<String, Value>,
    entry_path: FieldPath,
    search_seen: &mut bool,
    diag: &mut ConfigDiagnostics,
) -> Option<NavLink> {
    let present: Vec<&str> = LINK_KEYS
        .into_iter()
        .filter(|key| map.contains_key(*key))
        .collect();

    match present.as_slice() {
        [] => {
            diag.error_with_hint(
                entry_path,
                ErrorKind::AmbiguousVariant,
                "entry matches no link shape",
                "declare exactly one of `doc`, `href`, or `search`",
            );
            None
        }
        ["doc"] => {
            let entry = RawObject::nested(map, entry_path);
            let doc = entry.require_str("doc", diag);
            let label = entry.require_str("label", diag);
            Some(NavLink::Doc {
                doc: doc?,
                label: label?,
            })
        }
        ["href"] => {
            let entry = RawObject::nested(map, entry_path);
            let href = entry.require_str("href", diag);
            let label = entry.require_str("label", diag);
            Some(NavLink::External {
                href: href?,
                label: label?,
            })
        }
        ["search"] => parse_search_slot(map, entry_path, search_seen, diag),
        keys => {
            diag.error(
                entry_path,
                ErrorKind::AmbiguousVariant,
                format!("entry matches multiple link shapes ({})", keys.join(", ")),
            );
            None
        }
    }
}

fn parse_search_slot(
    map: &Map<String, Value>,
    entry_path: FieldPath,
    search_seen: &mut bool,
    diag: &mut ConfigDiagnostics,
) -> Option<NavLink> {
    match map.get("search") {
        Some(Value::Bool(true)) => {
            if *search_seen {
                diag.error(
                    entry_path,
                    ErrorKind::DuplicateSlot,
                    "only one search slot is allowed in headerLinks",
                );
                return None;
            }
            *search_seen = true;
            Some(NavLink::search_slot())
        }
        Some(other) => {
            diag.error(
                entry_path.child("search"),
                ErrorKind::TypeMismatch,
                format!("expected `true`, got {}", raw::type_name(other)),
            );
            None
        }
        // Unreachable: the caller only dispatches here when `search` is present
        None => None,
    }
}
