//! Typed accessors over a raw declaration value.
//!
//! Every accessor records a diagnostic instead of returning early, so a
//! single validation pass reports every problem in the declaration.

use serde_json::{Map, Value};

use super::types::{ConfigDiagnostics, ErrorKind, FieldPath};

/// Human-readable name of a raw value's type, used in type-mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Cursor over one object level of the raw declaration.
///
/// `null` values are treated the same as absent keys for optional fields,
/// since JS-style declarations commonly use `null` to disable a setting.
pub struct RawObject<'a> {
    map: &'a Map<String, Value>,
    /// `None` at the declaration root.
    path: Option<FieldPath>,
}

impl<'a> RawObject<'a> {
    pub fn root(map: &'a Map<String, Value>) -> Self {
        Self { map, path: None }
    }

    pub fn nested(map: &'a Map<String, Value>, path: FieldPath) -> Self {
        Self {
            map,
            path: Some(path),
        }
    }

    /// Full path of a key at this level.
    pub fn field(&self, key: &str) -> FieldPath {
        match &self.path {
            Some(parent) => parent.child(key),
            None => FieldPath::new(key),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a String> {
        self.map.keys()
    }

    /// Required non-empty string field.
    pub fn require_str(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        match self.map.get(key) {
            None => {
                diag.error(
                    self.field(key),
                    ErrorKind::MissingField,
                    "required field is missing",
                );
                None
            }
            Some(value) => self.str_value(key, value, diag),
        }
    }

    fn str_value(&self, key: &str, value: &Value, diag: &mut ConfigDiagnostics) -> Option<String> {
        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::String(_) => {
                diag.error(
                    self.field(key),
                    ErrorKind::PatternMismatch,
                    "must not be empty",
                );
                None
            }
            other => {
                diag.error(
                    self.field(key),
                    ErrorKind::TypeMismatch,
                    format!("expected string, got {}", type_name(other)),
                );
                None
            }
        }
    }

    /// Optional string field; absent and `null` both yield `None`.
    pub fn opt_str(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                diag.error(
                    self.field(key),
                    ErrorKind::TypeMismatch,
                    format!("expected string, got {}", type_name(other)),
                );
                None
            }
        }
    }

    /// Optional boolean field with a default.
    pub fn bool_or(&self, key: &str, default: bool, diag: &mut ConfigDiagnostics) -> bool {
        match self.map.get(key) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                diag.error(
                    self.field(key),
                    ErrorKind::TypeMismatch,
                    format!("expected boolean, got {}", type_name(other)),
                );
                default
            }
        }
    }

    /// Optional array field.
    pub fn opt_array(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<&'a [Value]> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                diag.error(
                    self.field(key),
                    ErrorKind::TypeMismatch,
                    format!("expected array, got {}", type_name(other)),
                );
                None
            }
        }
    }

    /// Optional nested object field.
    pub fn opt_object(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<RawObject<'a>> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(RawObject::nested(map, self.field(key))),
            Some(other) => {
                diag.error(
                    self.field(key),
                    ErrorKind::TypeMismatch,
                    format!("expected object, got {}", type_name(other)),
                );
                None
            }
        }
    }

    /// String-array field (script/stylesheet URL lists); absent yields empty.
    ///
    /// Element errors cite the element index; well-formed elements are kept
    /// so ordering survives for the valid part of the list.
    pub fn str_list(&self, key: &str, diag: &mut ConfigDiagnostics) -> Vec<String> {
        let Some(items) = self.opt_array(key, diag) else {
            return Vec::new();
        };
        let path = self.field(key);
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) if !s.is_empty() => out.push(s.clone()),
                Value::String(_) => diag.error(
                    path.index(i),
                    ErrorKind::PatternMismatch,
                    "must not be empty",
                ),
                other => diag.error(
                    path.index(i),
                    ErrorKind::TypeMismatch,
                    format!("expected string, got {}", type_name(other)),
                ),
            }
        }
        out
    }
}
