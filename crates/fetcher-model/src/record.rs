//! Dynamic leaf-entity records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A leaf entity as fetched: an ordered map of named JSON fields.
///
/// Scripts, triggers, screens, schedules and tables all share this shape
/// but disagree on everything beyond an owning-folder reference and a
/// description-like field, so the map stays dynamic. Records are read-only
/// snapshots of the payload; derived documents (metadata files, joined
/// composites) are built as new maps rather than by mutating the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Integer field, if present and integral.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.0.get(key)?.as_i64()
    }

    /// String field, if present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// String field treated as a display name: `None` when absent, null or
    /// empty, so callers can fall back to an id-based name.
    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|s| !s.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Copy of this record with the given fields removed. Used to derive
    /// metadata documents with long-text bodies stripped.
    pub fn without(&self, keys: &[&str]) -> Record {
        let mut out = self.0.clone();
        for key in keys {
            out.remove(*key);
        }
        Record(out)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Record {
        serde_json::from_value(json!({
            "id": 10,
            "description": "hi",
            "body": "print(1)"
        }))
        .unwrap()
    }

    #[test]
    fn typed_accessors() {
        let record = sample();
        assert_eq!(record.int("id"), Some(10));
        assert_eq!(record.text("description"), Some("hi"));
        assert_eq!(record.int("missing"), None);
    }

    #[test]
    fn display_name_rejects_empty() {
        let record: Record = serde_json::from_value(json!({"description": ""})).unwrap();
        assert_eq!(record.display_name("description"), None);
        assert_eq!(sample().display_name("description"), Some("hi"));
    }

    #[test]
    fn without_strips_fields_and_keeps_original() {
        let record = sample();
        let meta = record.without(&["body"]);
        assert_eq!(meta.get("body"), None);
        assert_eq!(meta.int("id"), Some(10));
        // Input snapshot is untouched.
        assert_eq!(record.text("body"), Some("print(1)"));
    }
}
