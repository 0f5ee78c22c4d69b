//! Diff-friendly JSON output
//!
//! Metadata and composite files are committed to Git by the users of the
//! materialized tree, so the serialization must be stable across runs:
//! 4-space indentation, field order as fetched, non-ASCII left unescaped.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Result;

/// Serialize a value as UTF-8 JSON bytes with 4-space indentation.
pub fn to_pretty_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn uses_four_space_indent() {
        let bytes = to_pretty_bytes(&json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn non_ascii_stays_unescaped() {
        let bytes = to_pretty_bytes(&json!({"name": "Kø æøå"})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Kø æøå"));
        assert!(!text.contains("\\u"));
    }
}
