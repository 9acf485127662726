// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// Inferred type of a CSV column.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Text,
    Number,
}

/// A single typed column definition inferred from the CSV content.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct FieldDescriptor {
    /// Stable identifier: header text with whitespace replaced by `_`,
    /// or `column_<n>` when the CSV has no header row.
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Original header text, if any.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Whitespace as header keys see it: Unicode whitespace plus the byte order
/// mark, but not NEL (U+0085).
fn is_key_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

impl FieldDescriptor {
    pub fn from_header(label: &str) -> Self {
        let key = label
            .chars()
            .map(|c| if is_key_whitespace(c) { '_' } else { c })
            .collect();
        Self {
            key,
            field_type: FieldType::Text,
            display_name: Some(label.to_string()),
        }
    }

    /// `index` is the 0-based column position.
    pub fn from_position(index: usize) -> Self {
        Self {
            key: format!("column_{}", index + 1),
            field_type: FieldType::Text,
            display_name: None,
        }
    }

    pub fn is_number(&self) -> bool {
        self.field_type == FieldType::Number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_becomes_underscore() {
        let f = FieldDescriptor::from_header("First Name");
        assert_eq!(f.key, "First_Name");
        assert_eq!(f.display_name.as_deref(), Some("First Name"));

        let f = FieldDescriptor::from_header("a\tb  c");
        assert_eq!(f.key, "a_b__c");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let f = FieldDescriptor::from_header("\u{feff}id");
        assert_eq!(f.key, "_id");
        assert_eq!(f.display_name.as_deref(), Some("\u{feff}id"));

        let f = FieldDescriptor::from_header("a\u{85}b");
        assert_eq!(f.key, "a\u{85}b");
    }

    #[test]
    fn positional_keys_are_one_based() {
        let f = FieldDescriptor::from_position(2);
        assert_eq!(f.key, "column_3");
        assert_eq!(f.display_name, None);
        assert_eq!(f.field_type, FieldType::Text);
    }

    #[test]
    fn serializes_like_host_payload() {
        let f = FieldDescriptor {
            key: "score".into(),
            field_type: FieldType::Number,
            display_name: None,
        };
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json, serde_json::json!({"key": "score", "type": "NUMBER"}));
    }
}
