// src/connector/response.rs
//
// Host-facing payloads, serialized in the shape the analytics platform expects.

use serde::Serialize;
use serde_json::Value;

use super::config::Delimiter;
use crate::schema::{numeric::parse_number, FieldDescriptor, FieldType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthTypeResponse {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
}

// ─── configuration surface ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigEntry {
    #[serde(rename_all = "camelCase")]
    TextInput {
        name: String,
        display_name: String,
        help_text: String,
        placeholder: String,
    },
    #[serde(rename_all = "camelCase")]
    SelectSingle {
        name: String,
        display_name: String,
        allow_override: bool,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDescription {
    pub config_params: Vec<ConfigEntry>,
    pub date_range_required: bool,
}

impl ConfigDescription {
    pub(crate) fn csv_source() -> Self {
        let delimiters = Delimiter::ALL
            .into_iter()
            .map(|d| SelectOption {
                label: d.label().to_string(),
                value: d.value().to_string(),
            })
            .collect();
        let header_options = [("True", "true"), ("False", "false")]
            .into_iter()
            .map(|(label, value)| SelectOption {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            config_params: vec![
                ConfigEntry::TextInput {
                    name: "url".into(),
                    display_name: "Enter the URL of your CSV".into(),
                    help_text: "e.g. https://api.site.com/api/data.csv".into(),
                    placeholder: "https://".into(),
                },
                ConfigEntry::SelectSingle {
                    name: "delimiter".into(),
                    display_name: "Select the delimiter between each value".into(),
                    allow_override: false,
                    options: delimiters,
                },
                ConfigEntry::SelectSingle {
                    name: "containsHeader".into(),
                    display_name: "Does your CSV have a header row?".into(),
                    allow_override: false,
                    options: header_options,
                },
            ],
            date_range_required: false,
        }
    }
}

// ─── schema ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConceptType {
    Dimension,
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticType {
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    String,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aggregation {
    Sum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Semantics {
    pub concept_type: ConceptType,
    pub semantic_type: SemanticType,
}

/// A field as the host platform defines it: numbers are summable metrics,
/// everything else is a text dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data_type: DataType,
    pub semantics: Semantics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_aggregation_type: Option<Aggregation>,
}

impl From<&FieldDescriptor> for HostField {
    fn from(f: &FieldDescriptor) -> Self {
        let (data_type, concept_type, semantic_type, aggregation) = match f.field_type {
            FieldType::Number => (
                DataType::Number,
                ConceptType::Metric,
                SemanticType::Number,
                Some(Aggregation::Sum),
            ),
            FieldType::Text => (
                DataType::String,
                ConceptType::Dimension,
                SemanticType::Text,
                None,
            ),
        };
        Self {
            name: f.key.clone(),
            label: f.display_name.clone(),
            data_type,
            semantics: Semantics {
                concept_type,
                semantic_type,
            },
            default_aggregation_type: aggregation,
        }
    }
}

pub fn host_fields(fields: &[FieldDescriptor]) -> Vec<HostField> {
    fields.iter().map(HostField::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaResponse {
    pub schema: Vec<HostField>,
}

// ─── data ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRow {
    pub values: Vec<Value>,
}

impl DataRow {
    /// `cells` and `fields` are aligned: one cell per requested field.
    pub fn typed(fields: &[FieldDescriptor], cells: Vec<String>) -> Self {
        let values = fields
            .iter()
            .zip(cells)
            .map(|(field, cell)| match field.field_type {
                FieldType::Number => number_value(&cell).unwrap_or(Value::String(cell)),
                FieldType::Text => Value::String(cell),
            })
            .collect();
        Self { values }
    }
}

fn number_value(cell: &str) -> Option<Value> {
    if let Ok(i) = cell.trim().parse::<i64>() {
        return Some(Value::from(i));
    }
    parse_number(cell)
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse {
    pub schema: Vec<HostField>,
    pub rows: Vec<DataRow>,
}

/// A user-facing failure, in the shape the host displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserErrorResponse {
    pub error_code: &'static str,
    pub message: String,
}

impl UserErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_code: "USER",
            message: message.into(),
        }
    }
}
