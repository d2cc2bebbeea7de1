use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declarative description of one column being added to a seed-data file.
///
/// The serialized form follows the generator host's JSON convention
/// (camelCase keys, `fieldType` as a raw tag string).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Database column name; becomes the new header cell.
    pub database_column: String,
    /// Semantic type tag (e.g. `varchar(50)`, `bigint`, `decimal(10,2)`).
    pub field_type: String,
    /// Validation rules applied to every generated value.
    #[serde(default)]
    pub validate_rules: ValidationRules,
}

impl ColumnSpec {
    /// Parsed view of the raw `field_type` tag.
    pub fn field_type(&self) -> FieldType {
        FieldType::parse(&self.field_type)
    }
}

/// Validation rules for one column. All rules are optional; `required`
/// defaults to false.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// Recognized semantic field types.
///
/// `decimal` and `varchar` tags match by prefix so precision/length suffixes
/// (`decimal(10,2)`, `varchar(50)`) resolve to the same variant. Tags with no
/// generation rule parse to [`FieldType::Unknown`] and produce no value; the
/// engine surfaces these as warnings rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Integer,
    Bigint,
    Double,
    Decimal,
    Float,
    Uuid,
    Boolean,
    Date,
    DateTime,
    Varchar,
    Unknown,
}

impl FieldType {
    pub fn parse(tag: &str) -> FieldType {
        match tag {
            "integer" => FieldType::Integer,
            "bigint" => FieldType::Bigint,
            "double" => FieldType::Double,
            "float" => FieldType::Float,
            "uuid" => FieldType::Uuid,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "datetime" => FieldType::DateTime,
            _ if tag.starts_with("decimal") => FieldType::Decimal,
            _ if tag.starts_with("varchar") => FieldType::Varchar,
            _ => FieldType::Unknown,
        }
    }

    /// Integer-valued types share one generation rule.
    pub fn is_integer_like(&self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Bigint | FieldType::Double | FieldType::Decimal
        )
    }
}
