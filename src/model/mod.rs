//! Parameter table input model.
//!
//! The input is a JSON document of the form:
//!
//! ```json
//! { "tables": [ { "name": "...", "parameters": [ { "name": "...", "type": "uint8" } ] } ] }
//! ```
//!
//! Parsing happens in two steps. `serde` reads a permissive raw shape, then
//! each parameter is checked for its required `name` and `type` so that a
//! missing field is reported as [`DocgenError::MissingField`] with its table
//! and position instead of a generic parse error.

mod types;

pub use types::{ParamType, UnknownTypeTag};

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DocgenError, DocgenResult};

/// A parsed parameter tables document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Tables in input order.
    pub tables: Vec<Table>,
}

/// A named, ordered group of parameters rendered as one `csv-table` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table caption.
    pub name: String,

    /// Parameters in input order.
    pub parameters: Vec<Parameter>,
}

/// A single documented parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,

    /// Literal type tag from the input (e.g. `uint8`). Not required to be registered.
    pub type_tag: String,

    /// Appended to the type tag when rendered (e.g. `array`).
    pub modifier: Option<String>,

    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub unit: Option<Value>,
    pub description: Option<String>,
}

impl Parameter {
    /// Look up the literal type tag in the type registry.
    pub fn param_type(&self) -> Option<ParamType> {
        ParamType::from_tag(&self.type_tag)
    }
}

/// A parameter whose type tag is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIssue {
    pub table: String,
    pub parameter: String,
    pub type_tag: String,
}

impl std::fmt::Display for TypeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}: unknown type '{}'",
            self.table, self.parameter, self.type_tag
        )
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    tables: Vec<RawTable>,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    name: String,
    parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    name: Option<String>,
    #[serde(rename = "type")]
    type_tag: Option<String>,
    modifier: Option<String>,
    default: Option<Value>,
    min: Option<Value>,
    max: Option<Value>,
    unit: Option<Value>,
    description: Option<String>,
}

impl RawParameter {
    fn validate(self, table: &str, index: usize) -> DocgenResult<Parameter> {
        let missing = |field| DocgenError::MissingField {
            table: table.to_string(),
            index,
            field,
        };
        let name = self.name.ok_or_else(|| missing("name"))?;
        let type_tag = self.type_tag.ok_or_else(|| missing("type"))?;

        Ok(Parameter {
            name,
            type_tag,
            modifier: self.modifier,
            default: self.default,
            min: self.min,
            max: self.max,
            unit: self.unit,
            description: self.description,
        })
    }
}

impl Document {
    /// Read and parse a tables document from disk.
    pub fn load(path: &Path) -> DocgenResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| DocgenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json_str(&contents, &path.display().to_string())?;
        tracing::debug!(
            ?path,
            tables = document.tables.len(),
            parameters = document.parameter_count(),
            "Loaded parameter tables"
        );
        Ok(document)
    }

    /// Parse a tables document. `origin` names the source in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> DocgenResult<Self> {
        let raw: RawDocument = serde_json::from_str(json).map_err(|source| DocgenError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let tables = raw
            .tables
            .into_iter()
            .map(|table| {
                let parameters = table
                    .parameters
                    .into_iter()
                    .enumerate()
                    .map(|(index, p)| p.validate(&table.name, index))
                    .collect::<DocgenResult<Vec<_>>>()?;
                Ok(Table {
                    name: table.name,
                    parameters,
                })
            })
            .collect::<DocgenResult<Vec<_>>>()?;

        Ok(Self { tables })
    }

    /// Total number of parameters across all tables.
    pub fn parameter_count(&self) -> usize {
        self.tables.iter().map(|t| t.parameters.len()).sum()
    }

    /// Parameters whose type tag is not registered, in document order.
    pub fn type_issues(&self) -> Vec<TypeIssue> {
        self.tables
            .iter()
            .flat_map(|table| {
                table
                    .parameters
                    .iter()
                    .filter(|p| p.param_type().is_none())
                    .map(|p| TypeIssue {
                        table: table.name.clone(),
                        parameter: p.name.clone(),
                        type_tag: p.type_tag.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_full_parameter() {
        let json = r#"{"tables":[{"name":"Config","parameters":[
            {"name":"rate","type":"uint16","modifier":"array","default":10,
             "min":0,"max":1000,"unit":"Hz","description":"Sample rate"}
        ]}]}"#;
        let doc = Document::from_json_str(json, "test").unwrap();
        let p = &doc.tables[0].parameters[0];
        assert_eq!(p.name, "rate");
        assert_eq!(p.type_tag, "uint16");
        assert_eq!(p.modifier.as_deref(), Some("array"));
        assert_eq!(p.default, Some(json!(10)));
        assert_eq!(p.min, Some(json!(0)));
        assert_eq!(p.max, Some(json!(1000)));
        assert_eq!(p.unit, Some(json!("Hz")));
        assert_eq!(p.description.as_deref(), Some("Sample rate"));
        assert_eq!(p.param_type(), Some(ParamType::Uint16));
    }

    #[test]
    fn test_optional_fields_absent_and_null() {
        let json = r#"{"tables":[{"name":"T","parameters":[
            {"name":"a","type":"bool"},
            {"name":"b","type":"bool","default":null,"min":null,"unit":null}
        ]}]}"#;
        let doc = Document::from_json_str(json, "test").unwrap();
        for p in &doc.tables[0].parameters {
            assert!(p.modifier.is_none());
            assert!(p.default.is_none());
            assert!(p.min.is_none());
            assert!(p.max.is_none());
            assert!(p.unit.is_none());
            assert!(p.description.is_none());
        }
    }

    #[test]
    fn test_order_preserved() {
        let json = r#"{"tables":[
            {"name":"zeta","parameters":[{"name":"z","type":"x8"},{"name":"a","type":"x8"}]},
            {"name":"alpha","parameters":[]}
        ]}"#;
        let doc = Document::from_json_str(json, "test").unwrap();
        let names: Vec<_> = doc.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        let params: Vec<_> = doc.tables[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, vec!["z", "a"]);
        assert_eq!(doc.parameter_count(), 2);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"{"version":3,"tables":[{"name":"T","id":7,"parameters":[
            {"name":"a","type":"int8","addr":"0x10"}
        ]}]}"#;
        assert!(Document::from_json_str(json, "test").is_ok());
    }

    #[test]
    fn test_missing_tables_is_parse_error() {
        let err = Document::from_json_str(r#"{"table":[]}"#, "input.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("input.json"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Document::from_json_str("{\"tables\": [", "test").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_missing_name_reports_position() {
        let json = r#"{"tables":[{"name":"Radio","parameters":[
            {"name":"freq","type":"uint32"},
            {"type":"uint8"}
        ]}]}"#;
        let err = Document::from_json_str(json, "test").unwrap_err();
        match err {
            DocgenError::MissingField {
                table,
                index,
                field,
            } => {
                assert_eq!(table, "Radio");
                assert_eq!(index, 1);
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_type_is_missing_field() {
        let json = r#"{"tables":[{"name":"Radio","parameters":[{"name":"freq"}]}]}"#;
        let err = Document::from_json_str(json, "test").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.to_string().contains("'type'"));
    }

    #[test]
    fn test_type_issues() {
        let json = r#"{"tables":[
            {"name":"A","parameters":[{"name":"ok","type":"float"},{"name":"bad","type":"uint12"}]},
            {"name":"B","parameters":[{"name":"worse","type":"STRING"}]}
        ]}"#;
        let doc = Document::from_json_str(json, "test").unwrap();
        let issues = doc.type_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].to_string(), "A.bad: unknown type 'uint12'");
        assert_eq!(issues[1].table, "B");
        assert_eq!(issues[1].type_tag, "STRING");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load(Path::new("/nonexistent/soft_tables.json")).unwrap_err();
        assert!(matches!(err, DocgenError::Read { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
