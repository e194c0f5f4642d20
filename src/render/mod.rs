//! Parameter table renderer.
//!
//! Turns a [`Document`] into a reStructuredText page with one `csv-table`
//! directive per table. Every parameter becomes one row of seven quoted
//! fields: name, type (with modifier), default, min, max, unit, description.
//!
//! Output of a table with one parameter:
//!
//! ```text
//! .. tabularcolumns:: |p{1.8cm}|p{1.0cm}|p{2cm}|p{2cm}|p{2cm}|p{0.5cm}|p{5cm}|
//! .. csv-table:: Housekeeping
//!    :header: "Name", "type", "default value", "min", "max", "unit", "description"
//!
//!    "temp", "int16 ", "-", "", "", "C", "Sensor temp"
//! ```
//!
//! Numbers are written exactly as they appear in the input. Two cases differ
//! from the output of the legacy `doc-gen.py` script on purpose: booleans are
//! written `true`/`false` (not `True`/`False`), and an explicit `null` is
//! treated as absent (`-` or empty, not `None`).

mod templates;

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::path::Path;

use askama::Template;
use serde_json::Value;

use crate::error::{DocgenError, DocgenResult};
use crate::model::{Document, Parameter, Table};
use templates::{ParamsTemplate, TableBlock, COLUMN_SPEC};

/// Column labels of every parameter table.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "type",
    "default value",
    "min",
    "max",
    "unit",
    "description",
];

/// Rendered in the default column when a parameter has no default.
pub const NO_DEFAULT: &str = "-";

/// A row of seven fields, written as `"a", "b", ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    fields: [Cow<'a, str>; 7],
}

impl Row<'static> {
    /// The header row built from [`COLUMNS`].
    pub fn header() -> Self {
        Self {
            fields: COLUMNS.map(Cow::Borrowed),
        }
    }
}

impl<'a> Row<'a> {
    pub fn from_parameter(p: &'a Parameter) -> Self {
        let type_field = format!("{} {}", p.type_tag, p.modifier.as_deref().unwrap_or(""));
        Self {
            fields: [
                Cow::Borrowed(p.name.as_str()),
                Cow::Owned(type_field),
                p.default
                    .as_ref()
                    .map_or(Cow::Borrowed(NO_DEFAULT), scalar_text),
                optional_text(p.min.as_ref()),
                optional_text(p.max.as_ref()),
                optional_text(p.unit.as_ref()),
                Cow::Borrowed(p.description.as_deref().unwrap_or("")),
            ],
        }
    }

    pub fn fields(&self) -> &[Cow<'a, str>] {
        &self.fields
    }
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{field}\"")?;
        }
        Ok(())
    }
}

/// String form of a scalar: strings unquoted, numbers in their source text,
/// everything else as compact JSON.
fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

fn optional_text(value: Option<&Value>) -> Cow<'_, str> {
    value.map_or(Cow::Borrowed(""), scalar_text)
}

/// Render tables into a complete reStructuredText document.
pub fn render(tables: &[Table]) -> DocgenResult<String> {
    let template = ParamsTemplate {
        column_spec: COLUMN_SPEC,
        header: Row::header(),
        tables: tables
            .iter()
            .map(|t| TableBlock {
                name: &t.name,
                rows: t.parameters.iter().map(Row::from_parameter).collect(),
            })
            .collect(),
    };
    Ok(template.render()?)
}

/// Write `contents` to `path`, creating parent directories and truncating any
/// existing file.
pub fn write_document(path: &Path, contents: &str) -> DocgenResult<()> {
    let write_err = |source| DocgenError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let mut file = std::fs::File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)
}

/// Counts reported after a successful [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub tables: usize,
    pub parameters: usize,
    pub bytes: usize,
}

/// Load `input`, render it, and write the result to `output`.
///
/// The document is rendered in memory first, so a bad input never touches
/// the output file.
pub fn generate(input: &Path, output: &Path) -> DocgenResult<Summary> {
    let document = Document::load(input)?;
    let rendered = render(&document.tables)?;
    write_document(output, &rendered)?;

    let summary = Summary {
        tables: document.tables.len(),
        parameters: document.parameter_count(),
        bytes: rendered.len(),
    };
    tracing::info!(?output, ?summary, "Wrote parameter document");
    Ok(summary)
}
