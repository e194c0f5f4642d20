//! Askama template structs for the generated documents.

use askama::Template;

use super::Row;

/// Column widths for the LaTeX builder, one `p{}` per column.
pub(crate) const COLUMN_SPEC: &str = "|p{1.8cm}|p{1.0cm}|p{2cm}|p{2cm}|p{2cm}|p{0.5cm}|p{5cm}|";

#[derive(Template, Debug)]
#[template(path = "params.rst", escape = "none")]
pub(crate) struct ParamsTemplate<'a> {
    pub column_spec: &'a str,
    pub header: Row<'a>,
    pub tables: Vec<TableBlock<'a>>,
}

/// One `csv-table` block.
#[derive(Debug)]
pub(crate) struct TableBlock<'a> {
    pub name: &'a str,
    pub rows: Vec<Row<'a>>,
}
