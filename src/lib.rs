//! Parameter table documentation for Sphinx manuals.
//!
//! Reads a JSON description of parameter tables and renders it as a
//! reStructuredText document of `csv-table` blocks. A companion Sphinx
//! `conf.py` stub can be generated alongside it.
//!
//! ```text
//! tables/soft_tables.json  →  Document::load  →  render (Askama)  →  params.rst
//! ```
//!
//! # Modules
//!
//! - [`model`] — Input document parsing and the static parameter type registry
//! - [`render`] — Parameter table renderer and output file writer
//! - [`sphinx`] — Sphinx `conf.py` companion configuration
//! - [`error`] — Error taxonomy shared by all operations

pub mod error;
pub mod model;
pub mod render;
pub mod sphinx;

pub use error::{DocgenError, DocgenResult, ErrorKind};
pub use model::{Document, ParamType, Parameter, Table, TypeIssue};
pub use render::{generate, render, write_document, Summary};
pub use sphinx::SphinxConf;

/// Input path used when nothing else is configured.
pub const DEFAULT_INPUT: &str = "tables/soft_tables.json";

/// Output path for the rendered parameter document.
pub const DEFAULT_OUTPUT: &str = "params.rst";

/// Output path for the generated Sphinx configuration stub.
pub const DEFAULT_CONF_OUTPUT: &str = "conf.py";
