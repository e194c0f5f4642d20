//! Status lines printed by the `paramdoc` commands.
//!
//! Written files and check results go to stdout, failures to stderr. Colour
//! is dropped automatically when the stream is not a terminal, so the
//! messages stay grep-able in documentation build logs.
//!
//! ```ignore
//! output::success("Wrote params.rst (3 tables, 41 parameters)");
//! output::warning("Radio.freq: unknown type 'uint24'");
//! output::label("Project", "CSP Client");
//! ```

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ERROR, HEADER, HINT, LABEL, SUCCESS, WARNING};

/// A file was written or a check passed.
pub(crate) fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{SUCCESS}✓{SUCCESS:#} {msg}").ok();
}

/// The run failed; goes to stderr.
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// A non-fatal finding, e.g. an unregistered type tag.
pub(crate) fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Bold heading above a listing.
pub(crate) fn header(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

/// Indented `Name: value` line describing generated output.
pub(crate) fn label(name: impl std::fmt::Display, value: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {LABEL}{name}:{LABEL:#} {value}").ok();
}

/// Dimmed follow-up suggestion after a warning.
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}

pub(crate) fn plain(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{msg}").ok();
}
