//! Sphinx `conf.py` companion configuration.
//!
//! The generated stub sets the project metadata consumed by the shared
//! `conf_template.py`, executes that template, and excludes library
//! directories from the documentation build.

use std::fmt;
use std::path::Path;

use askama::Template;
use serde::Deserialize;

use crate::error::DocgenResult;
use crate::render::write_document;

/// Project settings written into `conf.py`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SphinxConf {
    /// Folder holding the shared `conf_template.py`.
    pub templates_folder: String,
    pub build_project_name: String,
    pub project_name: String,
    /// Prefix of the generated PDF file name.
    pub filename_pdf: String,
    pub copyright_name: String,
    pub company_name: String,
    pub front_name: String,
    pub front_doc_type: String,
    pub front_doc_category: String,
    pub front_image: String,
    /// Glob patterns excluded from the documentation build.
    pub exclude_patterns: Vec<String>,
}

impl Default for SphinxConf {
    fn default() -> Self {
        Self {
            templates_folder: "/usr/local/share/gs_templates".to_string(),
            build_project_name: "csp-client".to_string(),
            project_name: "CSP Client".to_string(),
            filename_pdf: "gs-man-csp-client-".to_string(),
            copyright_name: "2016, GomSpace".to_string(),
            company_name: "GomSpace".to_string(),
            front_name: "GomSpace".to_string(),
            front_doc_type: "Manual".to_string(),
            front_doc_category: "Software Documentation".to_string(),
            front_image: "csp_client_front".to_string(),
            exclude_patterns: [
                "clients",
                "lib/libcsp/**",
                "lib/libparam/**",
                "lib/liblog/**",
                "lib/libgosh/**",
                "lib/libftp/**",
                "lib/libutil/**",
                "lib/libhk/**",
                "lib/libfp/**",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Python single-quoted string literal.
#[derive(Debug, Clone, Copy)]
struct PyStr<'a>(&'a str);

impl fmt::Display for PyStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\'' => f.write_str("\\'")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("'")
    }
}

#[derive(Template, Debug)]
#[template(path = "conf.py", escape = "none")]
struct ConfPyTemplate<'a> {
    templates_folder: PyStr<'a>,
    build_project_name: PyStr<'a>,
    project_name: PyStr<'a>,
    filename_pdf: PyStr<'a>,
    copyright_name: PyStr<'a>,
    company_name: PyStr<'a>,
    front_name: PyStr<'a>,
    front_doc_type: PyStr<'a>,
    front_doc_category: PyStr<'a>,
    front_image: PyStr<'a>,
    exclude_patterns: Vec<PyStr<'a>>,
}

impl SphinxConf {
    /// Render the `conf.py` stub.
    pub fn render(&self) -> DocgenResult<String> {
        let template = ConfPyTemplate {
            templates_folder: PyStr(&self.templates_folder),
            build_project_name: PyStr(&self.build_project_name),
            project_name: PyStr(&self.project_name),
            filename_pdf: PyStr(&self.filename_pdf),
            copyright_name: PyStr(&self.copyright_name),
            company_name: PyStr(&self.company_name),
            front_name: PyStr(&self.front_name),
            front_doc_type: PyStr(&self.front_doc_type),
            front_doc_category: PyStr(&self.front_doc_category),
            front_image: PyStr(&self.front_image),
            exclude_patterns: self.exclude_patterns.iter().map(|p| PyStr(p)).collect(),
        };
        Ok(template.render()?)
    }

    /// Render and write the stub to `path`.
    pub fn write(&self, path: &Path) -> DocgenResult<()> {
        let rendered = self.render()?;
        write_document(path, &rendered)?;
        tracing::info!(?path, project = %self.project_name, "Wrote Sphinx configuration");
        Ok(())
    }
}
