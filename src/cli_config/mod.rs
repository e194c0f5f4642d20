//! CLI configuration for input/output paths and the Sphinx stub.
//!
//! Every field is optional. Command-line flags take precedence over the
//! file, and the file over built-in defaults.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use std::path::PathBuf;

use paramdoc::SphinxConf;
use serde::Deserialize;

/// Contents of `.paramdoc.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Parameter tables JSON. Default: `tables/soft_tables.json`.
    pub input: Option<PathBuf>,

    /// Rendered reStructuredText. Default: `params.rst`.
    pub output: Option<PathBuf>,

    /// Generated Sphinx configuration. Default: `conf.py`.
    pub conf_output: Option<PathBuf>,

    /// Settings for the generated `conf.py`.
    #[serde(default)]
    pub sphinx: SphinxConf,
}

impl CliConfig {
    pub fn input_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(paramdoc::DEFAULT_INPUT))
    }

    pub fn output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(paramdoc::DEFAULT_OUTPUT))
    }

    pub fn conf_output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.conf_output.clone())
            .unwrap_or_else(|| PathBuf::from(paramdoc::DEFAULT_CONF_OUTPUT))
    }
}
