//! Sphinx configuration stub generation (`paramdoc conf`).

use std::path::PathBuf;

use crate::cli_config::CliConfig;
use crate::output;

pub(crate) fn handle_conf_command(
    cli_config: &CliConfig,
    output_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let output_path = cli_config.conf_output_path(output_path);
    let sphinx = &cli_config.sphinx;

    sphinx.write(&output_path)?;

    output::success(format!("Wrote {}", output_path.display()));
    output::label("Project", &sphinx.project_name);
    output::label("Excluded", sphinx.exclude_patterns.join(", "));
    Ok(())
}
