//! Parameter table rendering (`paramdoc params`, also the default command).

use std::path::PathBuf;

use crate::cli_config::CliConfig;
use crate::output;

pub(crate) fn handle_params_command(
    cli_config: &CliConfig,
    input: Option<PathBuf>,
    output_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = cli_config.input_path(input);
    let output_path = cli_config.output_path(output_path);
    tracing::debug!(?input, output = ?output_path, "Rendering parameter tables");

    let summary = paramdoc::generate(&input, &output_path)?;

    output::success(format!(
        "Wrote {} ({} tables, {} parameters)",
        output_path.display(),
        summary.tables,
        summary.parameters
    ));
    Ok(())
}
