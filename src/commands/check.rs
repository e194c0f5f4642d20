//! Type tag checking (`paramdoc check`).
//!
//! Rendering accepts any type string. This command reports parameters whose
//! type is not in the registry, and fails if there are any.

use std::path::PathBuf;

use paramdoc::Document;

use crate::cli_config::CliConfig;
use crate::output;

pub(crate) fn handle_check_command(
    cli_config: &CliConfig,
    input: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = cli_config.input_path(input);
    let document = Document::load(&input)?;
    let issues = document.type_issues();

    if issues.is_empty() {
        output::success(format!(
            "{}: {} tables, {} parameters, all types registered",
            input.display(),
            document.tables.len(),
            document.parameter_count()
        ));
        return Ok(());
    }

    for issue in &issues {
        output::warning(issue);
    }
    output::hint("Run 'paramdoc types' to list the registered type tags.");
    anyhow::bail!(
        "{} parameter(s) in {} use unregistered types",
        issues.len(),
        input.display()
    )
}
