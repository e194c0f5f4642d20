//! Type registry listing (`paramdoc types`).

use paramdoc::ParamType;

use crate::output;

pub(crate) fn handle_types_command() -> anyhow::Result<()> {
    output::header("Registered parameter types:");
    for t in ParamType::ALL {
        let width = t
            .width()
            .map_or_else(|| "variable".to_string(), |w| format!("{w} byte(s)"));
        output::plain(format!("  {:<8} {:<8} {}", t.tag(), t.display_name(), width));
    }
    Ok(())
}
