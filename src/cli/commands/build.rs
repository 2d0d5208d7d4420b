use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::builder::manage_attendance;
use crate::core::log;
use crate::errors::AppResult;
use crate::ui::prompt::Console;
use crate::utils::path::expand_tilde;

/// Guided creation of a new attendance list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Build { out } = cmd {
        let target = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.students_path());

        let mut console = Console::stdio();
        let sheet = manage_attendance(&mut console, &target)?;

        log::record(
            cfg,
            "build",
            &target.to_string_lossy(),
            &format!("{} students collected", sheet.len()),
        );
    }

    Ok(())
}
