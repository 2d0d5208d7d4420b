use crate::cli::commands::add::require_name;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log;
use crate::core::registry::{EditOutcome, edit_student};
use crate::errors::AppResult;
use crate::models::student::StudentKey;
use crate::ui::messages::emit;

/// Rename a student. A missing student or file is reported, not failed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        old_first_name,
        old_last_name,
        new_first_name,
        new_last_name,
    } = cmd
    {
        let old = StudentKey::new(old_first_name.trim(), old_last_name.trim());
        let new = StudentKey::new(
            &require_name(new_first_name, "new first name")?,
            &require_name(new_last_name, "new last name")?,
        );

        let roster = cfg.students_path();
        let outcome = edit_student(&old, &new, &roster)?;
        let (level, msg) = outcome.report(&old, &new, &roster);
        emit(level, msg);

        if outcome == EditOutcome::Updated {
            log::record(cfg, "edit", &old.to_string(), &format!("Renamed to {}", new));
        }
    }

    Ok(())
}
