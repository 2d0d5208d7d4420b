use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log;
use crate::core::registry::{add_student, added_message};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Reject names that are empty once trimmed.
pub(crate) fn require_name(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidName(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Append a student to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        first_name,
        last_name,
    } = cmd
    {
        let first = require_name(first_name, "first name")?;
        let last = require_name(last_name, "last name")?;
        let roster = cfg.students_path();

        add_student(&first, &last, &roster)?;
        success(added_message(&first, &last, &roster));

        log::record(
            cfg,
            "add",
            &format!("{} {}", first, last),
            &format!("Added to {}", roster.display()),
        );
    }

    Ok(())
}
