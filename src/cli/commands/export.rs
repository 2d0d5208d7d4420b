use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fs_utils::ensure_writable;
use crate::core::log;
use crate::core::roster::{export_students, import_students};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::prompt::Console;
use crate::utils::path::expand_tilde;

/// Re-write the roster (or a copy of it) in the canonical format.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { out, force } = cmd {
        let roster = cfg.students_path();
        let students = import_students(&roster)?;

        let target = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| roster.clone());

        if target != roster {
            let mut console = Console::stdio();
            if !ensure_writable(&mut console, &target, *force)? {
                return Ok(());
            }
        }

        export_students(&students, &target)?;
        success(format!(
            "{} students exported to {}",
            students.len(),
            target.display()
        ));

        log::record(
            cfg,
            "export",
            &target.to_string_lossy(),
            &format!("{} students exported", students.len()),
        );
    }

    Ok(())
}
