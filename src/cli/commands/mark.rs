use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log;
use crate::core::roster::{export_students, import_students};
use crate::core::session::{mark_attendance, mark_student};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::Console;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { student, no_save } = cmd {
        let roster = cfg.students_path();
        let mut students = import_students(&roster)?;

        if students.is_empty() {
            warning(format!("No students to mark in {}", roster.display()));
            return Ok(());
        }

        let mut console = Console::stdio();
        let summary = match student {
            Some(id) => {
                mark_student(&mut console, &mut students, *id)?;
                format!("Student #{} marked", id)
            }
            None => {
                let report = mark_attendance(&mut console, &mut students)?;
                if !report.invalid.is_empty() {
                    warning(format!(
                        "{} answer(s) were invalid, those students were left unchanged",
                        report.invalid.len()
                    ));
                }
                format!(
                    "{} marked, {} invalid answers",
                    report.marked,
                    report.invalid.len()
                )
            }
        };

        if *no_save {
            info("Attendance not saved (--no-save).");
            return Ok(());
        }

        export_students(&students, &roster)?;
        success(format!("Attendance saved to {}", roster.display()));
        log::record(cfg, "mark", &roster.to_string_lossy(), &summary);
    }

    Ok(())
}
