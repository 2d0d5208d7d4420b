use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::import_students;
use crate::errors::AppResult;
use crate::models::student::StudentRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_presence, dim};
use crate::utils::table::{Column, Table};

/// Build the roster table. Ids are positions in the file, starting at 1,
/// and are the ids accepted by `mark --student`.
pub fn roster_table(students: &[StudentRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("First name"),
        Column::new("Last name"),
        Column::new("Status"),
    ]);

    for (i, s) in students.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            s.first_name.clone(),
            s.last_name.clone(),
            s.status_str().to_string(),
        ]);
    }

    table
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let roster = cfg.students_path();
        let students = import_students(&roster)?;

        if students.is_empty() {
            info(format!("No students in {}", roster.display()));
            return Ok(());
        }

        header(format!("Students in {}", roster.display()));
        print!("{}", roster_table(&students).render(&cfg.separator_char));

        let present = students.iter().filter(|s| s.present).count();
        let absent = students.len() - present;
        println!(
            "\n{} {}  {} {}  {}",
            colorize_presence("present:", true),
            present,
            colorize_presence("absent:", false),
            absent,
            dim(&format!("({} total)", students.len()))
        );
    }

    Ok(())
}
