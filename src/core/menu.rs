//! Interactive menu loop.
//!
//! The roster loaded at startup lives in an explicit `MenuState` that each
//! handler receives; the loop owns it until the user exits.

use crate::config::Config;
use crate::core::log;
use crate::core::registry::{EditOutcome, add_student, added_message, edit_student};
use crate::core::roster::{export_students, load_roster};
use crate::core::session::mark_attendance;
use crate::errors::{AppError, AppResult};
use crate::models::student::{StudentKey, StudentRecord};
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub students_file: PathBuf,
    pub records: Vec<StudentRecord>,
    /// Import warnings, shown once when the menu starts.
    pub notices: Vec<String>,
}

impl MenuState {
    /// Load the roster from `students_file`.
    pub fn load(students_file: PathBuf) -> AppResult<Self> {
        let import = load_roster(&students_file)?;
        Ok(Self {
            notices: import.notices(&students_file),
            records: import.students,
            students_file,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Mark,
    Add,
    Edit,
    Export,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Mark),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Export),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    console.say("\nMENU:")?;
    console.say("1. Check attendance")?;
    console.say("2. Add student")?;
    console.say("3. Edit student")?;
    console.say("4. Export attendance")?;
    console.say("5. Exit")?;
    Ok(())
}

/// Run the menu until the user exits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
    mut state: MenuState,
) -> AppResult<MenuState> {
    for notice in std::mem::take(&mut state.notices) {
        console.warning(notice)?;
    }

    loop {
        print_menu(console)?;

        let input = match console.ask("Choose your option: ") {
            Ok(s) => s,
            Err(AppError::InputClosed) => {
                console.say("Exiting the program.")?;
                return Ok(state);
            }
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.warning("Invalid choice. Please try again.")?;
            continue;
        };

        match handle_choice(console, cfg, &mut state, choice) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(state),
            Err(AppError::InputClosed) => {
                console.say("Exiting the program.")?;
                return Ok(state);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Execute one menu action against `state`.
pub fn handle_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
    state: &mut MenuState,
    choice: MenuChoice,
) -> AppResult<Flow> {
    match choice {
        MenuChoice::Mark => {
            let report = mark_attendance(console, &mut state.records)?;
            log::record(
                cfg,
                "mark",
                "",
                &format!(
                    "{} marked, {} invalid answers (not saved)",
                    report.marked,
                    report.invalid.len()
                ),
            );
        }
        MenuChoice::Add => {
            let (first, last) = console.collect_name()?;
            add_student(&first, &last, &state.students_file)?;
            console.success(added_message(&first, &last, &state.students_file))?;
            state.records.push(StudentRecord::new(&first, &last));
            log::record(
                cfg,
                "add",
                &format!("{} {}", first, last),
                &format!("Added to {}", state.students_file.display()),
            );
        }
        MenuChoice::Edit => {
            let old_first = console.ask("Enter old first name: ")?;
            let old_last = console.ask("Enter old last name: ")?;
            let new_first = console.ask("Enter new first name: ")?;
            let new_last = console.ask("Enter new last name: ")?;
            if new_first.is_empty() || new_last.is_empty() {
                console.warning("Both new first and last names are required. Nothing changed.")?;
                return Ok(Flow::Continue);
            }

            let old = StudentKey::new(&old_first, &old_last);
            let new = StudentKey::new(&new_first, &new_last);

            let outcome = edit_student(&old, &new, &state.students_file)?;
            let (level, msg) = outcome.report(&old, &new, &state.students_file);
            console.notify(level, msg)?;

            if outcome == EditOutcome::Updated {
                if let Some(r) = state.records.iter_mut().find(|r| r.matches(&old)) {
                    r.first_name = new.first_name.clone();
                    r.last_name = new.last_name.clone();
                }
                log::record(cfg, "edit", &old.to_string(), &format!("Renamed to {}", new));
            }
        }
        MenuChoice::Export => {
            export_students(&state.records, &state.students_file)?;
            console.success(format!(
                "Attendance exported to {}",
                state.students_file.display()
            ))?;
            log::record(
                cfg,
                "export",
                &state.students_file.to_string_lossy(),
                &format!("{} students exported", state.records.len()),
            );
        }
        MenuChoice::Exit => {
            console.say("Exiting the program.")?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}
