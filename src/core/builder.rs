//! Guided attendance builder: collects a brand-new attendance sheet through
//! prompts, independent of the roster loaded by the menu.

use crate::core::roster::export_students;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceSheet;
use crate::models::student::StudentRecord;
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use std::path::Path;

const PRESENCE_PROMPT: &str = "Was the student present? (yes/no): ";
const PRESENCE_INVALID: &str = "Invalid output. Please try again.";

/// Ask for presence until the answer is `yes` or `no`.
fn ask_presence<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<bool> {
    console.ask_until_yes_no(PRESENCE_PROMPT, PRESENCE_INVALID)
}

/// Collect students one by one, optionally save them to `save_path`, print
/// the resulting list and return it.
pub fn manage_attendance<R: BufRead, W: Write, P: AsRef<Path>>(
    console: &mut Console<R, W>,
    save_path: P,
) -> AppResult<AttendanceSheet> {
    let mut sheet = AttendanceSheet::new();

    loop {
        let (first, last) = console.collect_name()?;
        let present = ask_presence(console)?;
        sheet.insert(StudentRecord::with_presence(&first, &last, present));

        let more = console.ask("Want to add another student? (yes/no): ")?;
        if more.to_lowercase() != "yes" {
            break;
        }
    }

    let save = console.ask("Do you want to save the attendance list to a file? (yes/no): ")?;
    if save.to_lowercase() == "yes" {
        let path = save_path.as_ref();
        export_students(&sheet.records(), path)?;
        console.success(format!("Attendance list saved to {}", path.display()))?;
    }

    print_sheet(console, &sheet)?;
    Ok(sheet)
}

pub fn print_sheet<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    sheet: &AttendanceSheet,
) -> AppResult<()> {
    console.say("\nATTENDANCE LIST:")?;
    for (id, s) in sheet.iter() {
        let status = if s.present { "Present" } else { "Absent" };
        console.say(format!(
            "ID: {}, Name: {} {}, Status: {}",
            id, s.first_name, s.last_name, status
        ))?;
    }
    Ok(())
}

/// Ask again for the presence of entry `id` of `sheet`.
/// Returns `false` when no entry has that id.
pub fn edit_attendance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    sheet: &mut AttendanceSheet,
    id: usize,
) -> AppResult<bool> {
    let Some(name) = sheet.get(id).map(StudentRecord::full_name) else {
        console.warning("Student not found.")?;
        return Ok(false);
    };

    console.say(format!("Editing attendance for: {}", name))?;
    let present = ask_presence(console)?;
    if let Some(entry) = sheet.get_mut(id) {
        entry.present = present;
    }
    console.success("Attendance updated successfully.")?;
    Ok(true)
}
