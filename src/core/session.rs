//! Interactive attendance marking over an in-memory roster.
//! Nothing here touches the filesystem; callers export afterwards if needed.

use crate::errors::{AppError, AppResult};
use crate::models::student::StudentRecord;
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};

const INVALID_ANSWER: &str = "Invalid input, please enter 'yes' or 'no'.";

/// What a marking pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkReport {
    /// Records whose flag was set from a valid answer.
    pub marked: usize,
    /// 1-based ids of the records that received an invalid answer.
    pub invalid: Vec<usize>,
}

/// Ask, once per student, whether they are present today.
///
/// An invalid answer leaves the flag untouched and moves on to the next
/// student without asking again.
pub fn mark_attendance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    students: &mut [StudentRecord],
) -> AppResult<MarkReport> {
    let mut report = MarkReport::default();

    console.say("Checking attendance:")?;
    for (idx, student) in students.iter_mut().enumerate() {
        console.say(format!(
            "{} is currently {}.",
            student.full_name(),
            student.status_str()
        ))?;

        let prompt = format!("Is {} present today? (yes/no): ", student.full_name());
        match console.ask_yes_no(&prompt, INVALID_ANSWER)? {
            Some(present) => {
                student.present = present;
                report.marked += 1;
            }
            None => report.invalid.push(idx + 1),
        }
    }

    Ok(report)
}

/// Re-mark a single student addressed by its 1-based position in `students`.
/// Keeps asking until a valid answer is given.
pub fn mark_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    students: &mut [StudentRecord],
    id: usize,
) -> AppResult<()> {
    let student = id
        .checked_sub(1)
        .and_then(|idx| students.get_mut(idx))
        .ok_or(AppError::StudentNotFound(id))?;

    console.say(format!(
        "{} is currently {}.",
        student.full_name(),
        student.status_str()
    ))?;

    let prompt = format!("Is {} present today? (yes/no): ", student.full_name());
    student.present = console.ask_until_yes_no(&prompt, INVALID_ANSWER)?;

    console.success(format!(
        "{} marked {}.",
        student.full_name(),
        student.status_str()
    ))?;
    Ok(())
}
