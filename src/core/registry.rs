//! Student registry mutators: append a student, rename a student.
//! Both re-open the roster file and leave it closed on return. Neither
//! prints anything; callers report the outcome on their own channel.

use crate::core::roster::{HEADER, roster_lines, roster_writer};
use crate::errors::AppResult;
use crate::models::student::{StudentKey, presence_to_str};
use crate::ui::messages::Level;
use csv::StringRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Result of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    NotFound,
    FileMissing,
}

impl EditOutcome {
    /// Message (and its level) reporting this outcome to the user.
    pub fn report(&self, old: &StudentKey, new: &StudentKey, path: &Path) -> (Level, String) {
        match self {
            EditOutcome::Updated => (
                Level::Success,
                format!("Student: {} has been updated to {}.", old, new),
            ),
            EditOutcome::NotFound => (Level::Info, "The student hasn't been found.".to_string()),
            EditOutcome::FileMissing => (
                Level::Warning,
                format!("The file '{}' does not exist.", path.display()),
            ),
        }
    }
}

/// Confirmation shown after a successful Add.
pub fn added_message(first_name: &str, last_name: &str, path: &Path) -> String {
    format!(
        "Student {} {} was added to {}.",
        first_name,
        last_name,
        path.display()
    )
}

/// Append a student (absent) to the roster at `path`.
///
/// The file is created with a header row when it does not exist yet; an
/// existing file is never truncated.
pub fn add_student<P: AsRef<Path>>(first_name: &str, last_name: &str, path: P) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path.as_ref())?;

    let len = file.metadata()?.len();

    // a hand-edited file may lack the final newline
    if len > 0 && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut wtr = roster_writer(&mut file);
    if len == 0 {
        wtr.write_record(HEADER)?;
    }
    wtr.write_record([first_name, last_name, presence_to_str(false)])?;
    wtr.flush()?;
    Ok(())
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Rename the first student matching `old` to `new` and rewrite the file with
/// a header row, whether or not a match was found.
///
/// Every other line is written back byte for byte, including lines that are
/// malformed or not valid UTF-8. The `present` column of the renamed row is
/// left as it was.
pub fn edit_student<P: AsRef<Path>>(
    old: &StudentKey,
    new: &StudentKey,
    path: P,
) -> AppResult<EditOutcome> {
    let path = path.as_ref();

    let content = match fs::read(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(EditOutcome::FileMissing),
        Err(e) => return Err(e.into()),
    };

    let lines = roster_lines(&content)?;
    let target = lines
        .iter()
        .position(|l| l.fields.as_ref().is_some_and(|r| row_matches(r, old)));

    let mut out = Vec::with_capacity(content.len());
    {
        let mut wtr = roster_writer(&mut out);
        wtr.write_record(HEADER)?;
        wtr.flush()?;
    }
    for (idx, line) in lines.iter().enumerate() {
        match &line.fields {
            Some(row) if Some(idx) == target => {
                let mut wtr = roster_writer(&mut out);
                wtr.write_record(&rename_row(row, new))?;
                wtr.flush()?;
            }
            _ => {
                out.write_all(line.raw)?;
                out.write_all(b"\n")?;
            }
        }
    }
    fs::write(path, out)?;

    Ok(if target.is_some() {
        EditOutcome::Updated
    } else {
        EditOutcome::NotFound
    })
}

fn row_matches(row: &StringRecord, key: &StudentKey) -> bool {
    row.len() >= 2 && row[0] == key.first_name && row[1] == key.last_name
}

fn rename_row(row: &StringRecord, new: &StudentKey) -> StringRecord {
    let mut fields: Vec<&str> = row.iter().collect();
    fields[0] = new.first_name.as_str();
    fields[1] = new.last_name.as_str();
    StringRecord::from(fields)
}

/// Create the roster with just the header row if it does not exist yet.
/// Returns `true` when a new file was written.
pub fn init_roster<P: AsRef<Path>>(path: P) -> AppResult<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = roster_writer(File::create(path)?);
    wtr.write_record(HEADER)?;
    wtr.flush()?;
    Ok(true)
}
