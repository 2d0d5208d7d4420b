//! Roster import/export.
//!
//! The roster is a headerless CSV file, one student per line:
//! `first_name,last_name[,present]` with `present` rendered as `yes`/`no`.
//! A header row (written by the registry mutators) is tolerated on read.
//!
//! Every physical line is parsed on its own, so a stray quote or a line in a
//! foreign encoding only costs that line.

use crate::errors::AppResult;
use crate::models::student::{StudentRecord, presence_from_str, presence_to_str};
use crate::ui::messages::warning;
use csv::{ByteRecord, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Column names of the header row used by Add/Edit.
pub const HEADER: [&str; 3] = ["first_name", "last_name", "present"];

/// True when `record` is the `first_name,last_name,present` header.
fn is_header(record: &StringRecord) -> bool {
    record.len() == HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

/// Reader for a single roster line: no header, variable record length,
/// whitespace around each field stripped.
fn line_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

/// Writer shared by every roster operation: `\n` line endings, fields quoted
/// only when they contain a delimiter, quote or newline.
pub(crate) fn roster_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// One non-empty physical line of a roster file.
pub(crate) struct RosterLine<'a> {
    /// 1-based line number in the file.
    pub(crate) number: usize,
    /// The line as stored, without its terminator.
    pub(crate) raw: &'a [u8],
    /// Parsed fields; `None` when the line is not valid UTF-8.
    pub(crate) fields: Option<StringRecord>,
}

/// Split roster content into lines and parse each one. Blank lines and a
/// leading header row are dropped.
pub(crate) fn roster_lines(content: &[u8]) -> AppResult<Vec<RosterLine<'_>>> {
    let mut lines = Vec::new();

    for (idx, line) in content.split(|b| *b == b'\n').enumerate() {
        let raw = line.strip_suffix(b"\r").unwrap_or(line);
        if raw.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let fields = parse_line(raw)?;
        if lines.is_empty() && fields.as_ref().is_some_and(is_header) {
            continue;
        }

        lines.push(RosterLine {
            number: idx + 1,
            raw,
            fields,
        });
    }

    Ok(lines)
}

fn parse_line(raw: &[u8]) -> AppResult<Option<StringRecord>> {
    let mut rdr = line_reader(raw);
    let mut record = ByteRecord::new();
    rdr.read_byte_record(&mut record)?;

    Ok(StringRecord::from_byte_record(record).ok().map(|mut r| {
        r.trim();
        r
    }))
}

/// What an import produced, including the lines it had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterImport {
    pub students: Vec<StudentRecord>,
    /// 1-based numbers of the lines that were skipped.
    pub skipped: Vec<usize>,
    /// The roster file does not exist.
    pub missing: bool,
}

impl RosterImport {
    /// Warnings to show the user for this import.
    pub fn notices(&self, path: &Path) -> Vec<String> {
        let mut out = Vec::new();
        if self.missing {
            out.push(format!("The file '{}' was not found.", path.display()));
        }
        for line in &self.skipped {
            out.push(format!("Skipping malformed line {} in the file.", line));
        }
        out
    }
}

/// Parse roster content. Lines that do not have 2 or 3 fields, or are not
/// valid UTF-8, are recorded in `skipped`.
pub fn parse_roster(content: &[u8]) -> AppResult<RosterImport> {
    let mut import = RosterImport::default();

    for line in roster_lines(content)? {
        match line.fields {
            Some(record) if record.len() == 2 => {
                import
                    .students
                    .push(StudentRecord::new(&record[0], &record[1]));
            }
            Some(record) if record.len() == 3 => {
                import.students.push(StudentRecord::with_presence(
                    &record[0],
                    &record[1],
                    presence_from_str(&record[2]),
                ));
            }
            _ => import.skipped.push(line.number),
        }
    }

    Ok(import)
}

/// Read the roster at `path` without printing anything.
pub fn load_roster<P: AsRef<Path>>(path: P) -> AppResult<RosterImport> {
    match fs::read(path.as_ref()) {
        Ok(content) => parse_roster(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RosterImport {
            missing: true,
            ..RosterImport::default()
        }),
        Err(e) => Err(e.into()),
    }
}

/// Load students from `path`, printing a warning for a missing file and for
/// every skipped line.
pub fn import_students<P: AsRef<Path>>(path: P) -> AppResult<Vec<StudentRecord>> {
    let path = path.as_ref();
    let import = load_roster(path)?;
    for notice in import.notices(path) {
        warning(notice);
    }
    Ok(import.students)
}

/// Parse roster records from any reader, warning about skipped lines.
pub fn read_students<R: Read>(mut reader: R) -> AppResult<Vec<StudentRecord>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let import = parse_roster(&content)?;
    for notice in import.notices(Path::new("")) {
        warning(notice);
    }
    Ok(import.students)
}

/// Overwrite `path` with the given students (no header row).
pub fn export_students<P: AsRef<Path>>(students: &[StudentRecord], path: P) -> AppResult<()> {
    let file = File::create(path.as_ref())?;
    write_students(students, file)
}

/// Serialize students as roster lines into any writer.
pub fn write_students<W: Write>(students: &[StudentRecord], writer: W) -> AppResult<()> {
    let mut wtr = roster_writer(writer);

    for s in students {
        wtr.write_record([
            s.first_name.as_str(),
            s.last_name.as_str(),
            presence_to_str(s.present),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
