//! Internal audit log: one CSV line per mutating operation.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append a line to the audit log.
pub fn ttlog(cfg: &Config, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = Path::new(&cfg.log_file);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    wtr.serialize(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Like `ttlog`, but a failure only prints a warning.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(cfg, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read every entry of the audit log. A missing log is an empty log.
pub fn load_entries(cfg: &Config) -> AppResult<Vec<LogEntry>> {
    let path = Path::new(&cfg.log_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: LogEntry = result?;
        entries.push(entry);
    }
    Ok(entries)
}

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "mark" => Colour::Cyan,
        "export" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = load_entries(cfg)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let painted = color_for_operation(&e.operation).paint(e.operation.as_str());
                let op_target = if e.target.is_empty() {
                    painted.to_string()
                } else {
                    format!("{} ({})", painted, e.target)
                };
                (i + 1, date, op_target, e.message)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");
        for (id, date, op_target, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
