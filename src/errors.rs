//! Unified application error type.
//! All modules (core, cli, config, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Students file not found: {0}")]
    StudentsFileNotFound(String),

    #[error("Invalid student name: {0}")]
    InvalidName(String),

    #[error("No student with id {0}")]
    StudentNotFound(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Compression error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type AppResult<T> = Result<T, AppError>;
