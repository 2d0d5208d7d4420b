#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::config::Config;
use rattendance::ui::prompt::Console;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointing at a private directory so the
/// config file and the internal log never touch the real user profile.
pub fn rat(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a unique temporary file path inside the system temp dir and
/// remove any existing file
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create an empty temporary directory used as HOME
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Write a roster file with the given content and return its path
pub fn roster_with(name: &str, content: &str) -> String {
    let path = temp_file(name, "csv");
    fs::write(&path, content).expect("write roster");
    path
}

/// Config pointing at the given roster, logging into a private file
pub fn test_config(name: &str, roster: &str) -> Config {
    Config {
        students_file: roster.to_string(),
        log_file: temp_file(&format!("{}_log", name), "csv"),
        separator_char: "-".to_string(),
    }
}

/// Console fed by a scripted input, capturing its output
pub fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

/// Everything the console printed so far
pub fn transcript(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("utf8 output")
}
