use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rat, roster_with, temp_file, temp_home};

#[test]
fn test_init_creates_roster_with_header() {
    let home = temp_home("cli_init");
    let roster = temp_file("cli_init", "csv");

    rat(&home)
        .args(["--roster", &roster, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(
        fs::read_to_string(&roster).unwrap(),
        "first_name,last_name,present\n"
    );
    // test mode never writes the config file
    assert!(!Path::new(&home).join(".rattendance/rattendance.conf").exists());
}

#[test]
fn test_init_writes_config_file() {
    let home = temp_home("cli_init_config");
    let roster = temp_file("cli_init_config", "csv");

    rat(&home)
        .args(["--roster", &roster, "init"])
        .assert()
        .success();

    let conf = fs::read_to_string(Path::new(&home).join(".rattendance/rattendance.conf"))
        .expect("config written");
    assert!(conf.contains("students_file"));
    assert!(conf.contains(&roster));

    // later commands pick the roster up from the config
    rat(&home)
        .args(["add", "Amy", "Pond"])
        .assert()
        .success();
    assert!(fs::read_to_string(&roster).unwrap().contains("Amy,Pond,no"));
}

#[test]
fn test_add_and_list() {
    let home = temp_home("cli_add_list");
    let roster = temp_file("cli_add_list", "csv");

    rat(&home)
        .args(["--roster", &roster, "add", "John", "Doe"])
        .assert()
        .success()
        .stdout(contains("Student John Doe was added to"));

    rat(&home)
        .args(["--roster", &roster, "add", "Jane", "Smith"])
        .assert()
        .success();

    rat(&home)
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("John").and(contains("Smith")))
        .stdout(contains("absent"))
        .stdout(contains("(2 total)"));
}

#[test]
fn test_add_rejects_blank_name() {
    let home = temp_home("cli_add_blank");
    let roster = temp_file("cli_add_blank", "csv");

    rat(&home)
        .args(["--roster", &roster, "add", "  ", "Doe"])
        .assert()
        .failure()
        .stderr(contains("Invalid student name"));

    assert!(!Path::new(&roster).exists());
}

#[test]
fn test_edit_reports_outcome() {
    let home = temp_home("cli_edit");
    let roster = roster_with("cli_edit", "John,Doe,yes\n");

    rat(&home)
        .args(["--roster", &roster, "edit", "John", "Doe", "Jack", "Doe"])
        .assert()
        .success()
        .stdout(contains("has been updated to Jack Doe"));

    rat(&home)
        .args(["--roster", &roster, "edit", "John", "Doe", "Jim", "Doe"])
        .assert()
        .success()
        .stdout(contains("The student hasn't been found."));

    assert_eq!(
        fs::read_to_string(&roster).unwrap(),
        "first_name,last_name,present\nJack,Doe,yes\n"
    );
}

#[test]
fn test_edit_missing_file_is_not_an_error() {
    let home = temp_home("cli_edit_missing");
    let roster = temp_file("cli_edit_missing", "csv");

    rat(&home)
        .args(["--roster", &roster, "edit", "John", "Doe", "Jack", "Doe"])
        .assert()
        .success()
        .stdout(contains("does not exist"));

    assert!(!Path::new(&roster).exists());
}

#[test]
fn test_mark_saves_answers() {
    let home = temp_home("cli_mark");
    let roster = roster_with("cli_mark", "John,Doe\nJane,Smith,yes\n");

    rat(&home)
        .args(["--roster", &roster, "mark"])
        .write_stdin("yes\nno\n")
        .assert()
        .success()
        .stdout(contains("Attendance saved to"));

    assert_eq!(
        fs::read_to_string(&roster).unwrap(),
        "John,Doe,yes\nJane,Smith,no\n"
    );
}

#[test]
fn test_mark_no_save_leaves_file() {
    let home = temp_home("cli_mark_no_save");
    let roster = roster_with("cli_mark_no_save", "John,Doe,no\n");

    rat(&home)
        .args(["--roster", &roster, "mark", "--no-save"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("not saved"));

    assert_eq!(fs::read_to_string(&roster).unwrap(), "John,Doe,no\n");
}

#[test]
fn test_mark_single_student() {
    let home = temp_home("cli_mark_single");
    let roster = roster_with("cli_mark_single", "John,Doe,no\nJane,Smith,no\n");

    rat(&home)
        .args(["--roster", &roster, "mark", "--student", "2"])
        .write_stdin("maybe\nyes\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&roster).unwrap(),
        "John,Doe,no\nJane,Smith,yes\n"
    );

    rat(&home)
        .args(["--roster", &roster, "mark", "--student", "9"])
        .write_stdin("yes\n")
        .assert()
        .failure()
        .stderr(contains("No student with id 9"));
}

#[test]
fn test_export_to_other_file() {
    let home = temp_home("cli_export");
    let roster = roster_with("cli_export", "first_name,last_name,present\nJohn,Doe,True\n");
    let out = temp_file("cli_export_out", "csv");

    rat(&home)
        .args(["--roster", &roster, "export", "--out", &out])
        .assert()
        .success()
        .stdout(contains("1 students exported"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "John,Doe,yes\n");
}

#[test]
fn test_export_asks_before_overwriting() {
    let home = temp_home("cli_export_overwrite");
    let roster = roster_with("cli_export_overwrite", "John,Doe,yes\n");
    let out = roster_with("cli_export_overwrite_out", "keep me\n");

    rat(&home)
        .args(["--roster", &roster, "export", "--out", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me\n");

    rat(&home)
        .args(["--roster", &roster, "export", "--out", &out, "--force"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "John,Doe,yes\n");
}

#[test]
fn test_build_saves_new_list() {
    let home = temp_home("cli_build");
    let out = temp_file("cli_build", "csv");

    rat(&home)
        .args(["build", "--out", &out])
        .write_stdin("Amy\nPond\nyes\nno\nyes\n")
        .assert()
        .success()
        .stdout(contains("ID: 1, Name: Amy Pond, Status: Present"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "Amy,Pond,yes\n");
}

#[test]
fn test_menu_runs_without_subcommand() {
    let home = temp_home("cli_menu");
    let roster = roster_with("cli_menu", "John,Doe\n");

    rat(&home)
        .args(["--roster", &roster])
        .write_stdin("1\nyes\n4\n5\n")
        .assert()
        .success()
        .stdout(contains("MENU:"))
        .stdout(contains("Exiting the program."));

    assert_eq!(fs::read_to_string(&roster).unwrap(), "John,Doe,yes\n");
}

#[test]
fn test_menu_on_missing_roster_starts_empty() {
    let home = temp_home("cli_menu_missing");
    let roster = temp_file("cli_menu_missing", "csv");

    rat(&home)
        .args(["--roster", &roster])
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(contains("was not found"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let home = temp_home("cli_backup");
    let roster = roster_with("cli_backup", "John,Doe,yes\n");
    let dest = temp_file("cli_backup_copy", "csv");
    let zip = temp_file("cli_backup_copy", "zip");

    rat(&home)
        .args(["--roster", &roster, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "John,Doe,yes\n");

    rat(&home)
        .args(["--roster", &roster, "backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success();
    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_backup_without_roster_fails() {
    let home = temp_home("cli_backup_missing");
    let roster = temp_file("cli_backup_missing", "csv");
    let dest = temp_file("cli_backup_missing_copy", "csv");

    rat(&home)
        .args(["--roster", &roster, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("Students file not found"));
}

#[test]
fn test_log_records_operations() {
    let home = temp_home("cli_log");
    let roster = temp_file("cli_log", "csv");

    rat(&home)
        .args(["--roster", &roster, "add", "John", "Doe"])
        .assert()
        .success();
    rat(&home)
        .args(["--roster", &roster, "edit", "John", "Doe", "Jack", "Doe"])
        .assert()
        .success();

    rat(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("John Doe"))
        .stdout(contains("Renamed to Jack Doe"));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = temp_home("cli_config");

    rat(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("students_file: students.csv"))
        .stdout(contains("separator_char"));
}

#[test]
fn test_config_print_shows_resolved_roster() {
    let home = temp_home("cli_config_paths");
    let roster = temp_file("cli_config_paths", "csv");

    rat(&home)
        .args(["--roster", &roster, "config", "--print"])
        .assert()
        .success()
        .stdout(contains(format!("Roster   : {} (missing)", roster)));
}

#[cfg(unix)]
#[test]
fn test_config_edit_reports_roster_of_edited_file() {
    let home = temp_home("cli_config_edit");

    rat(&home)
        .env("EDITOR", "true")
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration file edited using 'true'"))
        .stdout(contains("Roster   : students.csv"));

    assert!(Path::new(&home).join(".rattendance/rattendance.conf").exists());
}

#[cfg(unix)]
#[test]
fn test_config_edit_rejects_broken_yaml() {
    use std::os::unix::fs::PermissionsExt;

    let home = temp_home("cli_config_broken");
    let editor = Path::new(&home).join("break-config.sh");
    fs::write(&editor, "#!/bin/sh\necho 'students_file: [unclosed' > \"$1\"\n").unwrap();
    fs::set_permissions(&editor, fs::Permissions::from_mode(0o755)).unwrap();

    rat(&home)
        .env("EDITOR", "true")
        .args(["config", "--edit", "--editor", editor.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("is no longer valid"));
}

#[test]
fn test_list_survives_undecodable_line() {
    let home = temp_home("cli_list_latin1");
    let roster = temp_file("cli_list_latin1", "csv");
    fs::write(&roster, b"John,Doe,yes\nZo\xeb,Smith,no\nJane,Roe,no\n").unwrap();

    rat(&home)
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Skipping malformed line 2 in the file."))
        .stdout(contains("John").and(contains("Jane")));
}
