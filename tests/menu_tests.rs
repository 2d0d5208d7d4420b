mod common;
use common::{roster_with, scripted, temp_file, test_config, transcript};
use rattendance::core::log::load_entries;
use rattendance::core::menu::{Flow, MenuChoice, MenuState, handle_choice, run_menu};
use rattendance::models::StudentRecord;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Mark));
    assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Export));
    assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("6"), None);
    assert_eq!(MenuChoice::parse("exit"), None);
}

#[test]
fn test_menu_state_loads_roster() {
    let path = roster_with("menu_load", "John,Doe,yes\nJane,Smith\n");

    let state = MenuState::load(PathBuf::from(&path)).unwrap();

    assert_eq!(state.records.len(), 2);
    assert!(state.records[0].present);
}

#[test]
fn test_menu_invalid_choice_then_exit() {
    let path = roster_with("menu_invalid", "John,Doe,no\n");
    let cfg = test_config("menu_invalid", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("9\n5\n");

    let state = run_menu(&mut console, &cfg, state).expect("menu");

    assert_eq!(state.records, vec![StudentRecord::new("John", "Doe")]);
    let out = transcript(console);
    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("Exiting the program."));
    assert_eq!(out.matches("Choose your option: ").count(), 2);
}

#[test]
fn test_menu_mark_then_export() {
    let path = roster_with("menu_mark_export", "John,Doe\nJane,Smith\n");
    let cfg = test_config("menu_mark_export", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("1\nyes\nno\n4\n5\n");

    run_menu(&mut console, &cfg, state).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "John,Doe,yes\nJane,Smith,no\n"
    );
    let ops: Vec<String> = load_entries(&cfg)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["mark".to_string(), "export".to_string()]);
}

#[test]
fn test_menu_add_is_kept_by_later_export() {
    let path = roster_with("menu_add_export", "John,Doe,yes\n");
    let cfg = test_config("menu_add_export", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("2\nAmy\nPond\n4\n5\n");

    let state = run_menu(&mut console, &cfg, state).unwrap();

    assert_eq!(state.records.len(), 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "John,Doe,yes\nAmy,Pond,no\n"
    );
}

#[test]
fn test_menu_edit_renames_file_and_memory() {
    let path = roster_with("menu_edit", "John,Doe,yes\nJane,Smith,no\n");
    let cfg = test_config("menu_edit", &path);
    let mut state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("Jane\nSmith\nJanet\nSmythe\n");

    let flow = handle_choice(&mut console, &cfg, &mut state, MenuChoice::Edit).unwrap();

    assert_eq!(flow, Flow::Continue);
    assert_eq!(state.records[1].first_name, "Janet");
    assert_eq!(state.records[1].last_name, "Smythe");
    assert!(!state.records[1].present);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "first_name,last_name,present\nJohn,Doe,yes\nJanet,Smythe,no\n"
    );
}

#[test]
fn test_menu_edit_not_found_leaves_memory_alone() {
    let path = roster_with("menu_edit_missing", "John,Doe,yes\n");
    let cfg = test_config("menu_edit_missing", &path);
    let mut state = MenuState::load(PathBuf::from(&path)).unwrap();
    let before = state.clone();
    let mut console = scripted("Nobody\nHere\nSome\nOne\n");

    handle_choice(&mut console, &cfg, &mut state, MenuChoice::Edit).unwrap();

    assert_eq!(state, before);
    assert!(load_entries(&cfg).unwrap().is_empty());
}

#[test]
fn test_menu_exits_when_input_ends() {
    let path = temp_file("menu_eof", "csv");
    let cfg = test_config("menu_eof", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("");

    let state = run_menu(&mut console, &cfg, state).expect("EOF ends the menu");

    assert!(state.records.is_empty());
    assert!(transcript(console).contains("Exiting the program."));
}

#[test]
fn test_menu_eof_inside_action_exits() {
    let path = roster_with("menu_eof_action", "John,Doe,no\n");
    let cfg = test_config("menu_eof_action", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("2\nAmy\n");

    let state = run_menu(&mut console, &cfg, state).unwrap();

    assert_eq!(state.records.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "John,Doe,no\n");
}

#[test]
fn test_menu_edit_requires_new_names() {
    let path = roster_with("menu_edit_blank", "John,Doe,yes\n");
    let cfg = test_config("menu_edit_blank", &path);
    let mut state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("John\nDoe\n\nDough\n");

    handle_choice(&mut console, &cfg, &mut state, MenuChoice::Edit).unwrap();

    assert_eq!(state.records[0].first_name, "John");
    assert_eq!(fs::read_to_string(&path).unwrap(), "John,Doe,yes\n");
    assert!(transcript(console).contains("Nothing changed."));
}

#[test]
fn test_menu_reports_add_and_edit_on_console() {
    let path = roster_with("menu_messages", "John,Doe,yes\n");
    let cfg = test_config("menu_messages", &path);
    let state = MenuState::load(PathBuf::from(&path)).unwrap();
    let mut console = scripted("2\nAmy\nPond\n3\nNobody\nHere\nSome\nOne\n3\nAmy\nPond\nAmelia\nPond\n5\n");

    run_menu(&mut console, &cfg, state).unwrap();

    let out = transcript(console);
    assert!(out.contains(&format!("Student Amy Pond was added to {}.", path)));
    assert!(out.contains("The student hasn't been found."));
    assert!(out.contains("Student: Amy Pond has been updated to Amelia Pond."));
}

#[test]
fn test_menu_shows_import_warnings_first() {
    let path = temp_file("menu_latin1", "csv");
    fs::write(&path, b"John,Doe,yes\nZo\xeb,Smith,no\n").unwrap();
    let cfg = test_config("menu_latin1", &path);

    let state = MenuState::load(PathBuf::from(&path)).expect("bad line is skipped");
    assert_eq!(state.records, vec![StudentRecord::with_presence("John", "Doe", true)]);

    let mut console = scripted("5\n");
    let state = run_menu(&mut console, &cfg, state).unwrap();

    assert!(state.notices.is_empty());
    let out = transcript(console);
    let warning_at = out.find("Skipping malformed line 2 in the file.").expect("warning");
    assert!(warning_at < out.find("MENU:").expect("menu"));
}
