use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Editor used when `--editor` is not given: `$EDITOR`, `$VISUAL`, then the
/// platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn runs_ok(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

/// Open `path` in the requested editor, falling back to the default one.
/// Returns the editor that succeeded.
fn open_in_editor(requested: Option<&str>, path: &Path) -> AppResult<String> {
    let fallback = default_editor();
    let first = requested.unwrap_or(fallback.as_str());

    if runs_ok(first, path) {
        return Ok(first.to_string());
    }
    if first != fallback {
        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            first, fallback
        ));
        if runs_ok(&fallback, path) {
            return Ok(fallback);
        }
    }

    Err(AppError::Config(format!(
        "no editor could open {}",
        path.display()
    )))
}

/// Where the roster and the log resolve to with this configuration.
fn print_paths(cfg: &Config) {
    let roster = cfg.students_path();
    let state = if roster.exists() { "" } else { " (missing)" };
    println!("Roster   : {}{}", roster.display(), state);
    println!("Log file : {}", cfg.log_file);
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
            print_paths(cfg);
        }

        if *edit_config {
            if !path.exists() {
                cfg.save()?;
                info(format!("Created {} with the current settings", path.display()));
            }

            let used = open_in_editor(editor.as_deref(), &path)?;

            // the edited file must still parse
            let edited = Config::load().map_err(|e| {
                AppError::Config(format!("{} is no longer valid: {}", path.display(), e))
            })?;

            success(format!("Configuration file edited using '{}'", used));
            print_paths(&edited);
            log::record(
                &edited,
                "config",
                &path.to_string_lossy(),
                &format!("Edited with {}", used),
            );
        }
    }

    Ok(())
}
