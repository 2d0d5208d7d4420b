use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log;
use crate::core::registry::init_roster;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the students file, with just a header row, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.roster.clone(), cli.test)?;
    let roster = cfg.students_path();

    println!("⚙️  Initializing rAttendance…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎓 Students    : {}", roster.display());

    if init_roster(&roster)? {
        println!("✅ Students file created at {}", roster.display());
    } else {
        println!("ℹ️  Students file already present, left untouched");
    }

    log::record(
        &cfg,
        "init",
        &roster.to_string_lossy(),
        "Students file initialized",
    );

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
