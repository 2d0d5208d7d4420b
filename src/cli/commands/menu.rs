use crate::config::Config;
use crate::core::menu::{MenuState, run_menu};
use crate::errors::AppResult;
use crate::ui::prompt::Console;

/// Start the interactive menu on the configured roster.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let state = MenuState::load(cfg.students_path())?;
    let mut console = Console::stdio();
    run_menu(&mut console, cfg, state)?;
    Ok(())
}
