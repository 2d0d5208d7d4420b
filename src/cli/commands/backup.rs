use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::prompt::Console;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let mut console = Console::stdio();
        BackupLogic::backup(&mut console, cfg, file, *compress, *force)?;
    }

    Ok(())
}
