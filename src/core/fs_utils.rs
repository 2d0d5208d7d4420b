use crate::errors::AppResult;
use crate::ui::prompt::Console;
use std::io::{BufRead, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → true
/// - file exists and `force` → true
/// - file exists, no `force` → asks the user; only `y`/`yes` allows it.
pub(crate) fn ensure_writable<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    force: bool,
) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    console.warning(format!("The file '{}' already exists.", path.display()))?;
    let ans = console.ask("Overwrite? [y/N]: ")?.to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        console.info("Existing file will be overwritten.")?;
        Ok(true)
    } else {
        console.info("Operation cancelled: existing file not overwritten.")?;
        Ok(false)
    }
}
