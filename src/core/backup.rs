use crate::config::Config;
use crate::core::fs_utils::ensure_writable;
use crate::core::log;
use crate::errors::{AppError, AppResult};
use crate::ui::prompt::Console;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the roster to `dest_file`, optionally replacing the copy with a
    /// zip archive. Returns the final path, or `None` if the user declined
    /// to overwrite an existing destination.
    pub fn backup<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = cfg.students_path();
        let dest = PathBuf::from(dest_file);

        // 1️⃣ Check roster exists
        if !src.exists() {
            return Err(AppError::StudentsFileNotFound(src.display().to_string()));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        if !ensure_writable(console, &dest, force)? {
            return Ok(None);
        }

        // 4️⃣ Copy roster
        fs::copy(&src, &dest)?;
        console.success(format!("Backup created: {}", dest.display()))?;

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            console.info(format!("📦 Compressed: {}", compressed.display()))?;

            if let Err(e) = fs::remove_file(&dest) {
                console.warning(format!("Failed to remove uncompressed backup: {}", e))?;
            } else {
                console.info(format!("🗑️ Removed uncompressed backup: {}", dest.display()))?;
            }

            compressed
        } else {
            dest
        };

        // 6️⃣ Audit log
        log::record(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    if zip_path == path {
        return Err(AppError::Backup(format!(
            "Backup file already has a .zip extension: {}",
            path.display()
        )));
    }

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("Invalid backup path: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(zip_path)
}
