use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest_file`, optionally zip-compressed.
    /// The store file is the single source of truth, so a backup is a
    /// plain file copy.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = expand_tilde(&cfg.store);
        let dest = expand_tilde(dest_file);

        // 1. Check the store exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Store file not found: {}", src.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 2.5 If destination file exists, ask confirmation
        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("Overwrite? [y/N]: ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                info("Backup cancelled by user.");
                return Ok(());
            }
        }

        // 3. Copy the store file
        fs::copy(&src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 4. Optional compression
        if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }
        }

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
