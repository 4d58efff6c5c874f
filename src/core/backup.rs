use crate::api::ApiClient;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// `attendance_backup_<YYYY-MM-DD>.json`
pub fn default_backup_name() -> String {
    format!("attendance_backup_{}.json", date::today().format("%Y-%m-%d"))
}

pub struct BackupLogic;

impl BackupLogic {
    /// Download the server dump, write it pretty-printed to `dest_file` and
    /// optionally replace it with a zip archive. Returns the final path.
    pub fn backup(
        api: &ApiClient,
        store: &LocalStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        // Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, force)?;

        let dump = api.backup()?;
        let body = serde_json::to_string_pretty(&dump)?;
        fs::write(dest, body)?;
        info(format!("Backup written: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            // remove uncompressed copy
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        store.journal(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Server backup downloaded and compressed"
            } else {
                "Server backup downloaded"
            },
        );

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
