//! `.bak` copies taken before a file is rewritten.
//!
//! The backup is the only undo the tool offers, so an existing backup is
//! never replaced: it may hold the true original from an earlier, unfinished
//! run.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix appended to the full file name (`a.jpg` → `a.jpg.bak`).
pub const BACKUP_SUFFIX: &str = ".bak";

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("backup already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to open source for backup: {0}")]
    OpenSource(io::Error),
    #[error("failed to open destination for backup: {0}")]
    OpenDestination(io::Error),
    #[error("failed while writing backup: {0}")]
    Write(io::Error),
}

/// The backup location for `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` byte-for-byte to [`backup_path`] and return the backup location.
///
/// Fails without touching anything if the backup already exists. A backup
/// left half-written by a failed copy is removed before the error is returned.
pub fn create_backup(path: &Path) -> Result<PathBuf, BackupError> {
    let dest = backup_path(path);
    if dest.exists() {
        return Err(BackupError::AlreadyExists(dest));
    }

    let source = File::open(path).map_err(BackupError::OpenSource)?;

    // create_new closes the gap between the exists() check and the open
    let target = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&dest)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => BackupError::AlreadyExists(dest.clone()),
            _ => BackupError::OpenDestination(e),
        })?;

    if let Err(e) = copy_all(source, target) {
        if let Err(rm) = fs::remove_file(&dest) {
            log::warn!("Could not remove partial backup {}: {rm}", dest.display());
        }
        return Err(BackupError::Write(e));
    }

    log::debug!("Backup created: {}", dest.display());
    Ok(dest)
}

fn copy_all(source: File, target: File) -> io::Result<()> {
    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(target);
    io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
