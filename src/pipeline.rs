use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::backup;
use crate::config::RunConfig;
use crate::exif;

/// Extensions treated as JPEG, compared case-insensitively.
const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// A regular file found by [`walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// JPEG by extension; will be processed.
    Candidate(PathBuf),
    /// Any other regular file; only counted.
    Skipped(PathBuf),
}

/// Check if a file has a JPEG extension (`.jpg` / `.jpeg`, any case).
///
/// ```rust
/// use exif_date_set::pipeline::is_jpeg_path;
/// use std::path::Path;
///
/// assert!(is_jpeg_path(Path::new("photo.JPG")));
/// assert!(!is_jpeg_path(Path::new("photo.png")));
/// ```
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lazily list the regular files under `root`.
///
/// Without `recursive` only direct children are visited. Directories are
/// never yielded. Symlinks are not followed while descending; a symlink to a
/// file counts as a file if it resolves to one. Order is whatever the
/// filesystem returns. Entries that cannot be read are logged and left out.
pub fn walk(root: &Path, recursive: bool) -> impl Iterator<Item = WalkEntry> {
    let mut walker = WalkDir::new(root).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Cannot read directory entry: {e}");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .map(|entry| {
            let path = entry.into_path();
            if is_jpeg_path(&path) {
                WalkEntry::Candidate(path)
            } else {
                WalkEntry::Skipped(path)
            }
        })
}

/// What happened to a JPEG that was processed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Dates written (after a backup, unless backups are off).
    Updated,
    /// Dry run: reported only, nothing touched.
    DryRun,
}

impl FileOutcome {
    /// Prefix used on the per-file stdout line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Updated => "OK :",
            Self::DryRun => "DRY:",
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// JPEGs processed, successful or not.
    pub total: usize,
    /// JPEGs updated (or reported, in a dry run).
    pub ok: usize,
    /// Regular files that are not JPEGs.
    pub skipped: usize,
}

impl RunStats {
    pub fn failed(&self) -> usize {
        self.total - self.ok
    }

    /// Process exit status: 0 when every JPEG succeeded, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.ok == self.total { 0 } else { 1 }
    }

    /// The closing summary line.
    pub fn summary(&self) -> String {
        format!(
            "Done. Updated {} / {} JPEG files. Skipped(non-jpeg): {}",
            self.ok, self.total, self.skipped
        )
    }
}

/// Back up (if enabled) and rewrite the date tags of one JPEG.
///
/// A dry run returns before anything on disk is touched. A failed backup
/// stops the file before the mutator is called.
pub fn process_file(path: &Path, config: &RunConfig) -> Result<FileOutcome> {
    if config.is_dry_run() {
        if log::log_enabled!(log::Level::Debug) {
            match exif::read_dates(path) {
                Ok(current) => log::debug!("  current dates: {current:?}"),
                Err(e) => log::debug!("  could not read current dates: {e:#}"),
            }
        }
        return Ok(FileOutcome::DryRun);
    }

    if config.make_backup() {
        backup::create_backup(path)?;
    }

    exif::set_dates(path, config.datetime())?;
    Ok(FileOutcome::Updated)
}

/// Process every JPEG under the configured folder.
///
/// Prints `OK : <path>` / `DRY: <path>` per success on stdout and
/// `ERR: <path> : <cause>` per failure on stderr. A failing file never stops
/// the run. The summary line is left to the caller.
pub fn run(config: &RunConfig) -> RunStats {
    let mut stats = RunStats::default();

    log::info!(
        "Setting dates to \"{}\" under {}{}{}",
        config.datetime(),
        config.folder().display(),
        if config.is_recursive() { " (recursive)" } else { "" },
        if config.is_dry_run() { " (dry run)" } else { "" },
    );

    // Listed up front so `.bak` files created during the run are never counted
    let entries: Vec<WalkEntry> = walk(config.folder(), config.is_recursive()).collect();
    log::debug!("Found {} regular file(s)", entries.len());

    for entry in entries {
        let path = match entry {
            WalkEntry::Candidate(path) => path,
            WalkEntry::Skipped(path) => {
                log::debug!("Skipping non-JPEG: {}", path.display());
                stats.skipped += 1;
                continue;
            }
        };

        stats.total += 1;
        match process_file(&path, config) {
            Ok(outcome) => {
                stats.ok += 1;
                println!("{} {}", outcome.label(), path.display());
            }
            Err(e) => eprintln!("ERR: {} : {e:#}", path.display()),
        }
    }

    stats
}
