use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::datetime::{EXIF_DATETIME_FORMAT, is_valid_exif_datetime};

/// Problems with the command line that stop the run before any file is touched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid datetime. Expected: \"{format}\" (got \"{0}\")", format = EXIF_DATETIME_FORMAT)]
    InvalidDateTime(String),
    #[error("Folder does not exist or is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Settings for one batch run.
///
/// There is no configuration file; everything comes from the command line
/// and is validated once by [`RunConfig::new`]. A `RunConfig` value is
/// therefore always safe to hand to [`crate::pipeline::run`].
///
/// # Example
///
/// ```rust,no_run
/// use exif_date_set::config::RunConfig;
///
/// let config = RunConfig::new("./photos", "2026:02:25 18:30:00")?
///     .recursive(true)
///     .dry_run(true);
/// assert!(config.make_backup());
/// # Ok::<(), exif_date_set::config::UsageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    folder: PathBuf,
    datetime: String,
    recursive: bool,
    dry_run: bool,
    make_backup: bool,
}

impl RunConfig {
    /// Validate the datetime string and the target folder.
    ///
    /// The datetime is checked first, matching the order users see errors in.
    /// Recursion and dry-run start off, backups start on.
    pub fn new(folder: impl Into<PathBuf>, datetime: impl Into<String>) -> Result<Self, UsageError> {
        let folder = folder.into();
        let datetime = datetime.into();

        if !is_valid_exif_datetime(&datetime) {
            return Err(UsageError::InvalidDateTime(datetime));
        }
        if !folder.is_dir() {
            return Err(UsageError::NotADirectory(folder));
        }

        Ok(Self {
            folder,
            datetime,
            recursive: false,
            dry_run: false,
            make_backup: true,
        })
    }

    /// Descend into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Report what would change without touching any file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Copy each file to `<file>.bak` before rewriting it.
    pub fn backup(mut self, make_backup: bool) -> Self {
        self.make_backup = make_backup;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn datetime(&self) -> &str {
        &self.datetime
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn make_backup(&self) -> bool {
        self.make_backup
    }
}
