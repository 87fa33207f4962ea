//! # exif-date-set
//!
//! Batch-set the capture date of JPEG photos. For every `.jpg`/`.jpeg` in a
//! folder (optionally recursive) the EXIF tags `DateTimeOriginal`,
//! `CreateDate` and `ModifyDate` are set to one value, after an optional
//! `<file>.bak` copy of the original.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exif_date_set::config::RunConfig;
//! use exif_date_set::pipeline;
//!
//! let config = RunConfig::new("./photos", "2026:02:25 18:30:00")?.recursive(true);
//! let stats = pipeline::run(&config);
//! println!("{}", stats.summary());
//! std::process::exit(i32::from(stats.exit_status()));
//! # Ok::<(), exif_date_set::config::UsageError>(())
//! ```
//!
//! ## Lower-Level Usage
//!
//! ```rust,no_run
//! use exif_date_set::{backup, exif};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = Path::new("photo.jpg");
//!     println!("Before: {:?}", exif::read_dates(path)?);
//!
//!     backup::create_backup(path)?;
//!     exif::set_dates(path, "2026:02:25 18:30:00")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`datetime`] — `YYYY:MM:DD HH:MM:SS` shape check
//! - [`config`] — validated run settings
//! - [`backup`] — `.bak` copies that never overwrite
//! - [`exif`] — date tag reading and writing
//! - [`pipeline`] — folder walking, per-file processing, run statistics

pub mod backup;
pub mod config;
pub mod datetime;
pub mod exif;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_helpers;
