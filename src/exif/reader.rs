use anyhow::{Context, Result};
use nom_exif::*;
use std::path::Path;

/// Current values of the three date tags, as rendered by the EXIF reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTags {
    /// DateTimeOriginal (0x9003), the "date taken".
    pub date_time_original: Option<String>,
    /// CreateDate / DateTimeDigitized (0x9004).
    pub create_date: Option<String>,
    /// ModifyDate / DateTime (0x0132).
    pub modify_date: Option<String>,
}

impl DateTags {
    pub fn is_empty(&self) -> bool {
        self.date_time_original.is_none() && self.create_date.is_none() && self.modify_date.is_none()
    }
}

/// Read the date tags from an image file.
///
/// A file without an EXIF block is not an error; all fields come back `None`.
pub fn read_dates(path: &Path) -> Result<DateTags> {
    let mut parser = MediaParser::new();
    let ms = MediaSource::file_path(path).context("Failed to open image file")?;

    let iter: ExifIter = match parser.parse(ms) {
        Ok(iter) => iter,
        Err(_) => {
            log::debug!("No EXIF data found in {}", path.display());
            return Ok(DateTags::default());
        }
    };
    let exif: Exif = iter.into();

    Ok(DateTags {
        date_time_original: exif.get(ExifTag::DateTimeOriginal).and_then(entry_to_string),
        create_date: exif.get(ExifTag::CreateDate).and_then(entry_to_string),
        modify_date: exif.get(ExifTag::ModifyDate).and_then(entry_to_string),
    })
}

fn entry_to_string(val: &EntryValue) -> Option<String> {
    let s = val.to_string();
    let s = s.trim().trim_matches('"').to_string();
    if s.is_empty() { None } else { Some(s) }
}
