//! EXIF date tag reading and writing for JPEG files.
//!
//! - [`set_dates`] — write `DateTimeOriginal`, `CreateDate` and `ModifyDate` in one pass
//! - [`read_dates`] — report the current values of those tags
//!
//! Writing goes through `little_exif` for the tag table and `img-parts` for the
//! JPEG segment list, so every segment other than the EXIF APP1 block is kept
//! byte-for-byte.

mod reader;
mod writer;

pub use reader::{DateTags, read_dates};
pub use writer::set_dates;
