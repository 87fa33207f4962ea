//! Shared fixtures for unit tests: small real JPEGs and raw-EXIF inspection.

use img_parts::Bytes;
use img_parts::ImageEXIF;
use img_parts::jpeg::{Jpeg, JpegSegment};
use little_exif::exif_tag::ExifTag;
use little_exif::filetype::FileExtension;
use little_exif::metadata::Metadata;
use std::fs;
use std::path::Path;

pub const DT: &str = "2026:02:25 18:30:00";

/// Encode a tiny solid-colour JPEG at `path`.
pub fn write_jpeg(path: &Path) {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 120, 40]));
    img.save_with_format(path, image::ImageFormat::Jpeg).unwrap();
}

/// Encode a tiny PNG at `path` regardless of its extension.
pub fn write_png(path: &Path) {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([10, 20, 30]));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Insert a COM (0xFE) segment right after the first segment of a JPEG on disk.
pub fn add_comment_segment(path: &Path, text: &'static [u8]) {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(fs::read(path).unwrap())).unwrap();
    let segment = JpegSegment::new_with_contents(0xFE, Bytes::from_static(text));
    jpeg.segments_mut().insert(1, segment);
    fs::write(path, jpeg.encoder().bytes()).unwrap();
}

/// Replace the EXIF block of a JPEG on disk with raw TIFF bytes.
pub fn set_raw_exif(path: &Path, tiff: Vec<u8>) {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(fs::read(path).unwrap())).unwrap();
    jpeg.set_exif(Some(Bytes::from(tiff)));
    fs::write(path, jpeg.encoder().bytes()).unwrap();
}

/// Give a JPEG on disk an EXIF block holding `tags`, encoded by little_exif.
pub fn write_exif_tags(path: &Path, tags: Vec<ExifTag>) {
    let mut metadata = Metadata::new();
    for tag in tags {
        metadata.set_tag(tag);
    }
    // Drop the APP1 marker, length and Exif\0\0 header
    let encoded = metadata.as_u8_vec(FileExtension::JPEG);
    set_raw_exif(path, encoded[10..].to_vec());
}

/// Raw TIFF payload of the EXIF APP1 segment, if any.
pub fn raw_exif(path: &Path) -> Option<Vec<u8>> {
    let jpeg = Jpeg::from_bytes(Bytes::from(fs::read(path).unwrap())).unwrap();
    jpeg.exif().map(|b| b.to_vec())
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Digits of a rendered date, so `2026:02:25 18:30:00` and `2026-02-25T18:30:00+00:00`
/// compare equal on their first 14 digits.
pub fn date_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).take(14).collect()
}
