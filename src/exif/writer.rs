use anyhow::{Context, Result, anyhow, bail};
use img_parts::Bytes;
use img_parts::ImageEXIF;
use img_parts::jpeg::Jpeg;
use little_exif::exif_tag::ExifTag;
use little_exif::filetype::FileExtension;
use little_exif::metadata::Metadata;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

// little_exif as_u8_vec(JPEG) returns: [APP1 marker 2B][length 2B][Exif\0\0 6B][TIFF data]
// img-parts set_exif() expects just the TIFF data (after Exif\0\0)
const JPEG_EXIF_OVERHEAD: usize = 10; // 2 + 2 + 6

const EXIF_PREFIX: &[u8] = b"Exif\0\0";

/// The three tags that carry a photo's date, all set to the same value.
fn date_tags(datetime: &str) -> [ExifTag; 3] {
    [
        ExifTag::DateTimeOriginal(datetime.to_string()), // 0x9003
        ExifTag::CreateDate(datetime.to_string()),       // 0x9004, DateTimeDigitized
        ExifTag::ModifyDate(datetime.to_string()),       // 0x0132, DateTime
    ]
}

/// Run a little_exif call with its panics turned into errors.
fn catch_codec_panic<T>(what: &str, f: impl FnOnce() -> T) -> Result<T> {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(prev_hook);

    result.map_err(|_| anyhow!("EXIF codec panicked while {what}"))
}

/// Load the existing EXIF table of a JPEG with little_exif.
///
/// Only called when the file has an EXIF segment, so an empty or unreadable
/// result means little_exif cannot represent what is there. Rewriting would
/// then drop the other tags, so that is an error.
fn load_existing_metadata(path: &Path) -> Result<Metadata> {
    let metadata = catch_codec_panic("reading EXIF", || Metadata::new_from_path(path))?
        .context("Failed to parse existing EXIF")?;

    if metadata.data().is_empty() {
        bail!("Existing EXIF could not be decoded; refusing to rewrite it");
    }
    log::debug!("little_exif loaded {} existing EXIF tags", metadata.data().len());
    Ok(metadata)
}

/// Set DateTimeOriginal, CreateDate and ModifyDate of a JPEG to `datetime`.
///
/// Strategy:
/// 1. Read the entire JPEG with img-parts (preserves all segments)
/// 2. Load the existing EXIF table with little_exif, or start an empty one
/// 3. Set the three tags and re-encode the table
/// 4. Swap the APP1 EXIF segment in place and write the file once
///
/// Nothing is written unless every step before the write succeeds.
pub fn set_dates(path: &Path, datetime: &str) -> Result<()> {
    let file_bytes = std::fs::read(path).context("Failed to read image file")?;

    let mut jpeg = Jpeg::from_bytes(Bytes::from(file_bytes))
        .map_err(|e| anyhow!("Failed to parse JPEG: {e}"))?;

    // Remember where the EXIF segment was originally positioned
    let orig_exif_pos = find_exif_segment_pos(&jpeg);
    let has_exif = jpeg.exif().is_some_and(|exif| !exif.is_empty());

    let mut metadata = if has_exif {
        load_existing_metadata(path)?
    } else {
        log::debug!("No existing EXIF in {}, creating a new table", path.display());
        Metadata::new()
    };

    let tags = date_tags(datetime);
    let exif_bytes = catch_codec_panic("encoding EXIF", move || {
        for tag in tags {
            metadata.set_tag(tag);
        }
        metadata.as_u8_vec(FileExtension::JPEG)
    })?;
    if exif_bytes.len() <= JPEG_EXIF_OVERHEAD {
        bail!("EXIF encoder produced an empty block");
    }
    jpeg.set_exif(Some(Bytes::from(exif_bytes[JPEG_EXIF_OVERHEAD..].to_vec())));

    // set_exif() inserts at position 3, which may be after XMP APP1.
    // Move the EXIF segment back to its original position so EXIF comes
    // before XMP (required for many EXIF parsers).
    if let Some(new_pos) = find_exif_segment_pos(&jpeg) {
        let target_pos = orig_exif_pos.unwrap_or(1); // default: right after APP0
        if target_pos < new_pos {
            let segments = jpeg.segments_mut();
            let seg = segments.remove(new_pos);
            segments.insert(target_pos, seg);
        }
    }

    let output = jpeg.encoder().bytes();
    std::fs::write(path, &output).context("Failed to write JPEG file")?;
    log::debug!("Wrote {} bytes to {}", output.len(), path.display());

    Ok(())
}

/// Find the position of the EXIF APP1 segment in a JPEG.
/// EXIF segments have marker 0xE1 (APP1) and contents starting with "Exif\0\0".
fn find_exif_segment_pos(jpeg: &Jpeg) -> Option<usize> {
    jpeg.segments().iter().position(|s| {
        s.marker() == 0xE1 && s.contents().starts_with(EXIF_PREFIX)
    })
}
