//! EXIF date/time string validation.
//!
//! EXIF stores timestamps as the fixed-width ASCII string `YYYY:MM:DD HH:MM:SS`.
//! Only the shape is checked here: `2026:13:99 25:61:61` is accepted, because
//! the tool writes whatever value the user asks for and leaves calendar sanity
//! to them.

/// The format users must supply, as shown in error messages.
pub const EXIF_DATETIME_FORMAT: &str = "YYYY:MM:DD HH:MM:SS";

/// Byte offsets that must hold an ASCII digit.
const DIGIT_POSITIONS: [usize; 14] = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15, 17, 18];

/// Byte offsets of the fixed separators.
const SEPARATORS: [(usize, u8); 5] = [(4, b':'), (7, b':'), (10, b' '), (13, b':'), (16, b':')];

/// Check that `s` is a lexically valid EXIF date/time (`YYYY:MM:DD HH:MM:SS`).
///
/// # Example
///
/// ```rust
/// use exif_date_set::datetime::is_valid_exif_datetime;
///
/// assert!(is_valid_exif_datetime("2026:02:25 18:30:00"));
/// assert!(!is_valid_exif_datetime("2026-02-25 18:30:00"));
/// ```
pub fn is_valid_exif_datetime(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != EXIF_DATETIME_FORMAT.len() {
        return false;
    }

    DIGIT_POSITIONS.iter().all(|&i| bytes[i].is_ascii_digit())
        && SEPARATORS.iter().all(|&(i, sep)| bytes[i] == sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_value() {
        assert!(is_valid_exif_datetime("2026:02:25 18:30:00"));
        assert!(is_valid_exif_datetime("0000:00:00 00:00:00"));
    }

    #[test]
    fn accepts_out_of_range_fields() {
        // Shape only, no calendar check
        assert!(is_valid_exif_datetime("2026:13:99 25:61:61"));
    }

    #[test]
    fn rejects_wrong_length() {
        for s in ["", "2026:02:25", "2026:02:25 18:30", "2026:02:25 18:30:000", " 2026:02:25 18:30:00"] {
            assert!(!is_valid_exif_datetime(s), "expected {s:?} to be rejected");
        }
    }

    #[test]
    fn rejects_wrong_date_separators() {
        assert!(!is_valid_exif_datetime("2026-02-25 18:30:00"));
        assert!(!is_valid_exif_datetime("2026/02/25 18:30:00"));
    }

    #[test]
    fn rejects_wrong_middle_separator() {
        assert!(!is_valid_exif_datetime("2026:02:25T18:30:00"));
        assert!(!is_valid_exif_datetime("2026:02:25_18:30:00"));
    }

    #[test]
    fn rejects_wrong_time_separators() {
        assert!(!is_valid_exif_datetime("2026:02:25 18.30.00"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_valid_exif_datetime("20X6:02:25 18:30:00"));
        assert!(!is_valid_exif_datetime("2026:02:25 18:30:0a"));
        assert!(!is_valid_exif_datetime("2026:0 :25 18:30:00"));
    }

    #[test]
    fn rejects_non_ascii_of_matching_byte_length() {
        // 'é' is two bytes, so this is 19 bytes but not 19 ASCII chars
        assert!(!is_valid_exif_datetime("2026:02:25 18:30:é"));
    }
}
