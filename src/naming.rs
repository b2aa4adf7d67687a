//! Centralized parsing for the numeric filename convention.
//!
//! Wordlists and their images share one naming scheme:
//! - `001.txt` is the wordlist with id `001`; its images live in `001/`.
//! - Inside an image directory, `017.png` illustrates the 17th word.
//!
//! Wordlist ids are treated as opaque strings for file naming (the stem is
//! reused verbatim in output filenames) but must parse as a number to be
//! picked up by discovery — stray text files next to the wordlists are
//! ignored rather than misread.

/// Extensions an image may use, in resolution priority order.
///
/// When the same position exists with several extensions (`003.png` and
/// `003.jpg`), the first match in this list wins. The order is part of the
/// tool's contract — resolution never depends on directory iteration order.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Parse a wordlist file stem like `001`.
///
/// Returns the numeric value when the entire stem is a number, `None`
/// otherwise. `007` and `7` both parse (to 7); `notes` and `001-draft`
/// don't.
pub fn parse_wordlist_stem(stem: &str) -> Option<u32> {
    if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

/// File name candidates for the image at a 1-based word position.
///
/// Positions are zero-padded to 3 digits and tried against each supported
/// extension in [`IMAGE_EXTENSIONS`] order: `["017.png", "017.jpg",
/// "017.jpeg"]`.
pub fn image_candidates(position: usize) -> Vec<String> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("{position:03}.{ext}"))
        .collect()
}

/// Format a 1-based word position as the cell index label (`0001`).
pub fn index_label(position: usize) -> String {
    format!("{position:04}")
}

/// Format a page number for the footer (`002`).
pub fn page_label(number: usize) -> String {
    format!("{number:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_with_leading_zeros() {
        assert_eq!(parse_wordlist_stem("001"), Some(1));
        assert_eq!(parse_wordlist_stem("042"), Some(42));
    }

    #[test]
    fn stem_without_padding() {
        assert_eq!(parse_wordlist_stem("7"), Some(7));
    }

    #[test]
    fn stem_rejects_text() {
        assert_eq!(parse_wordlist_stem("notes"), None);
        assert_eq!(parse_wordlist_stem("001-draft"), None);
        assert_eq!(parse_wordlist_stem(""), None);
    }

    #[test]
    fn stem_rejects_mixed() {
        assert_eq!(parse_wordlist_stem("1a"), None);
        assert_eq!(parse_wordlist_stem("a1"), None);
    }

    #[test]
    fn candidates_are_zero_padded() {
        assert_eq!(
            image_candidates(3),
            vec!["003.png", "003.jpg", "003.jpeg"]
        );
    }

    #[test]
    fn candidates_keep_wide_positions() {
        assert_eq!(
            image_candidates(2048),
            vec!["2048.png", "2048.jpg", "2048.jpeg"]
        );
    }

    #[test]
    fn candidates_priority_is_png_first() {
        let names = image_candidates(1);
        assert_eq!(names[0], "001.png");
        assert_eq!(names[2], "001.jpeg");
    }

    #[test]
    fn index_label_is_four_digits() {
        assert_eq!(index_label(1), "0001");
        assert_eq!(index_label(2048), "2048");
    }

    #[test]
    fn page_label_is_three_digits() {
        assert_eq!(page_label(2), "002");
        assert_eq!(page_label(128), "128");
    }
}
