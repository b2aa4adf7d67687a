//! Image resolution and embedding.
//!
//! Maps a word's 1-based position to an image file in the wordlist's image
//! directory and embeds its bytes as a base64 data URI, so the rendered HTML
//! is fully self-contained (the PDF renderer sees no external references).
//!
//! ## Resolution
//!
//! The expected filename is the zero-padded position tried against each
//! supported extension in [`IMAGE_EXTENSIONS`] priority order: for position
//! 3, `003.png`, then `003.jpg`, then `003.jpeg`. A missing directory or a
//! position with no match resolves to "absent" — a normal outcome, not an
//! error. The grid renders a placeholder block for it.
//!
//! ## Degradation
//!
//! A file that resolves but cannot be read (permissions, races) degrades
//! that single cell to a placeholder with a logged warning. One broken image
//! never aborts the document.

use crate::naming::image_candidates;
pub use crate::naming::IMAGE_EXTENSIONS;
use crate::types::{EncodedImage, GridCell};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the image file for a 1-based word position.
///
/// Tries each candidate name in priority order and returns the first that
/// exists. `None` when the directory is missing or no candidate matches.
pub fn resolve_image(image_dir: &Path, position: usize) -> Option<PathBuf> {
    if !image_dir.is_dir() {
        return None;
    }
    image_candidates(position)
        .into_iter()
        .map(|name| image_dir.join(name))
        .find(|path| path.is_file())
}

/// MIME type for a supported image extension.
///
/// `jpg` normalizes to `image/jpeg`; the data URI carries the MIME type, not
/// the filename.
pub fn mime_type(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Read an image file and embed it as a base64 data URI.
pub fn encode_image(path: &Path) -> std::io::Result<EncodedImage> {
    let bytes = fs::read(path)?;
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let data_uri = format!("data:{};base64,{}", mime_type(&ext), BASE64.encode(&bytes));
    Ok(EncodedImage {
        source: path.to_path_buf(),
        data_uri,
    })
}

/// Pair every word with its resolved-and-encoded image.
///
/// Produces exactly one cell per word, in word order. Cells whose position
/// has no image, or whose image fails to read, carry `image: None`.
pub fn build_cells(words: &[String], image_dir: Option<&Path>) -> Vec<GridCell> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let index = i + 1;
            let image = image_dir
                .and_then(|dir| resolve_image(dir, index))
                .and_then(|path| match encode_image(&path) {
                    Ok(encoded) => Some(encoded),
                    Err(err) => {
                        tracing::warn!(
                            image = %path.display(),
                            %err,
                            "failed to read image, using placeholder"
                        );
                        None
                    }
                });
            GridCell {
                index,
                word: word.clone(),
                image,
            }
        })
        .collect()
}
