//! Document composition.
//!
//! Stage 2 of the pipeline: turns a scanned wordlist entry into the
//! [`Document`] the renderer consumes — cells built word-by-word
//! ([`crate::encode::build_cells`]), chunked into pages
//! ([`crate::paginate::paginate`]), wrapped with the title.
//!
//! ## Combined mode
//!
//! [`compose_combined`] concatenates the page sequences of several
//! wordlists into one document. Page boundaries are preserved per source:
//! a new wordlist always starts on a fresh page, even when the previous
//! wordlist's last page had spare cells. Cell indices stay relative to
//! their own wordlist, so the printed numbers keep matching the image
//! files and the BIP39 word numbers.

use crate::encode::build_cells;
use crate::paginate::{paginate, renumber};
use crate::scan::WordlistEntry;
use crate::types::Document;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Wordlist {0} has no words")]
    EmptyWordlist(String),
}

/// Title of the combined document.
pub const COMBINED_TITLE: &str = "Combined Wordlists";

/// Document title for a single wordlist: `"<base> - <id>"`.
pub fn document_title(base: &str, id: &str) -> String {
    format!("{base} - {id}")
}

/// Compose a single wordlist into a document.
///
/// Errors when the wordlist has zero words after filtering. Callers decide
/// severity: the `build` command fails, `batch` logs and skips.
pub fn compose(entry: &WordlistEntry, base_title: &str) -> Result<Document, ComposeError> {
    if entry.words.is_empty() {
        return Err(ComposeError::EmptyWordlist(entry.id.clone()));
    }
    let cells = build_cells(&entry.words, entry.image_dir.as_deref());
    Ok(Document {
        title: document_title(base_title, &entry.id),
        pages: paginate(cells),
    })
}

/// Compose all wordlists into one combined document.
///
/// Empty wordlists are skipped with a warning, matching batch-mode
/// semantics. The result has zero pages when every wordlist is empty.
pub fn compose_combined(entries: &[WordlistEntry]) -> Document {
    let mut pages = Vec::new();
    for entry in entries {
        if entry.words.is_empty() {
            tracing::warn!(wordlist = %entry.id, "skipping empty wordlist");
            continue;
        }
        let cells = build_cells(&entry.words, entry.image_dir.as_deref());
        pages.extend(paginate(cells));
    }
    renumber(&mut pages);
    Document {
        title: COMBINED_TITLE.to_string(),
        pages,
    }
}
