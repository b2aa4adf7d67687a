//! Shared document-model types.
//!
//! These flow from compose to render within a single invocation. The model
//! is never written to disk — the only persisted artifacts are the rendered
//! HTML and PDF files.

use std::path::PathBuf;

/// Number of grid columns on a page.
pub const GRID_COLUMNS: usize = 4;
/// Number of grid rows on a page.
pub const GRID_ROWS: usize = 8;
/// Cells per page — one full 4×8 grid.
pub const CELLS_PER_PAGE: usize = GRID_COLUMNS * GRID_ROWS;

/// An image embedded into the document as a base64 data URI.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    /// The resolved source file the bytes came from.
    pub source: PathBuf,
    /// `data:image/<type>;base64,<payload>` — self-contained, no external
    /// references in the rendered HTML.
    pub data_uri: String,
}

/// One word paired with its image slot.
///
/// `image: None` is the placeholder state: a valid terminal outcome for a
/// position with no matching file, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// 1-based position within the source wordlist, stable across pages.
    /// This is the number printed in the cell's index label and the number
    /// image files are named by.
    pub index: usize,
    pub word: String,
    pub image: Option<EncodedImage>,
}

/// One printed page: up to [`CELLS_PER_PAGE`] cells in wordlist order.
///
/// Every page except the last holds exactly [`CELLS_PER_PAGE`] cells. The
/// renderer pads a partial final page with blank cells so the grid rectangle
/// stays fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number within the document.
    pub number: usize,
    pub cells: Vec<GridCell>,
}

impl Page {
    /// Cells that carry an embedded image (non-placeholder).
    pub fn image_count(&self) -> usize {
        self.cells.iter().filter(|c| c.image.is_some()).count()
    }
}

/// A complete document: ordered pages plus title metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    /// Total real (non-blank) cells across all pages.
    pub fn cell_count(&self) -> usize {
        self.pages.iter().map(|p| p.cells.len()).sum()
    }

    /// Total embedded images across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.image_count()).sum()
    }
}
