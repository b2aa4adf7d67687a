//! Wordlist discovery and loading.
//!
//! Stage 1 of the pipeline. Scans the source directory for wordlists and
//! their image directories, loads the words, and produces a manifest the
//! compose stage (and the `check` command) consume.
//!
//! ## Directory Structure
//!
//! ```text
//! wordlists/                       # Source root
//! ├── config.toml                  # Tool configuration (optional)
//! ├── 001.txt                      # Wordlist: one word per line, UTF-8
//! ├── 001/                         # Images for 001.txt
//! │   ├── 001.png                  # Image for the first word
//! │   ├── 002.jpg                  # Image for the second word
//! │   └── ...
//! ├── 002.txt
//! ├── 002/
//! └── notes.txt                    # Non-numeric stem = ignored
//! ```
//!
//! ## Pairing Convention
//!
//! A wordlist `NNN.txt` owns the sibling directory `NNN/`. Images inside it
//! are named by the 1-based word position, zero-padded to 3 digits. A
//! wordlist without a directory is valid — every cell renders a placeholder.
//!
//! ## Loading
//!
//! Words are the file's lines, trimmed, with empty lines discarded. Order
//! is file order; a word is identified by its position, not its value.
//! Non-UTF-8 bytes are an error ([`ScanError::InvalidUtf8`]), as is a
//! missing file ([`ScanError::NotFound`]).
//!
//! ## Image Probing
//!
//! Each position's image is resolved during scan and probed for pixel
//! dimensions. A file whose dimensions cannot be read is still listed
//! (and still embeds at compose time) but reports `dimensions: null` in
//! the manifest — `check` surfaces these as suspect files.

use crate::config::{self, GridConfig};
use crate::encode::resolve_image;
use crate::naming::parse_wordlist_stem;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub wordlists: Vec<WordlistEntry>,
    pub config: GridConfig,
}

/// One discovered wordlist with its loaded words and resolved images.
#[derive(Debug, Serialize)]
pub struct WordlistEntry {
    /// Identifier from the file stem (e.g. `001`), reused in output names.
    pub id: String,
    /// The wordlist text file.
    pub path: PathBuf,
    /// Sibling image directory, when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<PathBuf>,
    /// Words in file order.
    pub words: Vec<String>,
    /// Images resolved by position, in position order.
    pub images: Vec<ImageEntry>,
}

impl WordlistEntry {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// An image file resolved for a word position.
#[derive(Debug, Serialize)]
pub struct ImageEntry {
    /// 1-based word position the file is named by.
    pub position: usize,
    pub filename: String,
    /// Pixel dimensions, `None` when the file could not be identified.
    pub dimensions: Option<(u32, u32)>,
}

/// Scan a source root: load config, discover wordlists, load their words.
///
/// Wordlists are `*.txt` files whose stem is entirely numeric, ordered by
/// stem value. Other files are ignored.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    let config = config::load_config(root)?;

    let mut numbered: Vec<(u32, PathBuf)> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
        })
        .filter_map(|p| {
            let stem = p.file_stem()?.to_string_lossy().into_owned();
            parse_wordlist_stem(&stem).map(|n| (n, p))
        })
        .collect();
    numbered.sort_by_key(|(n, _)| *n);

    // One unreadable wordlist must not sink the whole scan: batch mode
    // logs it and continues. Single-wordlist invocations go through
    // scan_wordlist directly and surface the error.
    let mut wordlists = Vec::new();
    for (_, path) in numbered {
        match scan_wordlist(&path, None) {
            Ok(entry) => wordlists.push(entry),
            Err(err) => {
                tracing::warn!(wordlist = %path.display(), %err, "skipping unreadable wordlist");
            }
        }
    }

    Ok(Manifest { wordlists, config })
}

/// Scan a single wordlist file into an entry.
///
/// `image_dir` overrides the sibling-directory convention (the `build`
/// command's `--images` flag); `None` uses `<parent>/<stem>/`.
pub fn scan_wordlist(
    path: &Path,
    image_dir: Option<&Path>,
) -> Result<WordlistEntry, ScanError> {
    let words = load_words(path)?;
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let image_dir = match image_dir {
        Some(dir) => Some(dir.to_path_buf()),
        None => {
            let sibling = path.with_extension("");
            sibling.is_dir().then_some(sibling)
        }
    }
    .filter(|dir| dir.is_dir());

    let images = match &image_dir {
        Some(dir) => probe_images(dir, words.len()),
        None => Vec::new(),
    };

    Ok(WordlistEntry {
        id,
        path: path.to_path_buf(),
        image_dir,
        words,
        images,
    })
}

/// Load words from a text file: trimmed, non-empty lines in file order.
pub fn load_words(path: &Path) -> Result<Vec<String>, ScanError> {
    if !path.is_file() {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|_| ScanError::InvalidUtf8(path.to_path_buf()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolve and probe the image for every word position.
fn probe_images(dir: &Path, word_count: usize) -> Vec<ImageEntry> {
    (1..=word_count)
        .filter_map(|position| {
            let path = resolve_image(dir, position)?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(ImageEntry {
                position,
                filename,
                dimensions: image::image_dimensions(&path).ok(),
            })
        })
        .collect()
}
