//! Shared test utilities for the wordgrid test suite.
//!
//! Fixtures are built programmatically into temp directories — no binary
//! fixture files in the repo. [`TINY_PNG`] is a real 1×1 PNG so dimension
//! probing works on it.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = sample_root();
//! let manifest = scan(tmp.path()).unwrap();
//! assert_eq!(manifest.wordlists[0].word_count(), 5);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::WordlistEntry;

/// A valid 1×1 transparent PNG (70 bytes).
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15,
    0xc4, 0x89, //
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0xda, 0x63, 0x64, 0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47,
    0xba, 0x92, //
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82, // IEND
];

/// Write a wordlist file `<id>.txt` under `root`, one word per line.
pub fn write_wordlist(root: &Path, id: &str, words: &[&str]) -> PathBuf {
    let path = root.join(format!("{id}.txt"));
    let mut content = words.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Write an image file at `root/<id>/<name>` with the given bytes.
pub fn write_image(root: &Path, id: &str, name: &str, bytes: &[u8]) -> PathBuf {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Build a source root with two wordlists:
///
/// ```text
/// <tmp>/
/// ├── 001.txt     # 5 words
/// ├── 001/
/// │   ├── 001.png # TINY_PNG
/// │   └── 003.png # TINY_PNG
/// └── 002.txt     # 2 words, no image directory
/// ```
pub fn sample_root() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_wordlist(
        tmp.path(),
        "001",
        &["apple", "banana", "cherry", "date", "elderberry"],
    );
    write_image(tmp.path(), "001", "001.png", TINY_PNG);
    write_image(tmp.path(), "001", "003.png", TINY_PNG);
    write_wordlist(tmp.path(), "002", &["fig", "grape"]);
    tmp
}

/// Build an in-memory [`WordlistEntry`] with no image directory.
///
/// For compose/paginate tests that don't care about the filesystem.
pub fn entry_with_words(id: &str, words: &[&str]) -> WordlistEntry {
    WordlistEntry {
        id: id.to_string(),
        path: PathBuf::from(format!("{id}.txt")),
        image_dir: None,
        words: words.iter().map(|w| w.to_string()).collect(),
        images: Vec::new(),
    }
}
