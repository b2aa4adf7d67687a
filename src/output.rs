//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every wordlist is its identity and content summary — id, word count,
//! image coverage — with filesystem paths as secondary context via indented
//! `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan / check
//!
//! ```text
//! Wordlists
//! 001 (5 words, 2 images)
//!     Source: 001.txt
//!     Images: 001/
//!     Suspect: 002.png (unreadable dimensions)
//! 002 (2 words, no images)
//!     Source: 002.txt
//! ```
//!
//! ## Build
//!
//! ```text
//! Word Reference Grid - 001 (1 page, 2 images, 3 placeholders)
//!     → output/wordlist_001.html
//!     → output/wordlist_001.pdf
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::{Manifest, WordlistEntry};
use crate::types::Document;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pluralize a count: `1 page`, `2 pages`.
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Header line for one wordlist entry.
///
/// ```text
/// 001 (5 words, 2 images)
/// 002 (2 words, no images)
/// ```
fn entry_header(entry: &WordlistEntry) -> String {
    let images = match entry.image_count() {
        0 => "no images".to_string(),
        n => count_noun(n, "image"),
    };
    format!(
        "{} ({}, {})",
        entry.id,
        count_noun(entry.word_count(), "word"),
        images
    )
}

// ============================================================================
// Scan / check
// ============================================================================

pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    if manifest.wordlists.is_empty() {
        return vec!["No wordlists found".to_string()];
    }

    let mut lines = vec!["Wordlists".to_string()];
    for entry in &manifest.wordlists {
        lines.push(entry_header(entry));
        lines.push(format!(
            "{}Source: {}",
            indent(1),
            entry.path.file_name().unwrap_or_default().to_string_lossy()
        ));
        if let Some(dir) = &entry.image_dir {
            lines.push(format!(
                "{}Images: {}/",
                indent(1),
                dir.file_name().unwrap_or_default().to_string_lossy()
            ));
        }
        for image in entry.images.iter().filter(|i| i.dimensions.is_none()) {
            lines.push(format!(
                "{}Suspect: {} (unreadable dimensions)",
                indent(1),
                image.filename
            ));
        }
        if entry.word_count() == 0 {
            lines.push(format!("{}Warning: no words after filtering", indent(1)));
        }
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// Build / batch / combined
// ============================================================================

pub fn format_document_output(
    doc: &Document,
    html_path: &Path,
    pdf_path: Option<&Path>,
) -> Vec<String> {
    let placeholders = doc.cell_count() - doc.image_count();
    let mut lines = vec![format!(
        "{} ({}, {}, {})",
        doc.title,
        count_noun(doc.pages.len(), "page"),
        count_noun(doc.image_count(), "image"),
        count_noun(placeholders, "placeholder"),
    )];
    lines.push(format!("{}→ {}", indent(1), html_path.display()));
    if let Some(pdf) = pdf_path {
        lines.push(format!("{}→ {}", indent(1), pdf.display()));
    }
    lines
}

pub fn print_document_output(doc: &Document, html_path: &Path, pdf_path: Option<&Path>) {
    for line in format_document_output(doc, html_path, pdf_path) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;
    use crate::test_helpers::{entry_with_words, sample_root};
    use crate::types::{GridCell, Page};
    use std::path::PathBuf;

    #[test]
    fn scan_output_lists_wordlists_with_counts() {
        let tmp = sample_root();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest);

        assert_eq!(lines[0], "Wordlists");
        assert_eq!(lines[1], "001 (5 words, 2 images)");
        assert_eq!(lines[2], "    Source: 001.txt");
        assert_eq!(lines[3], "    Images: 001/");
        assert!(lines.contains(&"002 (2 words, no images)".to_string()));
    }

    #[test]
    fn scan_output_flags_unreadable_images() {
        let tmp = sample_root();
        std::fs::write(tmp.path().join("001").join("002.png"), b"garbage").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest);

        assert!(
            lines.contains(&"    Suspect: 002.png (unreadable dimensions)".to_string()),
            "lines: {lines:?}"
        );
    }

    #[test]
    fn scan_output_warns_on_empty_wordlist() {
        let tmp = sample_root();
        std::fs::write(tmp.path().join("003.txt"), "\n\n").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest);

        assert!(lines.contains(&"003 (0 words, no images)".to_string()));
        assert!(lines.contains(&"    Warning: no words after filtering".to_string()));
    }

    #[test]
    fn scan_output_handles_no_wordlists() {
        let manifest = Manifest {
            wordlists: vec![],
            config: crate::config::GridConfig::default(),
        };
        assert_eq!(format_scan_output(&manifest), vec!["No wordlists found"]);
    }

    #[test]
    fn document_output_summarizes_and_lists_files() {
        let doc = Document {
            title: "Word Reference Grid - 001".to_string(),
            pages: vec![Page {
                number: 1,
                cells: vec![
                    GridCell {
                        index: 1,
                        word: "a".into(),
                        image: None,
                    },
                    GridCell {
                        index: 2,
                        word: "b".into(),
                        image: None,
                    },
                ],
            }],
        };
        let html = PathBuf::from("output/wordlist_001.html");
        let pdf = PathBuf::from("output/wordlist_001.pdf");

        let lines = format_document_output(&doc, &html, Some(&pdf));
        assert_eq!(
            lines[0],
            "Word Reference Grid - 001 (1 page, 0 images, 2 placeholders)"
        );
        assert_eq!(lines[1], "    → output/wordlist_001.html");
        assert_eq!(lines[2], "    → output/wordlist_001.pdf");
    }

    #[test]
    fn document_output_html_only() {
        let doc = Document {
            title: "T".to_string(),
            pages: vec![],
        };
        let html = PathBuf::from("out.html");
        let lines = format_document_output(&doc, &html, None);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "T (0 pages, 0 images, 0 placeholders)");
    }

    #[test]
    fn entry_header_singular_counts() {
        let entry = entry_with_words("005", &["only"]);
        assert_eq!(entry_header(&entry), "005 (1 word, no images)");
    }
}
