//! HTML document generation.
//!
//! Stage 3 of the pipeline. Renders a composed [`Document`] into a single
//! self-contained HTML string: every image is an embedded data URI, the
//! stylesheet is inlined, and nothing references the filesystem. The PDF
//! renderer consumes this HTML unchanged, and it doubles as a debug
//! artifact you can open in any browser.
//!
//! ## Page Markup
//!
//! Each page is a `section.page` holding the 4×8 grid and a footer page
//! counter. Pages after the first are preceded by a `div.page-break` that
//! forces a print page boundary.
//!
//! ## Cell Variants
//!
//! - **Image cell**: the embedded image as a full-bleed CSS background,
//!   the position label in the corner, the word overlaid in outlined text.
//! - **Placeholder cell**: gradient background, dark word text — a word
//!   whose position resolved no image.
//! - **Blank cell**: padding on a partial final page. No label, no word;
//!   exists only to keep the grid rectangle fixed.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Interpolation is auto-escaped, which matters here: words come from
//! arbitrary user files.
//!
//! ## Determinism
//!
//! Rendering is a pure function of the document and config. Unchanged
//! inputs produce byte-identical HTML.

use crate::config::{self, GridConfig};
use crate::naming::{index_label, page_label};
use crate::types::{CELLS_PER_PAGE, Document, GridCell, Page};
use maud::{DOCTYPE, Markup, html};

const CSS_STATIC: &str = include_str!("../static/grid.css");

/// Render a complete document to an HTML string.
pub fn render_document(doc: &Document, config: &GridConfig) -> String {
    let theme_css = config::generate_theme_css(&config.theme);
    let css = format!("{}\n\n{}", theme_css, CSS_STATIC);
    let total = doc.pages.len();

    let content = html! {
        @for page in &doc.pages {
            @if page.number > 1 {
                div.page-break {}
            }
            (render_page(page, total))
        }
    };

    base_document(&doc.title, &css, content).into_string()
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders one page: the fixed 4×8 grid plus the footer page counter.
///
/// Partial pages are padded with blank cells up to [`CELLS_PER_PAGE`].
fn render_page(page: &Page, total_pages: usize) -> Markup {
    let blanks = CELLS_PER_PAGE.saturating_sub(page.cells.len());
    html! {
        section.page {
            div.grid {
                @for cell in &page.cells {
                    (render_cell(cell))
                }
                @for _ in 0..blanks {
                    div.cell.no-image.blank {}
                }
            }
            div.footer {
                (page_label(page.number)) "/" (page_label(total_pages))
            }
        }
    }
}

/// Renders one cell: image background or placeholder gradient.
fn render_cell(cell: &GridCell) -> Markup {
    // Multi-word entries break onto one line per word inside the cell
    // (white-space: pre-line in the stylesheet).
    let word = cell.word.replace(' ', "\n");
    match &cell.image {
        Some(image) => {
            let background = format!("background-image: url('{}');", image.data_uri);
            html! {
                div.cell style=(background) {
                    div.index { (index_label(cell.index)) }
                    div.word { (word) }
                }
            }
        }
        None => html! {
            div.cell.no-image {
                div.index { (index_label(cell.index)) }
                div.word.no-image-text { (word) }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EncodedImage;
    use std::path::PathBuf;

    fn cell(index: usize, word: &str) -> GridCell {
        GridCell {
            index,
            word: word.to_string(),
            image: None,
        }
    }

    fn image_cell(index: usize, word: &str) -> GridCell {
        GridCell {
            index,
            word: word.to_string(),
            image: Some(EncodedImage {
                source: PathBuf::from(format!("{index:03}.png")),
                data_uri: "data:image/png;base64,aGVsbG8=".to_string(),
            }),
        }
    }

    fn document(cells: Vec<GridCell>) -> Document {
        Document {
            title: "Test Grid".to_string(),
            pages: crate::paginate::paginate(cells),
        }
    }

    #[test]
    fn image_cell_embeds_data_uri_background() {
        let html = render_cell(&image_cell(1, "apple")).into_string();
        assert!(html.contains("background-image: url('data:image/png;base64,aGVsbG8=')"));
        assert!(!html.contains("no-image"));
    }

    #[test]
    fn placeholder_cell_has_no_image_class() {
        let html = render_cell(&cell(1, "apple")).into_string();
        assert!(html.contains("no-image"));
        assert!(html.contains("no-image-text"));
        assert!(!html.contains("background-image"));
    }

    #[test]
    fn cell_index_label_is_zero_padded() {
        let html = render_cell(&cell(7, "apple")).into_string();
        assert!(html.contains(">0007<"));
    }

    #[test]
    fn multi_word_entries_break_per_word() {
        let html = render_cell(&cell(1, "acoustic guitar")).into_string();
        assert!(html.contains("acoustic\nguitar"));
    }

    #[test]
    fn words_are_escaped() {
        let html = render_cell(&cell(1, "<script>alert('x')</script>")).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn partial_page_pads_to_full_grid() {
        let cells: Vec<GridCell> = (1..=16).map(|i| cell(i, "w")).collect();
        let doc = document(cells);
        let html = render_document(&doc, &GridConfig::default());

        assert_eq!(html.matches("cell no-image blank").count(), 16);
        // 16 real placeholders + 16 blanks, all inside one grid
        assert_eq!(html.matches("class=\"grid\"").count(), 1);
        assert_eq!(html.matches("word no-image-text").count(), 16);
    }

    #[test]
    fn full_page_has_no_blanks() {
        let cells: Vec<GridCell> = (1..=32).map(|i| cell(i, "w")).collect();
        let doc = document(cells);
        let html = render_document(&doc, &GridConfig::default());
        assert_eq!(html.matches("blank").count(), 0);
    }

    #[test]
    fn pages_after_first_get_page_breaks() {
        let cells: Vec<GridCell> = (1..=33).map(|i| cell(i, "w")).collect();
        let doc = document(cells);
        let html = render_document(&doc, &GridConfig::default());

        assert_eq!(html.matches("class=\"page-break\"").count(), 1);
        assert_eq!(html.matches("class=\"page\"").count(), 2);
    }

    #[test]
    fn footer_counts_pages() {
        let cells: Vec<GridCell> = (1..=33).map(|i| cell(i, "w")).collect();
        let doc = document(cells);
        let html = render_document(&doc, &GridConfig::default());

        assert!(html.contains("001/002"));
        assert!(html.contains("002/002"));
    }

    #[test]
    fn empty_document_renders_no_pages() {
        let doc = document(vec![]);
        let html = render_document(&doc, &GridConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("class=\"page\""));
        assert!(html.contains("<title>Test Grid</title>"));
    }

    #[test]
    fn document_title_in_head() {
        let doc = document(vec![cell(1, "w")]);
        let html = render_document(&doc, &GridConfig::default());
        assert!(html.contains("<title>Test Grid</title>"));
    }

    #[test]
    fn theme_colors_injected_into_css() {
        let mut config = GridConfig::default();
        config.theme.word_color = "#abcdef".to_string();
        let doc = document(vec![cell(1, "w")]);
        let html = render_document(&doc, &config);
        assert!(html.contains("--word-color: #abcdef"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let cells: Vec<GridCell> = (1..=40)
            .map(|i| {
                if i % 3 == 0 {
                    image_cell(i, "img")
                } else {
                    cell(i, "plain")
                }
            })
            .collect();
        let doc = document(cells);
        let config = GridConfig::default();

        let first = render_document(&doc, &config);
        let second = render_document(&doc, &config);
        assert_eq!(first, second);
    }
}
