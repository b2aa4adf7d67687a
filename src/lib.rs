//! # wordgrid
//!
//! An A4 word-grid generator. Your filesystem is the data source: numbered
//! text files are wordlists, sibling numbered directories hold one image
//! per word position, and each wordlist becomes a paginated print document
//! with one word per cell, 32 cells per page in a fixed 4×8 grid.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      wordlists/  →  Manifest    (filesystem → structured data)
//! 2. Compose   Manifest    →  Document    (cells, embedded images, pages)
//! 3. Render    Document    →  HTML → PDF  (maud, then headless Chrome)
//! ```
//!
//! There are no on-disk intermediates: a document is built fresh per
//! invocation and the only persisted artifacts are the rendered HTML and
//! PDF. The stages stay separate so each is a pure function unit tests can
//! exercise without Chrome, and so `check` can run stage 1 alone.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — discovers `NNN.txt` wordlists and `NNN/` image dirs, loads words, produces the manifest |
//! | [`compose`] | Stage 2 — pairs words with encoded images, chunks pages, assembles the [`types::Document`] |
//! | [`render`] | Stage 3 — renders the document to self-contained HTML using Maud |
//! | [`pdf`] | HTML → PDF through headless Chrome (`Page.printToPDF`) |
//! | [`encode`] | Image resolution by zero-padded position + base64 data-URI embedding |
//! | [`paginate`] | Fixed-size page chunking (4×8 = 32 cells per page) |
//! | [`naming`] | Numeric filename convention: wordlist stems, image candidates, labels |
//! | [`config`] | `config.toml` loading, validation, and theme CSS generation |
//! | [`types`] | Shared document model (`GridCell`, `Page`, `Document`) |
//! | [`output`] | CLI output formatting — pipeline result display |
//!
//! # Design Decisions
//!
//! ## Self-Contained HTML
//!
//! Images are embedded as base64 data URIs rather than referenced by path.
//! The HTML artifact needs zero external fetches wherever it ends up, which
//! keeps the `file://` PDF rendering step deterministic and offline.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than a runtime template engine:
//!
//! - **Compile-time checking**: malformed markup is a build error.
//! - **XSS-safe by default**: words come from arbitrary user files and are
//!   auto-escaped on interpolation.
//! - **Zero runtime files**: no template directory to ship or drift.
//!
//! ## Chrome as the PDF Engine
//!
//! The grid layout leans on CSS grid, `@page` sizing, and text stroking,
//! all of which a real browser engine renders faithfully. The tool drives
//! headless Chrome over DevTools (`Page.printToPDF`) and treats it as an
//! external collaborator: the one hard external dependency, and the only
//! step `--html-only` skips.
//!
//! ## Graceful Image Degradation
//!
//! A word without an image is a normal outcome, not an error: the cell
//! renders a placeholder block. Even an image that exists but fails to read
//! only degrades its own cell (with a logged warning). A document never
//! fails because of its illustrations.

pub mod compose;
pub mod config;
pub mod encode;
pub mod naming;
pub mod output;
pub mod paginate;
pub mod pdf;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
