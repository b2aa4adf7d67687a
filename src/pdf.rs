//! PDF rendering through headless Chrome.
//!
//! The one hard external dependency: Chrome rasterizes the self-contained
//! HTML artifact to PDF via `Page.printToPDF`. The core has no control over
//! Chrome's failure modes beyond surfacing the reported error — there are
//! no retries.
//!
//! The browser honors the document's own `@page { size: A4; margin: 1cm }`
//! (`prefer_css_page_size`) and suppresses its header/footer chrome; the
//! document draws its own page counters.

use crate::config::RendererConfig;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Chrome rendering failed: {0}")]
    Chrome(anyhow::Error),
}

/// Render an HTML file to PDF bytes and write them to `pdf_path`.
///
/// `html_path` must already exist on disk — the same artifact that ships
/// alongside the PDF.
pub fn render_pdf(
    html_path: &Path,
    pdf_path: &Path,
    renderer: &RendererConfig,
) -> Result<(), PdfError> {
    let html_path = html_path.canonicalize()?;
    let url = format!("file://{}", html_path.display());

    let bytes = print_to_pdf(&url, renderer).map_err(PdfError::Chrome)?;
    std::fs::write(pdf_path, bytes)?;
    Ok(())
}

fn print_to_pdf(url: &str, renderer: &RendererConfig) -> anyhow::Result<Vec<u8>> {
    let browser = Browser::new(LaunchOptions {
        path: renderer.chrome_binary.clone(),
        idle_browser_timeout: Duration::from_secs(120),
        ..Default::default()
    })?;

    let tab = browser.new_tab()?;
    tab.navigate_to(url)?.wait_until_navigated()?;

    tab.print_to_pdf(Some(PrintToPdfOptions {
        print_background: Some(renderer.print_background),
        prefer_css_page_size: Some(true),
        display_header_footer: Some(false),
        ..Default::default()
    }))
}
