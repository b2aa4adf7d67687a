use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordgrid::config::GridConfig;
use wordgrid::types::Document;
use wordgrid::{compose, config, output, pdf, render, scan};

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(about = "A4 word grid generator for wordlists with numbered images")]
#[command(long_about = "\
A4 word grid generator for wordlists with numbered images

Each wordlist becomes a paginated document of 4×8 grids: one cell per word,
32 cells per page, illustrated when a matching numbered image exists. Output
is a self-contained HTML file plus a PDF rendered through headless Chrome.

Directory structure expected:

  wordlists/
  ├── config.toml      # Tool configuration (optional)
  ├── 001.txt          # First wordlist, one word per line
  ├── 001/             # Images for the first wordlist
  │   ├── 001.png      # Image for the first word
  │   ├── 002.jpg      # Image for the second word
  │   └── ...
  ├── 002.txt          # Second wordlist
  ├── 002/
  └── ...

Images are matched by 1-based word position, zero-padded to 3 digits, trying
.png, .jpg, .jpeg in that order. Positions without a matching file render a
placeholder block.

Run 'wordgrid gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Wordlists source directory
    #[arg(long, default_value = "wordlists", global = true)]
    source: PathBuf,

    /// Output directory for generated files
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    /// Document title (overrides config.toml)
    #[arg(long, global = true)]
    title: Option<String>,

    /// Write HTML only, skip PDF rendering
    #[arg(long, global = true)]
    html_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a single wordlist file
    Build {
        /// Wordlist text file
        wordlist: PathBuf,
        /// Images directory (default: sibling directory named by the
        /// wordlist stem)
        #[arg(long)]
        images: Option<PathBuf>,
    },
    /// Render every wordlist in the source directory
    Batch,
    /// Render all wordlists into one combined document
    Combined,
    /// Validate the source directory without rendering
    Check {
        /// Dump the scan manifest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Command::Build { wordlist, images } => {
            let config_root = wordlist
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let mut config = config::load_config(config_root)?;
            apply_title_override(&mut config, &cli);

            let entry = scan::scan_wordlist(wordlist, images.as_deref())?;
            let doc = compose::compose(&entry, &config.title)?;
            let stem = format!("wordlist_{}", entry.id);
            write_document(&doc, &stem, &config, &cli)?;
        }
        Command::Batch => {
            let mut manifest = scan::scan(&cli.source)?;
            apply_title_override(&mut manifest.config, &cli);
            output::print_scan_output(&manifest);
            if manifest.wordlists.is_empty() {
                return Ok(());
            }

            println!("==> Rendering {} wordlists", manifest.wordlists.len());
            for entry in &manifest.wordlists {
                let doc = match compose::compose(entry, &manifest.config.title) {
                    Ok(doc) => doc,
                    Err(err) => {
                        tracing::warn!(wordlist = %entry.id, %err, "skipping");
                        continue;
                    }
                };
                let stem = format!("wordlist_{}", entry.id);
                if let Err(err) = write_document(&doc, &stem, &manifest.config, &cli) {
                    // One broken wordlist must not sink the batch.
                    tracing::error!(wordlist = %entry.id, %err, "failed, continuing");
                }
            }
        }
        Command::Combined => {
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            if manifest.wordlists.is_empty() {
                return Ok(());
            }

            let doc = compose::compose_combined(&manifest.wordlists);
            write_document(&doc, "combined_wordlists", &manifest.config, &cli)?;
        }
        Command::Check { json } => {
            let manifest = scan::scan(&cli.source)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_scan_output(&manifest);
                println!("==> Source is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Render a document to `<output>/<stem>.html` (and `.pdf` unless
/// `--html-only`), then print the result summary.
fn write_document(
    doc: &Document,
    stem: &str,
    config: &GridConfig,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(&cli.output)?;

    let html_path = cli.output.join(format!("{stem}.html"));
    let html = render::render_document(doc, config);
    fs::write(&html_path, &html)?;

    let pdf_path = if cli.html_only {
        None
    } else {
        let path = cli.output.join(format!("{stem}.pdf"));
        pdf::render_pdf(&html_path, &path, &config.renderer)?;
        Some(path)
    };

    output::print_document_output(doc, &html_path, pdf_path.as_deref());
    Ok(())
}

/// `--title` beats `config.toml`.
fn apply_title_override(config: &mut GridConfig, cli: &Cli) {
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordgrid=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
