//! Tool configuration module.
//!
//! Handles loading and validating an optional `config.toml` placed in the
//! wordlists source root. Stock defaults apply when the file is absent;
//! user files are sparse and override only the keys they name.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Base document title. Per-wordlist documents append " - <id>".
//! title = "Word Reference Grid"
//!
//! [theme]
//! word_color = "#ffffff"        # Word text over images
//! word_outline = "#000000"      # Stroke behind word text over images
//! muted_text = "#2c3e50"        # Word text in placeholder cells
//! placeholder_start = "#f8f9fa" # Placeholder gradient start
//! placeholder_end = "#e9ecef"   # Placeholder gradient end
//! footer_color = "#666666"      # Page counter color
//!
//! [renderer]
//! # chrome_binary = "/usr/bin/google-chrome"  # Omit to auto-detect
//! print_background = true       # Rasterize cell backgrounds into the PDF
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Base document title. Per-wordlist documents are titled
    /// `"<title> - <id>"`.
    #[serde(default = "default_title")]
    pub title: String,
    /// Grid colors, emitted as CSS custom properties.
    pub theme: ThemeConfig,
    /// PDF renderer settings.
    pub renderer: RendererConfig,
}

fn default_title() -> String {
    "Word Reference Grid".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: ThemeConfig::default(),
            renderer: RendererConfig::default(),
        }
    }
}

impl GridConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        for (key, value) in [
            ("theme.word_color", &self.theme.word_color),
            ("theme.word_outline", &self.theme.word_outline),
            ("theme.muted_text", &self.theme.muted_text),
            ("theme.placeholder_start", &self.theme.placeholder_start),
            ("theme.placeholder_end", &self.theme.placeholder_end),
            ("theme.footer_color", &self.theme.footer_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a hex color like #rrggbb, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Grid color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Word text color over image backgrounds.
    pub word_color: String,
    /// Stroke color outlining word text over image backgrounds.
    pub word_outline: String,
    /// Word text color in placeholder cells.
    pub muted_text: String,
    /// Placeholder gradient start color.
    pub placeholder_start: String,
    /// Placeholder gradient end color.
    pub placeholder_end: String,
    /// Footer page-counter color.
    pub footer_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            word_color: "#ffffff".to_string(),
            word_outline: "#000000".to_string(),
            muted_text: "#2c3e50".to_string(),
            placeholder_start: "#f8f9fa".to_string(),
            placeholder_end: "#e9ecef".to_string(),
            footer_color: "#666666".to_string(),
        }
    }
}

/// PDF renderer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Path to the Chrome/Chromium binary. When absent, headless_chrome
    /// falls back to its own detection.
    pub chrome_binary: Option<PathBuf>,
    /// Whether Chrome rasterizes backgrounds (cell images and gradients)
    /// into the PDF. Disabling produces text-only proofs.
    pub print_background: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            chrome_binary: None,
            print_background: true,
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no file exists. Rejects unknown keys and
/// validates the result.
pub fn load_config(root: &Path) -> Result<GridConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: GridConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        GridConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wordgrid Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the wordlists source directory:
#   wordlists/config.toml
#
# Unknown keys will cause an error.

# Base document title. Per-wordlist documents are titled "<title> - <id>";
# the combined document is always titled "Combined Wordlists".
title = "Word Reference Grid"

# ---------------------------------------------------------------------------
# Grid colors
# ---------------------------------------------------------------------------
[theme]
# Word text over image backgrounds, and the stroke that keeps it readable.
word_color = "#ffffff"
word_outline = "#000000"

# Word text in cells without an image.
muted_text = "#2c3e50"

# Gradient shown in cells without an image.
placeholder_start = "#f8f9fa"
placeholder_end = "#e9ecef"

# Page counter at the bottom of each page.
footer_color = "#666666"

# ---------------------------------------------------------------------------
# PDF renderer
# ---------------------------------------------------------------------------
[renderer]
# Path to the Chrome/Chromium binary. Omit to auto-detect.
# chrome_binary = "/usr/bin/google-chrome"

# Rasterize cell backgrounds (images, gradients) into the PDF.
print_background = true
"##
}

/// Generate CSS custom properties from theme config.
///
/// Injected above the static stylesheet so `var(--word-color)` etc. resolve.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --word-color: {word_color};
    --word-outline: {word_outline};
    --muted-text: {muted_text};
    --placeholder-start: {placeholder_start};
    --placeholder-end: {placeholder_end};
    --footer-color: {footer_color};
}}"#,
        word_color = theme.word_color,
        word_outline = theme.word_outline,
        muted_text = theme.muted_text,
        placeholder_start = theme.placeholder_start,
        placeholder_end = theme.placeholder_end,
        footer_color = theme.footer_color,
    )
}
