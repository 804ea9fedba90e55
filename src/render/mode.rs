//! Output format selection and terminal colour detection

use std::env;

use clap::ValueEnum;

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Glyph per tile, row by row
    #[default]
    Ascii,

    /// Tile, continent and generation counts
    Summary,

    /// Summary as JSON
    Json,
}

impl OutputFormat {
    /// Get a human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Ascii => "ASCII",
            OutputFormat::Summary => "Summary",
            OutputFormat::Json => "JSON",
        }
    }

    /// Check if this format can carry colour escapes
    pub fn supports_color(&self) -> bool {
        matches!(self, OutputFormat::Ascii)
    }
}

/// Check if the terminal should receive colour escapes
pub fn color_supported() -> bool {
    // https://no-color.org
    if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
