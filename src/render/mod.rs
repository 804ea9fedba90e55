//! World preview output
//!
//! Supports multiple output formats:
//! - ASCII: one glyph per tile, optionally coloured
//! - Summary: human-readable counts
//! - JSON: the same summary, machine-readable

pub mod ascii;
pub mod mode;
pub mod summary;

pub use ascii::{render_ascii, write_ascii};
pub use mode::{color_supported, OutputFormat};
pub use summary::{ContinentSummary, WorldSummary};
