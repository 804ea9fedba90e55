//! External configuration
//!
//! World settings are read from RON files, with fallback to built-in defaults.

pub mod settings;

pub use settings::{settings_path, SettingsError, WorldSettings};
