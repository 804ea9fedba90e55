//! Civgen - Toroidal strategy map generator
//!
//! Grows continents, shapes climate, carves rivers and scores land
//! for settlement on a fixed 80x50 world that wraps east to west.

pub mod data;
pub mod render;
pub mod world;

// Re-export commonly used types
pub use data::{SettingsError, WorldSettings};
pub use world::{find_start_position, BiomeType, GenerationError, Tile, World, WorldGenerator};
