//! World module
//!
//! Contains the tile grid, continents, biomes, and procedural generation.

pub mod biome;
pub mod continent;
pub mod generation;
pub mod layer;
pub mod map;
pub mod point;
pub mod start;
pub mod tile;

pub use biome::{Biome, BiomeType, ImpEffect, Yields};
pub use continent::{Continent, ContinentId};
pub use generation::{GenerationError, GenerationReport, WorldGenerator};
pub use layer::Layer;
pub use map::World;
pub use point::{Point, HEIGHT, TILE_COUNT, WIDTH};
pub use start::find_start_position;
pub use tile::{CityHandle, Improvement, ImprovementError, Road, Tile};
