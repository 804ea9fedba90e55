//! Biome definitions
//!
//! Terrain categories and the gameplay constants attached to each.

use serde::{Deserialize, Serialize};

/// Terrain categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeType {
    Arctic,
    Desert,
    Forest,
    Grassland,
    Hills,
    Jungle,
    Mountains,
    Ocean,
    Plains,
    Rivers,
    Swamp,
    Tundra,
}

impl BiomeType {
    /// Every variant, in declaration order
    pub const ALL: [BiomeType; 12] = [
        BiomeType::Arctic,
        BiomeType::Desert,
        BiomeType::Forest,
        BiomeType::Grassland,
        BiomeType::Hills,
        BiomeType::Jungle,
        BiomeType::Mountains,
        BiomeType::Ocean,
        BiomeType::Plains,
        BiomeType::Rivers,
        BiomeType::Swamp,
        BiomeType::Tundra,
    ];

    pub fn is_ocean(&self) -> bool {
        matches!(self, BiomeType::Ocean)
    }

    /// Biomes a settlement site can be scored on
    pub fn is_settleable(&self) -> bool {
        matches!(self, BiomeType::Plains | BiomeType::Grassland | BiomeType::Rivers)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BiomeType::Arctic => "Arctic",
            BiomeType::Desert => "Desert",
            BiomeType::Forest => "Forest",
            BiomeType::Grassland => "Grassland",
            BiomeType::Hills => "Hills",
            BiomeType::Jungle => "Jungle",
            BiomeType::Mountains => "Mountains",
            BiomeType::Ocean => "Ocean",
            BiomeType::Plains => "Plains",
            BiomeType::Rivers => "Rivers",
            BiomeType::Swamp => "Swamp",
            BiomeType::Tundra => "Tundra",
        }
    }

    /// Preview glyph
    pub fn glyph(&self) -> char {
        match self {
            BiomeType::Arctic => '*',
            BiomeType::Desert => 'd',
            BiomeType::Forest => 'f',
            BiomeType::Grassland => 'g',
            BiomeType::Hills => 'h',
            BiomeType::Jungle => 'j',
            BiomeType::Mountains => 'M',
            BiomeType::Ocean => '~',
            BiomeType::Plains => 'p',
            BiomeType::Rivers => 'r',
            BiomeType::Swamp => 's',
            BiomeType::Tundra => 't',
        }
    }

    /// Preview colour (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            BiomeType::Arctic => (235, 240, 250),
            BiomeType::Desert => (225, 200, 120),
            BiomeType::Forest => (30, 110, 40),
            BiomeType::Grassland => (110, 190, 70),
            BiomeType::Hills => (150, 130, 80),
            BiomeType::Jungle => (20, 140, 90),
            BiomeType::Mountains => (120, 110, 105),
            BiomeType::Ocean => (30, 60, 160),
            BiomeType::Plains => (190, 180, 90),
            BiomeType::Rivers => (70, 130, 230),
            BiomeType::Swamp => (80, 100, 70),
            BiomeType::Tundra => (170, 175, 160),
        }
    }
}

/// Effect of building an improvement on a biome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpEffect {
    /// The improvement cannot be built here
    NoEffect,
    /// The improvement adds a flat amount to one yield
    FlatBonus(u8),
    /// Building the improvement converts the tile to another biome
    BiomeChange(BiomeType),
}

/// Yield triplet: (food, shields, trade)
pub type Yields = (u8, u8, u8);

/// Immutable lookup wrapper around a [`BiomeType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Biome(BiomeType);

impl Biome {
    pub const fn new(kind: BiomeType) -> Self {
        Self(kind)
    }

    pub fn kind(&self) -> BiomeType {
        self.0
    }

    /// Yields of a tile without a special resource
    pub fn base_attributes(&self) -> Yields {
        match self.0 {
            BiomeType::Arctic => (0, 0, 0),
            BiomeType::Desert => (0, 1, 0),
            BiomeType::Forest => (1, 2, 0),
            BiomeType::Grassland => (2, 0, 0),
            BiomeType::Hills => (1, 0, 0),
            BiomeType::Jungle => (1, 0, 0),
            BiomeType::Mountains => (0, 1, 0),
            BiomeType::Ocean => (1, 0, 2),
            BiomeType::Plains => (1, 1, 0),
            BiomeType::Rivers => (2, 0, 1),
            BiomeType::Swamp => (1, 0, 0),
            BiomeType::Tundra => (1, 0, 0),
        }
    }

    /// Yields of a tile carrying a special resource
    pub fn special_attributes(&self) -> Yields {
        match self.0 {
            BiomeType::Arctic => (2, 0, 0),
            BiomeType::Desert => (3, 1, 0),
            BiomeType::Forest => (3, 2, 0),
            BiomeType::Grassland => (2, 1, 0),
            BiomeType::Hills => (1, 2, 0),
            BiomeType::Jungle => (1, 0, 4),
            BiomeType::Mountains => (0, 1, 6),
            BiomeType::Ocean => (3, 0, 2),
            BiomeType::Plains => (1, 3, 0),
            BiomeType::Rivers => (2, 1, 1),
            BiomeType::Swamp => (1, 4, 0),
            BiomeType::Tundra => (3, 0, 0),
        }
    }

    pub fn movement_cost(&self) -> u8 {
        match self.0 {
            BiomeType::Mountains => 3,
            BiomeType::Arctic
            | BiomeType::Forest
            | BiomeType::Hills
            | BiomeType::Jungle
            | BiomeType::Swamp => 2,
            BiomeType::Desert
            | BiomeType::Grassland
            | BiomeType::Ocean
            | BiomeType::Plains
            | BiomeType::Rivers
            | BiomeType::Tundra => 1,
        }
    }

    /// Defence multipliers as (unfortified, fortified)
    pub fn defense_bonus(&self) -> (f32, f32) {
        match self.0 {
            BiomeType::Mountains => (2.0, 5.0),
            BiomeType::Hills => (1.0, 2.0),
            BiomeType::Forest | BiomeType::Jungle | BiomeType::Rivers | BiomeType::Swamp => {
                (0.5, 2.0)
            }
            BiomeType::Arctic
            | BiomeType::Desert
            | BiomeType::Grassland
            | BiomeType::Ocean
            | BiomeType::Plains
            | BiomeType::Tundra => (0.0, 1.0),
        }
    }

    pub fn irrigation(&self) -> ImpEffect {
        match self.0 {
            BiomeType::Desert
            | BiomeType::Grassland
            | BiomeType::Hills
            | BiomeType::Plains
            | BiomeType::Rivers => ImpEffect::FlatBonus(1),
            BiomeType::Forest => ImpEffect::BiomeChange(BiomeType::Plains),
            BiomeType::Jungle | BiomeType::Swamp => ImpEffect::BiomeChange(BiomeType::Grassland),
            BiomeType::Arctic | BiomeType::Mountains | BiomeType::Ocean | BiomeType::Tundra => {
                ImpEffect::NoEffect
            }
        }
    }

    pub fn mine(&self) -> ImpEffect {
        match self.0 {
            BiomeType::Hills => ImpEffect::FlatBonus(3),
            BiomeType::Desert | BiomeType::Mountains => ImpEffect::FlatBonus(1),
            BiomeType::Grassland | BiomeType::Jungle | BiomeType::Plains | BiomeType::Swamp => {
                ImpEffect::BiomeChange(BiomeType::Forest)
            }
            BiomeType::Arctic
            | BiomeType::Forest
            | BiomeType::Ocean
            | BiomeType::Rivers
            | BiomeType::Tundra => ImpEffect::NoEffect,
        }
    }

    /// Trade bonus granted by a road or railroad
    pub fn road_trade(&self) -> u8 {
        match self.0 {
            BiomeType::Desert | BiomeType::Grassland | BiomeType::Ocean | BiomeType::Plains => 1,
            _ => 0,
        }
    }

    /// Settlement heuristic used by land value estimation
    pub fn score(&self, has_resource: bool) -> i32 {
        let (plain, special) = match self.0 {
            BiomeType::Arctic => (0, 6),
            BiomeType::Desert => (3, 12),
            BiomeType::Forest => (7, 13),
            BiomeType::Grassland => (8, 8),
            BiomeType::Hills => (6, 10),
            BiomeType::Jungle => (3, 3),
            BiomeType::Mountains => (3, 3),
            BiomeType::Ocean => (5, 11),
            BiomeType::Plains => (7, 11),
            BiomeType::Rivers => (7, 7),
            BiomeType::Swamp => (3, 3),
            BiomeType::Tundra => (3, 9),
        };
        if has_resource {
            special
        } else {
            plain
        }
    }
}

impl From<BiomeType> for Biome {
    fn from(kind: BiomeType) -> Self {
        Self::new(kind)
    }
}
