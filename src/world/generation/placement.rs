//! Per-cell derivation of resources, huts, and land value
//!
//! Resources and huts follow a fixed positional pattern over 4x4 blocks,
//! shifted by a per-generator seed.

use super::climate::Biomes;
use crate::world::biome::{Biome, BiomeType};
use crate::world::point::{Point, BIG_FAT_CROSS_WITH_CENTRE, HEIGHT};

/// Land value of sites that are not worth settling
pub const UNSETTLEABLE: u8 = 0;
/// Lowest land value a settleable site can have
pub const MIN_LAND_VALUE: u8 = 8;
/// Highest land value
pub const MAX_LAND_VALUE: u8 = 15;

/// Positional placement pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    seed: i32,
}

impl Placement {
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Pattern slot of a point within its 4x4 block, and the block's target slot
    fn slots(&self, Point { x, y }: Point, offset: i32) -> (i32, i32) {
        let slot = ((x & 3) << 2) + (y & 3);
        let target = (x >> 2) * 13 + (y >> 2) * 11 + self.seed + offset;
        (slot, target)
    }

    fn near_pole(y: i32) -> bool {
        y <= 1 || y >= HEIGHT - 2
    }

    pub fn has_resource(&self, p: Point, biome: BiomeType) -> bool {
        if Self::near_pole(p.y) {
            return false;
        }
        match biome {
            BiomeType::Grassland | BiomeType::Rivers => matches!((p.x + p.y) % 4, 0 | 3),
            _ => {
                let (slot, target) = self.slots(p, 0);
                slot == target & 0xF
            }
        }
    }

    pub fn has_hut(&self, p: Point, biome: BiomeType) -> bool {
        if Self::near_pole(p.y) || biome == BiomeType::Ocean {
            return false;
        }
        let (slot, target) = self.slots(p, 8);
        slot == target & 0x1F
    }

    /// Settlement desirability of `p`, in `{0} ∪ [8, 15]`
    pub fn calc_land_value(&self, biomes: &Biomes, p: Point) -> u8 {
        let biome = biomes.get(p);
        if !biome.is_settleable() {
            return UNSETTLEABLE;
        }

        let weights = biomes.each_relative(p, &BIG_FAT_CROSS_WITH_CENTRE, |kind, q| {
            let resource = self.has_resource(q, kind);
            let score = Biome::new(kind);
            let value = if resource && matches!(kind, BiomeType::Grassland | BiomeType::Rivers) {
                2 + score.score(false)
            } else {
                score.score(resource)
            };
            let (dx, dy) = p.delta(q);
            if dx == 0 && dy == 0 {
                value * 4
            } else if dx.abs() <= 1 && dy.abs() <= 1 {
                value * 2
            } else {
                value
            }
        });
        let mut total: i32 = weights.into_iter().sum();

        if !self.has_resource(p, biome) && matches!(biome, BiomeType::Grassland | BiomeType::Rivers) {
            total -= 16;
        }
        total -= 120;
        if total < 0 {
            return MIN_LAND_VALUE;
        }

        let scaled = (total / 8).clamp(1, 15) / 2;
        MIN_LAND_VALUE + scaled as u8
    }
}
