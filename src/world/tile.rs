//! Tile definitions
//!
//! A tile's full game-relevant state and the yields derived from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::biome::{Biome, BiomeType, ImpEffect, Yields};
use super::continent::ContinentId;
use super::point::Point;

/// Terrain improvement built on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Improvement {
    #[default]
    None,
    Irrigation,
    Mine,
}

/// Transport infrastructure on a tile. Ordered: a railroad is also a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Road {
    #[default]
    None,
    Road,
    Railroad,
}

/// Opaque handle for a settlement occupying a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImprovementError {
    #[error("{improvement:?} has no effect on {biome:?}")]
    NotApplicable {
        improvement: Improvement,
        biome: BiomeType,
    },
}

/// A single tile in the world
#[derive(Debug, Clone)]
pub struct Tile {
    biome: Biome,
    position: Point,
    pub resource: bool,
    pub hut: bool,
    pub land_value: u8,
    pub improvement: Improvement,
    pub road: Road,
    pub fortress: bool,
    pub city: Option<CityHandle>,
    pub(crate) continent: Option<ContinentId>,
}

impl Tile {
    pub fn new(biome: BiomeType, position: Point, resource: bool, hut: bool, land_value: u8) -> Self {
        Self {
            biome: Biome::new(biome),
            position,
            resource,
            hut,
            land_value,
            improvement: Improvement::None,
            road: Road::None,
            fortress: false,
            city: None,
            continent: None,
        }
    }

    pub fn biome(&self) -> Biome {
        self.biome
    }

    pub fn kind(&self) -> BiomeType {
        self.biome.kind()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Continent this tile belongs to. Always set once the world is built.
    pub fn continent(&self) -> Option<ContinentId> {
        self.continent
    }

    pub fn is_ocean(&self) -> bool {
        self.biome.kind().is_ocean()
    }

    pub fn attributes(&self) -> Yields {
        if self.resource {
            self.biome.special_attributes()
        } else {
            self.biome.base_attributes()
        }
    }

    pub fn food(&self) -> u8 {
        let (food, _, _) = self.attributes();
        match (self.improvement, self.biome.irrigation()) {
            (Improvement::Irrigation, ImpEffect::FlatBonus(n)) => food + n,
            _ => food,
        }
    }

    pub fn shields(&self) -> u8 {
        let (_, shields, _) = self.attributes();
        match (self.improvement, self.biome.mine()) {
            (Improvement::Mine, ImpEffect::FlatBonus(n)) => shields + n,
            _ => shields,
        }
    }

    pub fn trade(&self) -> u8 {
        let (_, _, trade) = self.attributes();
        if self.road >= Road::Road {
            trade + self.biome.road_trade()
        } else {
            trade
        }
    }

    pub fn defense_bonus(&self) -> f32 {
        let (open, fortified) = self.biome.defense_bonus();
        if self.fortress {
            fortified
        } else {
            open
        }
    }

    pub fn movement_cost(&self) -> u8 {
        self.biome.movement_cost()
    }

    /// Irrigate the tile, or convert it when irrigation changes the biome
    pub fn irrigate(&mut self) -> Result<(), ImprovementError> {
        self.improve(Improvement::Irrigation, self.biome.irrigation())
    }

    /// Mine the tile, or convert it when mining changes the biome
    pub fn mine(&mut self) -> Result<(), ImprovementError> {
        self.improve(Improvement::Mine, self.biome.mine())
    }

    fn improve(&mut self, improvement: Improvement, effect: ImpEffect) -> Result<(), ImprovementError> {
        match effect {
            ImpEffect::FlatBonus(_) => {
                self.improvement = improvement;
                Ok(())
            }
            ImpEffect::BiomeChange(target) => {
                debug_assert_eq!(target.is_ocean(), self.is_ocean());
                self.biome = Biome::new(target);
                self.improvement = Improvement::None;
                Ok(())
            }
            ImpEffect::NoEffect => Err(ImprovementError::NotApplicable {
                improvement,
                biome: self.kind(),
            }),
        }
    }

    /// Preview glyph. Huts and resources override the biome glyph.
    pub fn glyph(&self) -> char {
        if self.city.is_some() {
            '@'
        } else if self.hut {
            '^'
        } else if self.resource && self.kind() != BiomeType::Rivers {
            self.kind().glyph().to_ascii_uppercase()
        } else {
            self.kind().glyph()
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        self.kind().color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(kind: BiomeType) -> Tile {
        Tile::new(kind, Point::new(4, 4), false, false, 0)
    }

    #[test]
    fn test_irrigation_adds_food() {
        let mut t = tile(BiomeType::Plains);
        assert_eq!(t.food(), 1);
        t.irrigate().unwrap();
        assert_eq!(t.improvement, Improvement::Irrigation);
        assert_eq!(t.food(), 2);
    }

    #[test]
    fn test_mine_adds_shields() {
        let mut t = tile(BiomeType::Hills);
        t.mine().unwrap();
        assert_eq!(t.shields(), 3);
    }

    #[test]
    fn test_biome_change() {
        let mut t = tile(BiomeType::Swamp);
        t.irrigate().unwrap();
        assert_eq!(t.kind(), BiomeType::Grassland);
        assert_eq!(t.improvement, Improvement::None);
    }

    #[test]
    fn test_not_applicable() {
        let mut t = tile(BiomeType::Ocean);
        assert!(matches!(
            t.mine(),
            Err(ImprovementError::NotApplicable { improvement: Improvement::Mine, biome: BiomeType::Ocean })
        ));
    }

    #[test]
    fn test_road_trade() {
        let mut t = tile(BiomeType::Grassland);
        assert_eq!(t.trade(), 0);
        t.road = Road::Railroad;
        assert_eq!(t.trade(), 1);
    }

    #[test]
    fn test_resource_uses_special_attributes() {
        let mut t = tile(BiomeType::Ocean);
        t.resource = true;
        assert_eq!(t.attributes(), (3, 0, 2));
        assert_eq!(t.glyph(), '~');
    }

    #[test]
    fn test_fortress_defense() {
        let mut t = tile(BiomeType::Mountains);
        assert_eq!(t.defense_bonus(), 2.0);
        t.fortress = true;
        assert_eq!(t.defense_bonus(), 5.0);
    }
}
