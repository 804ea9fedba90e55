//! Temperature and climate stages
//!
//! Temperature turns land thickness into a first biome guess by latitude.
//! Climate then carries a per-row wetness accumulator across the map in two
//! sweeps; cells written by a sweep are read again by the same sweep.

use rand::rngs::StdRng;

use super::irand;
use super::landmass::Landmass;
use crate::world::biome::BiomeType;
use crate::world::layer::Layer;
use crate::world::point::{Point, HEIGHT, WIDTH};

pub type Biomes = Layer<BiomeType>;

/// Map thickness to biome
pub fn temperature_adjustments(rng: &mut StdRng, land: &Landmass, temperature: i32) -> Biomes {
    let mut biomes = Biomes::new(BiomeType::Ocean);

    for (p, thickness) in land.iter() {
        let biome = match thickness {
            0 => BiomeType::Ocean,
            1 => {
                let distance = (irand(rng, 8) + p.y - 29).abs() + 1 - temperature;
                let band = (distance as f64 / 6.0 + 1.0).floor() as i32;
                match band {
                    0 | 1 => BiomeType::Desert,
                    2 | 3 => BiomeType::Plains,
                    4 | 5 => BiomeType::Tundra,
                    _ => BiomeType::Arctic,
                }
            }
            2 => BiomeType::Mountains,
            _ => BiomeType::Hills,
        };
        biomes.set(p, biome);
    }

    biomes
}

/// Distance from the equator row
fn latitude(y: i32) -> i32 {
    (HEIGHT / 2 - y).abs()
}

/// Run both humidity sweeps on every row
pub fn climate_adjustments(rng: &mut StdRng, biomes: &mut Biomes, climate: i32) {
    for y in 0..HEIGHT {
        let lat = latitude(y);
        sweep_east(rng, biomes, y, lat, climate);
        sweep_west(rng, biomes, y, lat, climate);
    }
}

/// West to east. Oceans near the mid-latitudes load the most moisture.
fn sweep_east(rng: &mut StdRng, biomes: &mut Biomes, y: i32, lat: i32, climate: i32) {
    let mut wetness = 0;

    for x in 0..WIDTH {
        let p = Point::new(x, y);
        let kind = biomes.get(p);
        if kind == BiomeType::Ocean {
            let square_wetness = (12 - lat).abs() + climate * 4;
            if square_wetness > wetness {
                wetness += 1;
            }
            continue;
        }
        if wetness <= 0 {
            continue;
        }

        wetness -= irand(rng, 7 - climate * 2);
        let wetter = match kind {
            BiomeType::Plains => BiomeType::Grassland,
            BiomeType::Tundra => BiomeType::Arctic,
            BiomeType::Hills => BiomeType::Forest,
            BiomeType::Mountains => {
                wetness -= 3;
                BiomeType::Mountains
            }
            BiomeType::Desert => BiomeType::Plains,
            other => other,
        };
        biomes.set(p, wetter);
    }
}

/// East to west, stopping short of column 0. Pushes humidity poleward.
fn sweep_west(rng: &mut StdRng, biomes: &mut Biomes, y: i32, lat: i32, climate: i32) {
    let mut wetness = 0;

    for x in (1..WIDTH).rev() {
        let p = Point::new(x, y);
        let kind = biomes.get(p);
        if kind == BiomeType::Ocean {
            if lat + climate * 2 > wetness * 2 {
                wetness += 1;
            }
            continue;
        }
        if wetness <= 0 {
            continue;
        }

        wetness -= irand(rng, 7 - climate * 2);
        let wetter = match kind {
            BiomeType::Swamp | BiomeType::Hills => BiomeType::Forest,
            BiomeType::Plains => BiomeType::Grassland,
            BiomeType::Grassland => {
                wetness -= 2;
                if lat < 10 {
                    BiomeType::Jungle
                } else {
                    BiomeType::Swamp
                }
            }
            BiomeType::Mountains => {
                wetness -= 3;
                BiomeType::Forest
            }
            BiomeType::Desert => BiomeType::Plains,
            other => other,
        };
        biomes.set(p, wetter);
    }
}
