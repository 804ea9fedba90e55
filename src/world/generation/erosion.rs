//! Erosion stage
//!
//! A wandering sequence of single-cell terrain successions. Older worlds run
//! more iterations.

use rand::rngs::StdRng;

use super::climate::Biomes;
use super::irand;
use crate::world::biome::BiomeType;
use crate::world::point::{Point, DIAGONALS, HEIGHT, NEIGHBOURS, WIDTH};

/// Iterations for a given world age
pub fn erosion_iterations(age: i32) -> u32 {
    (800 * age + 800).max(0) as u32
}

/// Next biome in the succession at `p`
fn succession(biomes: &Biomes, p: Point) -> BiomeType {
    match biomes.get(p) {
        BiomeType::Forest => BiomeType::Jungle,
        BiomeType::Swamp => BiomeType::Grassland,
        BiomeType::Plains | BiomeType::Tundra => BiomeType::Hills,
        BiomeType::Grassland | BiomeType::Rivers => BiomeType::Forest,
        BiomeType::Jungle => BiomeType::Swamp,
        BiomeType::Hills | BiomeType::Arctic => BiomeType::Mountains,
        BiomeType::Mountains => {
            let coastal = biomes
                .each_relative(p, &DIAGONALS, |kind, _| kind)
                .into_iter()
                .any(|kind| kind == BiomeType::Ocean);
            if coastal {
                BiomeType::Mountains
            } else {
                BiomeType::Ocean
            }
        }
        BiomeType::Desert => BiomeType::Plains,
        BiomeType::Ocean => BiomeType::Ocean,
    }
}

/// Apply the succession rule along a random walk. Returns the number of cells
/// visited on the grid.
pub fn erosion_adjustments(rng: &mut StdRng, biomes: &mut Biomes, age: i32) -> u32 {
    let mut x = 0;
    let mut y = 0;
    let mut applied = 0;

    for step in 0..erosion_iterations(age) {
        if step % 2 == 0 {
            x = irand(rng, WIDTH);
            y = irand(rng, HEIGHT);
        } else {
            let (dx, dy) = NEIGHBOURS[irand(rng, 8) as usize];
            x += dx;
            y += dy;
        }

        let p = Point::new(x, y);
        if p.in_bounds() {
            let next = succession(biomes, p);
            biomes.set(p, next);
            applied += 1;
        }
    }

    log::debug!("Erosion: {} successions applied", applied);
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn single(kind: BiomeType) -> (Biomes, Point) {
        let p = Point::new(20, 20);
        let mut biomes = Biomes::new(BiomeType::Plains);
        biomes.set(p, kind);
        (biomes, p)
    }

    #[test]
    fn test_succession_table() {
        let cases = [
            (BiomeType::Forest, BiomeType::Jungle),
            (BiomeType::Swamp, BiomeType::Grassland),
            (BiomeType::Plains, BiomeType::Hills),
            (BiomeType::Tundra, BiomeType::Hills),
            (BiomeType::Grassland, BiomeType::Forest),
            (BiomeType::Rivers, BiomeType::Forest),
            (BiomeType::Jungle, BiomeType::Swamp),
            (BiomeType::Hills, BiomeType::Mountains),
            (BiomeType::Arctic, BiomeType::Mountains),
            (BiomeType::Desert, BiomeType::Plains),
            (BiomeType::Ocean, BiomeType::Ocean),
        ];
        for (from, to) in cases {
            let (biomes, p) = single(from);
            assert_eq!(succession(&biomes, p), to, "{:?}", from);
        }
    }

    #[test]
    fn test_inland_mountain_sinks() {
        let (biomes, p) = single(BiomeType::Mountains);
        assert_eq!(succession(&biomes, p), BiomeType::Ocean);
    }

    #[test]
    fn test_mountain_with_ocean_diagonal_stays() {
        let (mut biomes, p) = single(BiomeType::Mountains);
        biomes.set(p.offset((1, 1)), BiomeType::Ocean);
        assert_eq!(succession(&biomes, p), BiomeType::Mountains);

        // Orthogonal ocean does not protect it
        let (mut biomes, p) = single(BiomeType::Mountains);
        biomes.set(p.offset((0, 1)), BiomeType::Ocean);
        assert_eq!(succession(&biomes, p), BiomeType::Ocean);
    }

    #[test]
    fn test_iteration_count() {
        assert_eq!(erosion_iterations(0), 800);
        assert_eq!(erosion_iterations(2), 2400);

        let mut rng = StdRng::seed_from_u64(2);
        let mut biomes = Biomes::new(BiomeType::Ocean);
        let applied = erosion_adjustments(&mut rng, &mut biomes, 1);
        assert!(applied <= erosion_iterations(1));
        assert!(applied >= erosion_iterations(1) / 2);
        assert!(biomes.cells().iter().all(|&b| b == BiomeType::Ocean));
    }
}
