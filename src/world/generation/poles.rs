//! Polar caps

use rand::rngs::StdRng;

use super::climate::Biomes;
use super::irand;
use crate::world::biome::BiomeType;
use crate::world::point::{Point, HEIGHT, WIDTH};

/// Tundra cells scattered into each row next to a pole
pub const POLAR_TUNDRA: u32 = 20;

/// Freeze the pole rows and fringe the rows next to them with tundra
pub fn generate_poles(rng: &mut StdRng, biomes: &mut Biomes) {
    for x in 0..WIDTH {
        biomes.set(Point::new(x, 0), BiomeType::Arctic);
        biomes.set(Point::new(x, HEIGHT - 1), BiomeType::Arctic);
    }
    for _ in 0..POLAR_TUNDRA {
        biomes.set(Point::new(irand(rng, WIDTH), 1), BiomeType::Tundra);
        biomes.set(Point::new(irand(rng, WIDTH), HEIGHT - 2), BiomeType::Tundra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pole_rows_are_arctic() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut biomes = Biomes::new(BiomeType::Ocean);
        generate_poles(&mut rng, &mut biomes);
        for x in 0..WIDTH {
            assert_eq!(biomes.get(Point::new(x, 0)), BiomeType::Arctic);
            assert_eq!(biomes.get(Point::new(x, HEIGHT - 1)), BiomeType::Arctic);
        }
        let fringe = |y| (0..WIDTH).filter(|&x| biomes.get(Point::new(x, y)) == BiomeType::Tundra).count();
        assert!(fringe(1) >= 1 && fringe(1) <= POLAR_TUNDRA as usize);
        assert!(fringe(HEIGHT - 2) >= 1);
        assert_eq!(fringe(2), 0);
    }
}
