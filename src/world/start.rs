//! Start site selection
//!
//! Random search for a good first settlement. Requirements relax the longer
//! the search runs and the later the game turn.

use rand::rngs::StdRng;

use super::biome::BiomeType;
use super::generation::irand;
use super::map::World;
use super::point::{Point, HEIGHT, WIDTH};

/// Cells sampled before giving up
pub const START_SEARCH_TRIES: i32 = 2000;

/// Pick a start position, or `None` if no sample qualified
pub fn find_start_position(world: &World, rng: &mut StdRng, turn: u32) -> Option<Point> {
    let min_fertile = 32 - (turn / 16) as i32;

    for i in 0..START_SEARCH_TRIES {
        let p = Point::new(irand(rng, WIDTH), irand(rng, HEIGHT));
        let tile = world.get(p.x, p.y);
        if tile.is_ocean() {
            continue;
        }
        if (tile.land_value as i32) < 12 - i / 32 {
            continue;
        }
        if fertile_tiles(world, p) < min_fertile {
            continue;
        }
        if tile.hut {
            continue;
        }
        log::debug!("Start position {:?} found after {} tries", p, i + 1);
        return Some(p);
    }

    log::warn!("No suitable start position found");
    None
}

/// Plains, grassland and river tiles on the continent containing `p`
fn fertile_tiles(world: &World, p: Point) -> i32 {
    let mut count = 0;
    world.each_in_continent(p, |tile| {
        if matches!(tile.kind(), BiomeType::Plains | BiomeType::Grassland | BiomeType::Rivers) {
            count += 1;
        }
    });
    count
}
