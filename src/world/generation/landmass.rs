//! Landmass stage
//!
//! Stamps random-walk continent skeletons onto a thickness layer, then
//! removes diagonal-only pinches so land stays 4-connected.

use rand::rngs::StdRng;

use super::{irand, GenerationError};
use crate::world::layer::Layer;
use crate::world::point::{each_point, Point, HEIGHT, WIDTH};

/// Land thickness per cell. 0 is ocean.
pub type Landmass = Layer<u8>;

/// Cells painted before every walk step
const BRUSH: [(i32, i32); 3] = [(0, 0), (0, 1), (1, 0)];

/// Maximum walk length of one skeleton
pub const CHUNK_LENGTH: i32 = 64;

/// Skeleton stamps allowed before giving up on the land target
pub const MAX_SKELETON_SPAWNS: u32 = 20_000;

/// Outcome of the landmass stage
#[derive(Debug, Clone, Default)]
pub struct LandmassStats {
    pub skeletons: u32,
    pub total_land_mass: u32,
    pub pinches_filled: u32,
}

/// Land increments required before stamping stops
pub fn land_target(land_size: i32) -> u32 {
    (land_size * 320 + 640).max(0) as u32
}

/// Build the raw thickness layer
pub fn generate_landmass(rng: &mut StdRng, land_size: i32) -> Result<(Landmass, LandmassStats), GenerationError> {
    generate_landmass_with_limit(rng, land_size, MAX_SKELETON_SPAWNS)
}

pub(crate) fn generate_landmass_with_limit(
    rng: &mut StdRng,
    land_size: i32,
    max_spawns: u32,
) -> Result<(Landmass, LandmassStats), GenerationError> {
    let mut land = Landmass::new(0);
    let mut stats = LandmassStats::default();
    let target = land_target(land_size);

    while stats.total_land_mass < target {
        if stats.skeletons >= max_spawns {
            return Err(GenerationError::LandmassTargetUnreachable {
                target,
                reached: stats.total_land_mass,
                spawns: stats.skeletons,
            });
        }
        stats.total_land_mass += spawn_continent(rng, &mut land);
        stats.skeletons += 1;
    }

    stats.pinches_filled = fill_diagonal_pinches(&mut land);
    log::debug!(
        "Landmass: {} skeletons, {} land increments (target {}), {} pinches filled",
        stats.skeletons,
        stats.total_land_mass,
        target,
        stats.pinches_filled
    );
    Ok((land, stats))
}

/// Stamp one skeleton and return how many cells it raised
fn spawn_continent(rng: &mut StdRng, land: &mut Landmass) -> u32 {
    let origin = Point::new(irand(rng, 72) + 4, irand(rng, 34) + 8);
    let stencil = continent_skeleton(rng, origin);

    let mut raised = 0;
    for (p, cell) in stencil.iter() {
        if cell != 0 {
            land.set(p, land.get(p).saturating_add(1));
            raised += 1;
        }
    }
    raised
}

/// Random walk that paints the brush before every step
fn continent_skeleton(rng: &mut StdRng, start: Point) -> Landmass {
    let mut stencil = Landmass::new(0);
    let Point { mut x, mut y } = start;
    let mut steps = irand(rng, CHUNK_LENGTH) + 1;

    loop {
        for (dx, dy) in BRUSH {
            stencil.set(Point::new(x + dx, y + dy), 15);
        }
        match irand(rng, 4) {
            0 => y -= 1,
            1 => x += 1,
            2 => y += 1,
            _ => x -= 1,
        }

        steps -= 1;
        if steps <= 0 || x <= 2 || x >= WIDTH - 3 || y <= 2 || y >= HEIGHT - 4 {
            break;
        }
    }

    stencil
}

/// Occupancy bits of the 2x2 block anchored at `(x, y)`
fn block_flags(land: &Landmass, x: i32, y: i32) -> u8 {
    [(0, 0, 0x1), (1, 0, 0x2), (0, 1, 0x4), (1, 1, 0x8)]
        .into_iter()
        .filter(|&(dx, dy, _)| land.get(Point::new(x + dx, y + dy)) != 0)
        .fold(0, |flags, (_, _, bit)| flags | bit)
}

/// Fill interior 2x2 blocks where only a diagonal pair is land.
///
/// After each fill the scan steps back one row and one column so every block
/// sharing a cell with the fill is examined again. Returns the number of fills.
pub fn fill_diagonal_pinches(land: &mut Landmass) -> u32 {
    let mut filled = 0;
    let mut x = 1;
    while x < WIDTH - 1 {
        let mut y = 1;
        while y < HEIGHT - 1 {
            let flags = block_flags(land, x, y);
            if flags == 0x6 || flags == 0x9 {
                land.set(Point::new(x, y), 1);
                land.set(Point::new(x, y + 1), 1);
                land.set(Point::new(x + 1, y + 1), 1);
                filled += 1;
                // Resume at the block up and to the left of this one
                x = (x - 1).max(0);
                y = (y - 2).max(0);
            }
            y += 1;
        }
        x += 1;
    }
    filled
}

/// Number of land cells in a thickness layer
pub fn land_cells(land: &Landmass) -> usize {
    each_point().filter(|&p| land.get(p) != 0).count()
}
