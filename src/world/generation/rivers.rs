//! River stage
//!
//! Rivers are traced from random hills as biased 8-directional walks. A walk
//! that is too short or that dead-ends inland is rolled back from a snapshot.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::climate::Biomes;
use super::{irand, GenerationError};
use crate::world::biome::BiomeType;
use crate::world::point::{Point, DIRECTIONS, NEIGHBOURS, WIDTH};

/// Sources tried per world
pub const MAX_RIVER_ATTEMPTS: u32 = 256;

/// Shortest river that is kept
pub const MIN_RIVER_LENGTH: u32 = 5;

/// Walk length at which a trace is considered runaway
pub const MAX_RIVER_STEPS: u32 = 4096;

/// Rivers accepted before the stage stops
pub fn max_rivers(land_size: i32, climate: i32) -> u32 {
    ((land_size + climate) * 2 + 6).max(0) as u32
}

/// Result of tracing one river
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiverOutcome {
    Accepted { length: u32 },
    Rejected { length: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct RiverStats {
    pub attempts: u32,
    pub accepted: u32,
    pub rejected: u32,
}

/// Carve rivers into `biomes`
pub fn generate_rivers(
    rng: &mut StdRng,
    biomes: &mut Biomes,
    land_size: i32,
    climate: i32,
) -> Result<RiverStats, GenerationError> {
    let limit = max_rivers(land_size, climate);
    let mut stats = RiverStats::default();
    let mut backup = biomes.clone();

    for attempt in 0..MAX_RIVER_ATTEMPTS {
        if stats.accepted >= limit {
            break;
        }

        let hills: Vec<Point> = biomes
            .iter()
            .filter(|&(_, kind)| kind == BiomeType::Hills)
            .map(|(p, _)| p)
            .collect();
        let Some(&source) = hills.choose(rng) else {
            log::debug!("Rivers: no hills left after {} attempts", attempt);
            break;
        };

        backup.copy_from(biomes);
        stats.attempts += 1;
        match trace_river(rng, biomes, &backup, source, attempt)? {
            RiverOutcome::Accepted { .. } => stats.accepted += 1,
            RiverOutcome::Rejected { .. } => stats.rejected += 1,
        }
    }

    log::debug!(
        "Rivers: {} accepted, {} rolled back (limit {})",
        stats.accepted,
        stats.rejected,
        limit
    );
    Ok(stats)
}

/// Trace one river from `source`.
///
/// `backup` must hold the layer as it was before the trace; a rejected or
/// runaway river restores it exactly.
pub fn trace_river(
    rng: &mut StdRng,
    biomes: &mut Biomes,
    backup: &Biomes,
    source: Point,
    attempt: u32,
) -> Result<RiverOutcome, GenerationError> {
    trace_river_with_limit(rng, biomes, backup, source, attempt, MAX_RIVER_STEPS)
}

pub(crate) fn trace_river_with_limit(
    rng: &mut StdRng,
    biomes: &mut Biomes,
    backup: &Biomes,
    source: Point,
    attempt: u32,
    max_steps: u32,
) -> Result<RiverOutcome, GenerationError> {
    let mut p = source;
    let mut dir = irand(rng, 4) * 2;
    let mut length: u32 = 0;

    let (ocean_nearby, next) = loop {
        biomes.set(p, BiomeType::Rivers);
        let ocean_nearby = DIRECTIONS
            .iter()
            .any(|&d| biomes.get(p.offset(d)) == BiomeType::Ocean);

        // Alternate between allowing a right turn and a left turn
        dir = ((irand(rng, 2) - (length & 1) as i32) * 2 + dir) & 7;
        let step = p.offset(NEIGHBOURS[dir as usize]);
        p = Point::new(step.x.rem_euclid(WIDTH), step.y);
        let next = biomes.get(p);
        length += 1;

        if ocean_nearby
            || matches!(next, BiomeType::Mountains | BiomeType::Ocean | BiomeType::Rivers)
        {
            break (ocean_nearby, next);
        }
        if length >= max_steps {
            biomes.copy_from(backup);
            return Err(GenerationError::RiverRunaway { attempt, steps: length });
        }
    };

    if (ocean_nearby || next == BiomeType::Rivers) && length >= MIN_RIVER_LENGTH {
        for &d in &NEIGHBOURS {
            let q = source.offset(d);
            let q = Point::new(q.x.rem_euclid(WIDTH), q.y);
            if biomes.get(q) == BiomeType::Forest {
                biomes.set(q, BiomeType::Jungle);
            }
        }
        Ok(RiverOutcome::Accepted { length })
    } else {
        biomes.copy_from(backup);
        Ok(RiverOutcome::Rejected { length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::point::HEIGHT;
    use rand::SeedableRng;

    /// Plains between ocean bands, with one hill at the centre
    fn basin() -> (Biomes, Point) {
        let source = Point::new(20, 20);
        let biomes = Biomes::from_fn(|p| {
            if p == source {
                BiomeType::Hills
            } else if p.y <= 2 || p.y >= 26 {
                BiomeType::Ocean
            } else {
                BiomeType::Plains
            }
        });
        (biomes, source)
    }

    #[test]
    fn test_river_limit() {
        assert_eq!(max_rivers(0, 0), 6);
        assert_eq!(max_rivers(1, 1), 10);
    }

    #[test]
    fn test_rejected_river_leaves_no_trace() {
        // A hill boxed in by mountains dead-ends after one step
        let source = Point::new(30, 30);
        let biomes = Biomes::from_fn(|p| {
            if p == source {
                BiomeType::Hills
            } else if p.distance(source) == 1 {
                BiomeType::Mountains
            } else {
                BiomeType::Plains
            }
        });
        let mut working = biomes.clone();
        let mut rng = StdRng::seed_from_u64(4);

        let stats = generate_rivers(&mut rng, &mut working, 1, 1).unwrap();

        assert_eq!(stats.accepted, 0);
        assert_eq!(stats.rejected, MAX_RIVER_ATTEMPTS);
        assert_eq!(working, biomes);
    }

    #[test]
    fn test_no_hills_is_a_noop() {
        let biomes = Biomes::from_fn(|p| if p.y < HEIGHT / 2 { BiomeType::Ocean } else { BiomeType::Plains });
        let mut working = biomes.clone();
        let mut rng = StdRng::seed_from_u64(4);
        let stats = generate_rivers(&mut rng, &mut working, 1, 1).unwrap();
        assert_eq!(stats.attempts, 0);
        assert_eq!(working, biomes);
    }

    #[test]
    fn test_trace_outcomes_are_consistent() {
        let mut accepted = 0;
        for seed in 0..32 {
            let (original, source) = basin();
            let mut biomes = original.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            match trace_river(&mut rng, &mut biomes, &original, source, 0).unwrap() {
                RiverOutcome::Accepted { length } => {
                    accepted += 1;
                    assert!(length >= MIN_RIVER_LENGTH);
                    assert_eq!(biomes.get(source), BiomeType::Rivers);
                    let rivers = biomes.cells().iter().filter(|&&b| b == BiomeType::Rivers).count();
                    assert!(rivers >= MIN_RIVER_LENGTH as usize);
                }
                RiverOutcome::Rejected { .. } => assert_eq!(biomes, original),
            }
        }
        assert!(accepted > 0);
    }

    #[test]
    fn test_runaway_river_restores_layer() {
        // The source sits well inland, so two steps never reach the coast
        let (original, source) = basin();
        let mut biomes = original.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let err = trace_river_with_limit(&mut rng, &mut biomes, &original, source, 3, 2).unwrap_err();
        assert_eq!(err, GenerationError::RiverRunaway { attempt: 3, steps: 2 });
        assert_eq!(biomes, original);
    }

    #[test]
    fn test_accepted_rivers_respect_limit() {
        let mut biomes = Biomes::from_fn(|p| {
            if p.y <= 2 || p.y >= HEIGHT - 3 || p.x % 10 == 0 {
                BiomeType::Ocean
            } else {
                BiomeType::Hills
            }
        });
        let mut rng = StdRng::seed_from_u64(8);
        let stats = generate_rivers(&mut rng, &mut biomes, 0, 0).unwrap();
        assert!(stats.accepted <= max_rivers(0, 0));
        assert_eq!(stats.attempts, stats.accepted + stats.rejected);
    }
}
