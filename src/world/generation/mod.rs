//! Procedural world generation
//!
//! Six ordered stages over scratch layers: landmass, temperature, climate,
//! erosion, rivers, poles. The final layers feed the `World` constructor.

pub mod climate;
pub mod erosion;
pub mod landmass;
pub mod placement;
pub mod poles;
pub mod rivers;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use self::climate::Biomes;
use self::placement::Placement;
use super::map::World;
use super::tile::Tile;
use crate::data::WorldSettings;

/// Uniform integer in `[0, n)`, and 0 when `n <= 0`
pub(crate) fn irand(rng: &mut StdRng, n: i32) -> i32 {
    if n <= 0 {
        0
    } else {
        rng.gen_range(0..n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("landmass stalled at {reached}/{target} after {spawns} skeletons")]
    LandmassTargetUnreachable { target: u32, reached: u32, spawns: u32 },
    #[error("river attempt {attempt} ran for {steps} steps without terminating")]
    RiverRunaway { attempt: u32, steps: u32 },
}

/// What the last `generate` call did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub skeletons: u32,
    pub total_land_mass: u32,
    pub pinches_filled: u32,
    pub erosion_steps: u32,
    pub rivers_accepted: u32,
    pub rivers_rejected: u32,
    pub land_tiles: usize,
    pub ocean_tiles: usize,
    pub continents: usize,
}

pub struct WorldGenerator {
    settings: WorldSettings,
    rng: StdRng,
    placement: Placement,
    report: GenerationReport,
}

impl WorldGenerator {
    /// Generator seeded from `settings.seed`, or from entropy when unset
    pub fn new(settings: WorldSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng)
    }

    pub fn with_seed(settings: WorldSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(settings: WorldSettings, mut rng: StdRng) -> Self {
        let placement = Placement::new(irand(&mut rng, 0xFFFFF));
        Self {
            settings,
            rng,
            placement,
            report: GenerationReport::default(),
        }
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The generator's random stream, for follow-up decisions on the world
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Stats of the most recent successful `generate`
    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Run every stage and build the world
    pub fn generate(&mut self) -> Result<World, GenerationError> {
        let WorldSettings {
            land_size,
            temperature,
            climate,
            age,
            ..
        } = self.settings;
        let rng = &mut self.rng;
        let mut report = GenerationReport::default();

        let (land, stats) = landmass::generate_landmass(rng, land_size)?;
        report.skeletons = stats.skeletons;
        report.total_land_mass = stats.total_land_mass;
        report.pinches_filled = stats.pinches_filled;

        let mut biomes = climate::temperature_adjustments(rng, &land, temperature);
        climate::climate_adjustments(rng, &mut biomes, climate);
        report.erosion_steps = erosion::erosion_adjustments(rng, &mut biomes, age);

        let rivers = rivers::generate_rivers(rng, &mut biomes, land_size, climate)?;
        report.rivers_accepted = rivers.accepted;
        report.rivers_rejected = rivers.rejected;

        poles::generate_poles(rng, &mut biomes);

        let world = self.build(&biomes);
        report.land_tiles = world.land_count();
        report.ocean_tiles = world.ocean_count();
        report.continents = world.continents().count();

        log::info!(
            "Generated world: {} land, {} ocean, {} continents, {} rivers",
            report.land_tiles,
            report.ocean_tiles,
            report.continents,
            report.rivers_accepted
        );
        log::debug!("{:?}", report);
        self.report = report;
        Ok(world)
    }

    fn build(&self, biomes: &Biomes) -> World {
        let placement = self.placement;
        World::new(|p| {
            let kind = biomes.get(p);
            Tile::new(
                kind,
                p,
                placement.has_resource(p, kind),
                placement.has_hut(p, kind),
                placement.calc_land_value(biomes, p),
            )
        })
    }
}
