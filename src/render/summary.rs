//! Aggregate view of a generated world

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::world::{BiomeType, GenerationReport, Point, World, HEIGHT, WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentSummary {
    pub id: usize,
    pub size: usize,
    pub ocean: bool,
}

/// Counts describing a world, suitable for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub width: i32,
    pub height: i32,
    pub seed: Option<u64>,
    pub land_tiles: usize,
    pub ocean_tiles: usize,
    pub resources: usize,
    pub huts: usize,
    pub biomes: BTreeMap<&'static str, usize>,
    /// Largest first
    pub continents: Vec<ContinentSummary>,
    pub start: Option<Point>,
    pub report: GenerationReport,
}

impl WorldSummary {
    pub fn new(world: &World, report: &GenerationReport, seed: Option<u64>, start: Option<Point>) -> Self {
        let mut biomes: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut resources = 0;
        let mut huts = 0;
        world.each_tile(|tile, _| {
            *biomes.entry(tile.kind().name()).or_default() += 1;
            resources += tile.resource as usize;
            huts += tile.hut as usize;
        });

        let mut continents: Vec<ContinentSummary> = world
            .continents()
            .filter_map(|c| {
                let first = *c.tiles().first()?;
                Some(ContinentSummary {
                    id: c.id().0,
                    size: c.size(),
                    ocean: world.tiles()[first].is_ocean(),
                })
            })
            .collect();
        continents.sort_by(|a, b| b.size.cmp(&a.size).then(a.id.cmp(&b.id)));

        Self {
            width: WIDTH,
            height: HEIGHT,
            seed,
            land_tiles: world.land_count(),
            ocean_tiles: world.ocean_count(),
            resources,
            huts,
            biomes,
            continents,
            start,
            report: report.clone(),
        }
    }

    pub fn land_masses(&self) -> impl Iterator<Item = &ContinentSummary> {
        self.continents.iter().filter(|c| !c.ocean)
    }

    pub fn biome_count(&self, kind: BiomeType) -> usize {
        self.biomes.get(kind.name()).copied().unwrap_or(0)
    }
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "World {}x{}", self.width, self.height)?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed:       {}", seed)?;
        }
        writeln!(f, "  Land:       {}", self.land_tiles)?;
        writeln!(f, "  Ocean:      {}", self.ocean_tiles)?;
        writeln!(f, "  Resources:  {}", self.resources)?;
        writeln!(f, "  Huts:       {}", self.huts)?;
        writeln!(f, "  Rivers:     {} accepted, {} rolled back", self.report.rivers_accepted, self.report.rivers_rejected)?;

        let land: Vec<&ContinentSummary> = self.land_masses().collect();
        writeln!(f, "  Continents: {} land, {} water", land.len(), self.continents.len() - land.len())?;
        for c in land.iter().take(5) {
            writeln!(f, "    #{:<5} {} tiles", c.id, c.size)?;
        }

        writeln!(f, "  Biomes:")?;
        for (name, count) in &self.biomes {
            writeln!(f, "    {:<10} {}", name, count)?;
        }

        match self.start {
            Some(p) => writeln!(f, "  Start:      ({}, {})", p.x, p.y),
            None => writeln!(f, "  Start:      none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Tile, TILE_COUNT};

    fn two_islands() -> World {
        World::new(|p| {
            let land = (p.y == 10 && (5..10).contains(&p.x)) || (p.y == 30 && (40..43).contains(&p.x));
            let kind = if land { BiomeType::Grassland } else { BiomeType::Ocean };
            Tile::new(kind, p, land && p.x == 5, false, 0)
        })
    }

    #[test]
    fn test_counts() {
        let summary = WorldSummary::new(&two_islands(), &GenerationReport::default(), Some(7), None);
        assert_eq!(summary.land_tiles, 8);
        assert_eq!(summary.ocean_tiles, TILE_COUNT - 8);
        assert_eq!(summary.resources, 1);
        assert_eq!(summary.biome_count(BiomeType::Grassland), 8);
        assert_eq!(summary.biome_count(BiomeType::Desert), 0);

        let sizes: Vec<usize> = summary.land_masses().map(|c| c.size).collect();
        assert_eq!(sizes, vec![5, 3]);
        assert_eq!(summary.continents.len(), 3);
        assert!(summary.continents[0].ocean);
    }

    #[test]
    fn test_json_shape() {
        let summary = WorldSummary::new(&two_islands(), &GenerationReport::default(), None, Some(Point::new(6, 10)));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["width"], 80);
        assert_eq!(json["start"]["x"], 6);
        assert_eq!(json["biomes"]["Grassland"], 8);
        assert!(json["seed"].is_null());
    }

    #[test]
    fn test_display_mentions_start() {
        let summary = WorldSummary::new(&two_islands(), &GenerationReport::default(), None, Some(Point::new(6, 10)));
        let text = summary.to_string();
        assert!(text.contains("Start:      (6, 10)"));
        assert!(text.contains("2 land, 1 water"));
    }
}
