//! World data structure
//!
//! The full tile grid plus the continent graph built over it.

use super::continent::{Continent, ContinentArena, ContinentId};
use super::point::{each_point, Point, HEIGHT, TILE_COUNT, WIDTH};
use super::tile::Tile;

/// A generated world
#[derive(Debug, Clone)]
pub struct World {
    tiles: Vec<Tile>,
    continents: ContinentArena,
}

impl World {
    /// Build a world by calling `factory` for every point in row-major order,
    /// then group the tiles into continents.
    pub fn new(factory: impl FnMut(Point) -> Tile) -> Self {
        let tiles: Vec<Tile> = each_point().map(factory).collect();
        debug_assert_eq!(tiles.len(), TILE_COUNT);

        let mut world = Self {
            tiles,
            continents: ContinentArena::new(),
        };
        world.assign_continents();
        world.stitch_seam();

        log::debug!(
            "Built world with {} continents ({} tombstoned during merge)",
            world.continents().count(),
            world.continents.all().len() - world.continents().count()
        );
        world
    }

    /// Raster pass: join each tile to its north or west neighbour when the
    /// land/ocean class matches, else start a new continent.
    fn assign_continents(&mut self) {
        for idx in 0..TILE_COUNT {
            let p = Point::from_index(idx);
            let ocean = self.tiles[idx].is_ocean();
            let matching = |q: Point, world: &World| {
                world
                    .get_maybe(q.x, q.y)
                    .filter(|t| t.is_ocean() == ocean)
                    .and_then(|t| t.continent)
            };
            let north = matching(p.offset((0, -1)), self);
            let west = matching(p.offset((-1, 0)), self);

            let owner = match (north, west) {
                (Some(n), Some(w)) => {
                    self.continents.merge(n, w, &mut self.tiles);
                    n
                }
                (Some(c), None) | (None, Some(c)) => c,
                (None, None) => self.continents.allocate(),
            };
            self.continents.add_tile(owner, idx, &mut self.tiles);
        }
    }

    /// The raster pass never compares across the seam; merge the wrapped
    /// column pairs it could not see.
    fn stitch_seam(&mut self) {
        for y in 0..HEIGHT {
            let east = Point::new(WIDTH - 1, y).index();
            let west = Point::new(0, y).index();
            if self.tiles[east].is_ocean() != self.tiles[west].is_ocean() {
                continue;
            }
            if let (Some(into), Some(other)) = (self.tiles[west].continent, self.tiles[east].continent) {
                self.continents.merge(into, other, &mut self.tiles);
            }
        }
    }

    /// Tile at a position, wrapping x and clamping y
    pub fn get(&self, x: i32, y: i32) -> &Tile {
        &self.tiles[Point::new(x, y).wrapped().index()]
    }

    /// Mutable tile at a position, wrapping x and clamping y
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut Tile {
        &mut self.tiles[Point::new(x, y).wrapped().index()]
    }

    /// Tile at a position without wrapping
    pub fn get_maybe(&self, x: i32, y: i32) -> Option<&Tile> {
        let p = Point::new(x, y);
        p.in_bounds().then(|| &self.tiles[p.index()])
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Visit every tile in row-major order
    pub fn each_tile(&self, mut f: impl FnMut(&Tile, Point)) {
        for (idx, tile) in self.tiles.iter().enumerate() {
            f(tile, Point::from_index(idx));
        }
    }

    /// Visit offsets of `origin`, wrapping x and skipping rows past the poles
    pub fn each_relative(&self, origin: Point, deltas: &[(i32, i32)], mut f: impl FnMut(&Tile, Point)) {
        for &delta in deltas {
            let p = origin.offset(delta);
            if p.y < 0 || p.y >= HEIGHT {
                continue;
            }
            let p = Point::new(p.x.rem_euclid(WIDTH), p.y);
            f(&self.tiles[p.index()], p);
        }
    }

    /// Visit every tile on the same continent as `origin`
    pub fn each_in_continent(&self, origin: Point, mut f: impl FnMut(&Tile)) {
        if let Some(continent) = self.continent_at(origin.x, origin.y) {
            for &idx in continent.tiles() {
                f(&self.tiles[idx]);
            }
        }
    }

    /// Continents that own at least one tile
    pub fn continents(&self) -> impl Iterator<Item = &Continent> {
        self.continents.all().iter().filter(|c| !c.is_tombstone())
    }

    pub fn continent(&self, id: ContinentId) -> Option<&Continent> {
        self.continents.get(id)
    }

    pub fn continent_at(&self, x: i32, y: i32) -> Option<&Continent> {
        self.get(x, y).continent().and_then(|id| self.continent(id))
    }

    pub fn ocean_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_ocean()).count()
    }

    pub fn land_count(&self) -> usize {
        self.tiles.len() - self.ocean_count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::world::biome::BiomeType;
    use crate::world::point::{DIRECTIONS, TILE_COUNT};

    fn world_from(land: impl Fn(Point) -> bool) -> World {
        World::new(|p| {
            let kind = if land(p) { BiomeType::Plains } else { BiomeType::Ocean };
            Tile::new(kind, p, false, false, 0)
        })
    }

    pub(crate) fn assert_partition(world: &World) {
        let mut seen = vec![0u8; TILE_COUNT];
        for continent in world.continents() {
            assert_eq!(continent.size(), continent.tiles().len());
            for &idx in continent.tiles() {
                seen[idx] += 1;
                assert_eq!(world.tiles()[idx].continent(), Some(continent.id()));
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    pub(crate) fn assert_adjacency_closure(world: &World) {
        world.each_tile(|tile, p| {
            for &(dx, dy) in &DIRECTIONS {
                let q = p.offset((dx, dy));
                if q.y < 0 || q.y >= HEIGHT {
                    continue;
                }
                let other = world.get(q.x, q.y);
                if other.is_ocean() == tile.is_ocean() {
                    assert_eq!(other.continent(), tile.continent(), "{:?} vs {:?}", p, q);
                }
            }
        });
    }

    #[test]
    fn test_all_ocean_is_one_continent() {
        let world = world_from(|_| false);
        assert_eq!(world.continents().count(), 1);
        assert_partition(&world);
    }

    #[test]
    fn test_u_shape_needs_merge() {
        // Two vertical arms joined at the bottom: the arms start as separate
        // continents and merge when the base row is scanned.
        let world = world_from(|p| {
            let arm = (p.x == 10 || p.x == 14) && (5..=12).contains(&p.y);
            let base = p.y == 12 && (10..=14).contains(&p.x);
            arm || base
        });
        assert_partition(&world);
        assert_adjacency_closure(&world);
        let land: Vec<_> = world.continents().filter(|c| !world.tiles()[c.tiles()[0]].is_ocean()).collect();
        assert_eq!(land.len(), 1);
        assert_eq!(land[0].size(), 8 + 8 + 3);
    }

    #[test]
    fn test_staircase_merges() {
        // Diagonal staircase where every step touches the previous one orthogonally
        let world = world_from(|p| (p.x == p.y || p.x == p.y + 1) && p.y > 2 && p.y < 40);
        assert_partition(&world);
        assert_adjacency_closure(&world);
    }

    #[test]
    fn test_land_across_seam_is_one_continent() {
        let world = world_from(|p| (p.x <= 2 || p.x >= WIDTH - 3) && (10..20).contains(&p.y));
        assert_partition(&world);
        assert_adjacency_closure(&world);
        let a = world.get(0, 15).continent();
        let b = world.get(WIDTH - 1, 15).continent();
        assert_eq!(a, b);
        assert_eq!(world.continent_at(1, 15).unwrap().size(), 6 * 10);
    }

    #[test]
    fn test_poles_do_not_wrap() {
        // Land strips at the top and bottom rows are separate continents
        let world = world_from(|p| p.y == 0 || p.y == HEIGHT - 1);
        assert_partition(&world);
        assert_ne!(world.get(0, 0).continent(), world.get(0, HEIGHT - 1).continent());
    }

    #[test]
    fn test_checkerboard_has_singletons() {
        let world = world_from(|p| (p.x + p.y) % 2 == 0);
        assert_partition(&world);
        assert_eq!(world.continents().count(), TILE_COUNT);
    }

    #[test]
    fn test_get_maybe_does_not_wrap() {
        let world = world_from(|_| true);
        assert!(world.get_maybe(-1, 0).is_none());
        assert!(world.get_maybe(0, HEIGHT).is_none());
        assert_eq!(world.get(-1, 0).position(), Point::new(WIDTH - 1, 0));
        assert_eq!(world.get(3, -4).position(), Point::new(3, 0));
    }

    #[test]
    fn test_each_in_continent() {
        let world = world_from(|p| (20..25).contains(&p.x) && (20..24).contains(&p.y));
        let mut count = 0;
        world.each_in_continent(Point::new(22, 22), |t| {
            assert!(!t.is_ocean());
            count += 1;
        });
        assert_eq!(count, 20);
    }

    #[test]
    fn test_each_relative_skips_past_poles() {
        let world = world_from(|_| false);
        let mut visited = Vec::new();
        world.each_relative(Point::new(0, HEIGHT - 1), &[(0, 1), (-1, 0), (0, -1)], |_, p| visited.push(p));
        assert_eq!(visited, vec![Point::new(WIDTH - 1, HEIGHT - 1), Point::new(0, HEIGHT - 2)]);
    }
}
