//! Continents
//!
//! Maximal 4-connected regions of matching land/ocean class. Continents live
//! in an arena owned by the world and tiles refer to them by index.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Index of a continent within its world's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContinentId(pub usize);

/// A connected region of tiles
#[derive(Debug, Clone)]
pub struct Continent {
    id: ContinentId,
    /// Row-major indices of the owned tiles
    tiles: Vec<usize>,
    size: usize,
}

impl Continent {
    fn new(id: ContinentId) -> Self {
        Self {
            id,
            tiles: Vec::new(),
            size: 0,
        }
    }

    pub fn id(&self) -> ContinentId {
        self.id
    }

    /// Row-major indices of the tiles in this continent
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// A continent emptied by a merge. Never reused.
    pub fn is_tombstone(&self) -> bool {
        self.size == 0
    }
}

/// Owning storage for continents. Ids are never recycled.
#[derive(Debug, Clone, Default)]
pub(crate) struct ContinentArena {
    continents: Vec<Continent>,
}

impl ContinentArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ContinentId {
        let id = ContinentId(self.continents.len());
        self.continents.push(Continent::new(id));
        id
    }

    pub fn get(&self, id: ContinentId) -> Option<&Continent> {
        self.continents.get(id.0)
    }

    pub fn all(&self) -> &[Continent] {
        &self.continents
    }

    /// Give the tile at `tile_idx` to `owner`.
    ///
    /// Already owned: nothing happens. Owned by another continent: that whole
    /// continent is merged into `owner`.
    pub fn add_tile(&mut self, owner: ContinentId, tile_idx: usize, tiles: &mut [Tile]) {
        match tiles[tile_idx].continent {
            Some(current) if current == owner => {}
            Some(other) => self.merge(owner, other, tiles),
            None => {
                tiles[tile_idx].continent = Some(owner);
                let continent = &mut self.continents[owner.0];
                continent.tiles.push(tile_idx);
                continent.size += 1;
            }
        }
    }

    /// Move every tile of `other` into `into`, leaving `other` as a tombstone
    pub fn merge(&mut self, into: ContinentId, other: ContinentId, tiles: &mut [Tile]) {
        if into == other {
            return;
        }
        let moved = std::mem::take(&mut self.continents[other.0].tiles);
        let moved_size = std::mem::replace(&mut self.continents[other.0].size, 0);
        for &idx in &moved {
            tiles[idx].continent = Some(into);
        }
        let target = &mut self.continents[into.0];
        target.tiles.extend(moved);
        target.size += moved_size;
    }
}
