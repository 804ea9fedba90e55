//! Grid coordinates and toroidal addressing
//!
//! The map wraps horizontally; the poles are hard edges.

use serde::{Deserialize, Serialize};

/// Map width in tiles
pub const WIDTH: i32 = 80;
/// Map height in tiles
pub const HEIGHT: i32 = 50;
/// Total number of tiles on the map
pub const TILE_COUNT: usize = (WIDTH * HEIGHT) as usize;

/// Orthogonal neighbours: north, east, south, west
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal neighbours
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All 8 neighbours, clockwise from north. Even indices are orthogonal.
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// The 20-cell work radius around a settlement site (5x5 minus corners and centre)
#[rustfmt::skip]
pub const BIG_FAT_CROSS: [(i32, i32); 20] = [
    (-2, -1), (-2, 0), (-2, 1),
    (-1, -2), (-1, -1), (-1, 0), (-1, 1), (-1, 2),
    (0, -2), (0, -1), (0, 1), (0, 2),
    (1, -2), (1, -1), (1, 0), (1, 1), (1, 2),
    (2, -1), (2, 0), (2, 1),
];

/// [`BIG_FAT_CROSS`] with the centre cell first
#[rustfmt::skip]
pub const BIG_FAT_CROSS_WITH_CENTRE: [(i32, i32); 21] = [
    (0, 0),
    (-2, -1), (-2, 0), (-2, 1),
    (-1, -2), (-1, -1), (-1, 0), (-1, 1), (-1, 2),
    (0, -2), (0, -1), (0, 1), (0, 2),
    (1, -2), (1, -1), (1, 0), (1, 1), (1, 2),
    (2, -1), (2, 0), (2, 1),
];

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta without any wrapping
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True if the point lies on the grid without wrapping
    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < WIDTH && self.y >= 0 && self.y < HEIGHT
    }

    /// Wrap x around the seam and clamp y to the poles
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::new(self.x.rem_euclid(WIDTH), self.y.clamp(0, HEIGHT - 1))
    }

    /// Row-major index. Only meaningful for in-bounds points.
    #[inline]
    pub fn index(self) -> usize {
        (self.y * WIDTH + self.x) as usize
    }

    /// Inverse of [`Point::index`]
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        let idx = idx as i32;
        Self::new(idx % WIDTH, idx / WIDTH)
    }

    /// Shortest displacement to `other`, taking the seam into account
    pub fn delta(self, other: Point) -> (i32, i32) {
        (delta_x(self.x, other.x), other.y - self.y)
    }

    /// Chebyshev distance on the torus
    pub fn distance(self, other: Point) -> i32 {
        let (dx, dy) = self.delta(other);
        dx.abs().max(dy.abs())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Shortest signed horizontal distance from `x1` to `x2` on the torus
pub fn delta_x(x1: i32, x2: i32) -> i32 {
    let direct = x2 - x1;
    let west = direct - WIDTH;
    let east = direct + WIDTH;
    [west, east]
        .into_iter()
        .fold(direct, |best, d| if d.abs() < best.abs() { d } else { best })
}

/// Iterate every grid point in row-major order
pub fn each_point() -> impl Iterator<Item = Point> {
    (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| Point::new(x, y)))
}
