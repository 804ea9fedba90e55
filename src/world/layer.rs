//! Dense scratch grids used during generation

use super::point::{Point, HEIGHT, TILE_COUNT, WIDTH};

/// A WIDTH x HEIGHT grid of values stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<T> {
    cells: Vec<T>,
}

impl<T: Copy> Layer<T> {
    /// Create a layer with every cell set to `fill`
    pub fn new(fill: T) -> Self {
        Self {
            cells: vec![fill; TILE_COUNT],
        }
    }

    /// Build a layer by evaluating `f` at every point in row-major order
    pub fn from_fn(f: impl FnMut(Point) -> T) -> Self {
        Self {
            cells: super::point::each_point().map(f).collect(),
        }
    }

    /// Read with horizontal wrap and vertical clamp
    #[inline]
    pub fn get(&self, p: Point) -> T {
        self.cells[p.wrapped().index()]
    }

    /// Write a cell. Points outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        if p.in_bounds() {
            self.cells[p.index()] = value;
        }
    }

    /// Apply `f` to each in-grid offset of `origin`.
    ///
    /// x wraps around the seam; deltas that land above or below the poles are
    /// skipped rather than clamped.
    pub fn each_relative<R>(
        &self,
        origin: Point,
        deltas: &[(i32, i32)],
        mut f: impl FnMut(T, Point) -> R,
    ) -> Vec<R> {
        deltas
            .iter()
            .map(|&d| origin.offset(d))
            .filter(|p| p.y >= 0 && p.y < HEIGHT)
            .map(|p| {
                let p = Point::new(p.x.rem_euclid(WIDTH), p.y);
                f(self.get(p), p)
            })
            .collect()
    }

    /// Overwrite every cell with the contents of `other`
    pub fn copy_from(&mut self, other: &Layer<T>) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Iterate `(point, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (Point::from_index(i), v))
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Layer<i32> {
        Layer::from_fn(|p| p.y * 1000 + p.x)
    }

    #[test]
    fn test_get_wraps_horizontally() {
        let layer = numbered();
        for y in [0, 7, HEIGHT - 1] {
            for x in -2 * WIDTH..3 * WIDTH {
                assert_eq!(
                    layer.get(Point::new(x, y)),
                    layer.get(Point::new(x.rem_euclid(WIDTH), y))
                );
            }
        }
    }

    #[test]
    fn test_get_clamps_vertically() {
        let layer = numbered();
        for x in 0..WIDTH {
            assert_eq!(layer.get(Point::new(x, -1)), layer.get(Point::new(x, 0)));
            assert_eq!(
                layer.get(Point::new(x, HEIGHT)),
                layer.get(Point::new(x, HEIGHT - 1))
            );
        }
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut layer = Layer::new(0u8);
        let before = layer.clone();
        layer.set(Point::new(-1, 5), 9);
        layer.set(Point::new(WIDTH, 5), 9);
        layer.set(Point::new(5, -1), 9);
        layer.set(Point::new(5, HEIGHT), 9);
        assert_eq!(layer, before);

        layer.set(Point::new(3, 4), 9);
        assert_eq!(layer.get(Point::new(3, 4)), 9);
    }

    #[test]
    fn test_each_relative_skips_past_poles() {
        let layer = numbered();
        let hits = layer.each_relative(Point::new(0, 0), &[(0, -1), (-1, 0), (0, 1)], |v, p| (v, p));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].1, Point::new(WIDTH - 1, 0));
        assert_eq!(hits[0].0, WIDTH - 1);
        assert_eq!(hits[1].1, Point::new(0, 1));
    }

    #[test]
    fn test_copy_from_restores_exactly() {
        let original = numbered();
        let mut working = original.clone();
        working.set(Point::new(10, 10), -5);
        assert_ne!(working, original);
        working.copy_from(&original);
        assert_eq!(working, original);
    }
}
