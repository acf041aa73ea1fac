//! Walkability grid storage.
//!
//! The grid uses a coordinate system where:
//! - Cell (0, 0) covers the world area from (0, 0) to (cell_size, cell_size)
//! - Positive X is to the right
//! - Positive Y is up
//! - `grid_to_world` returns cell centers

use crate::core::{GridCoord, WorldPoint};
use crate::error::{NavError, Result};

/// A 2D traversability map over a uniform grid.
///
/// Cells start walkable; the surrounding scene layer carves obstacles out
/// with the cell, rectangle and circle setters. Out-of-range queries report
/// "not walkable" and out-of-range setters are silent no-ops, so callers
/// may probe freely near the boundary.
#[derive(Clone, Debug)]
pub struct NavGrid {
    /// Walkability flags, row-major
    walkable: Vec<bool>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// World units per cell
    cell_size: i32,
}

impl NavGrid {
    /// Create a new grid with every cell walkable.
    ///
    /// Fails with [`NavError::InvalidCellSize`] if `cell_size` is zero or
    /// negative; that is a programming error, not a runtime condition.
    pub fn new(width: usize, height: usize, cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(NavError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            walkable: vec![true; width * height],
            width,
            height,
            cell_size,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Check if a cell is walkable (false for out-of-range coordinates)
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.walkable[i])
            .unwrap_or(false)
    }

    /// Set walkability of a single cell. Out-of-range coordinates are
    /// silently ignored.
    #[inline]
    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) {
        if let Some(i) = self.coord_to_index(coord) {
            self.walkable[i] = walkable;
        }
    }

    /// Set every cell to the given walkability
    pub fn fill(&mut self, walkable: bool) {
        self.walkable.fill(walkable);
    }

    /// Number of walkable cells (for debug overlays)
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Convert world coordinates to grid coordinates (floor divide)
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let size = self.cell_size as f32;
        GridCoord::new(
            (point.x / size).floor() as i32,
            (point.y / size).floor() as i32,
        )
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        let size = self.cell_size as f32;
        WorldPoint::new(
            (coord.x as f32 + 0.5) * size,
            (coord.y as f32 + 0.5) * size,
        )
    }

    /// Set walkability of every cell touched by a world-space rectangle.
    ///
    /// The rectangle is given by its minimum corner and extents; cells on
    /// the far boundary are included.
    pub fn set_rect_walkable(&mut self, origin: WorldPoint, w: f32, h: f32, walkable: bool) {
        let far = origin + WorldPoint::new(w, h);
        let a = self.world_to_grid(origin);
        let b = self.world_to_grid(far);
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.set_walkable(GridCoord::new(x, y), walkable);
            }
        }
    }

    /// Set walkability of every cell whose center lies within a world-space
    /// circle.
    pub fn set_circle_walkable(&mut self, center: WorldPoint, radius: f32, walkable: bool) {
        let r = radius.abs();
        let a = self.world_to_grid(center - WorldPoint::new(r, r));
        let b = self.world_to_grid(center + WorldPoint::new(r, r));

        for y in a.y..=b.y {
            for x in a.x..=b.x {
                let coord = GridCoord::new(x, y);
                if self.grid_to_world(coord).distance(&center) <= r {
                    self.set_walkable(coord, walkable);
                }
            }
        }
    }

    /// Enumerate walkable neighbors of a cell.
    ///
    /// A diagonal neighbor is included only if both orthogonal cells
    /// flanking it are also walkable, so a route can never clip through a
    /// wall corner.
    pub fn neighbors(&self, coord: GridCoord, allow_diagonal: bool) -> Vec<GridCoord> {
        let mut result = Vec::with_capacity(if allow_diagonal { 8 } else { 4 });

        for n in coord.neighbors_4() {
            if self.is_walkable(n) {
                result.push(n);
            }
        }

        if allow_diagonal {
            for n in coord.neighbors_diagonal() {
                if !self.is_walkable(n) {
                    continue;
                }
                let flank_a = GridCoord::new(n.x, coord.y);
                let flank_b = GridCoord::new(coord.x, n.y);
                if self.is_walkable(flank_a) && self.is_walkable(flank_b) {
                    result.push(n);
                }
            }
        }

        result
    }

    /// Find the walkable cell nearest to `center`, scanning outward in
    /// expanding rings up to `max_radius` cells.
    ///
    /// Useful for repairing a blocked destination before searching.
    pub fn nearest_walkable(&self, center: GridCoord, max_radius: i32) -> Option<GridCoord> {
        if self.is_walkable(center) {
            return Some(center);
        }

        for r in 1..=max_radius {
            for dy in -r..=r {
                for dx in -r..=r {
                    // Only cells on the ring boundary
                    if dx.abs() != r && dy.abs() != r {
                        continue;
                    }
                    let coord = GridCoord::new(center.x + dx, center.y + dy);
                    if self.is_walkable(coord) {
                        return Some(coord);
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid() -> NavGrid {
        NavGrid::new(10, 10, 32).unwrap()
    }

    #[test]
    fn test_invalid_cell_size() {
        assert!(NavGrid::new(10, 10, 0).is_err());
        assert!(NavGrid::new(10, 10, -4).is_err());
    }

    #[test]
    fn test_out_of_range_queries() {
        let mut grid = create_test_grid();
        assert!(!grid.is_walkable(GridCoord::new(-1, 0)));
        assert!(!grid.is_walkable(GridCoord::new(0, 10)));

        // Out-of-range set is a no-op, not a panic
        grid.set_walkable(GridCoord::new(100, 100), false);
        assert_eq!(grid.walkable_count(), 100);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = create_test_grid();
        let c = GridCoord::new(3, 7);
        assert!(grid.is_walkable(c));
        grid.set_walkable(c, false);
        assert!(!grid.is_walkable(c));
        assert_eq!(grid.walkable_count(), 99);
    }

    #[test]
    fn test_world_grid_round_trip() {
        let grid = create_test_grid();
        for y in 0..10 {
            for x in 0..10 {
                let c = GridCoord::new(x, y);
                assert_eq!(grid.world_to_grid(grid.grid_to_world(c)), c);
            }
        }
    }

    #[test]
    fn test_round_trip_odd_cell_size() {
        let grid = NavGrid::new(4, 4, 5).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let c = GridCoord::new(x, y);
                assert_eq!(grid.world_to_grid(grid.grid_to_world(c)), c);
            }
        }
    }

    #[test]
    fn test_grid_to_world_is_cell_center() {
        let grid = create_test_grid();
        let p = grid.grid_to_world(GridCoord::new(2, 3));
        assert_eq!(p, WorldPoint::new(80.0, 112.0));
    }

    #[test]
    fn test_set_rect_walkable() {
        let mut grid = create_test_grid();
        grid.set_rect_walkable(WorldPoint::new(32.0, 32.0), 64.0, 32.0, false);

        assert!(!grid.is_walkable(GridCoord::new(1, 1)));
        assert!(!grid.is_walkable(GridCoord::new(2, 1)));
        assert!(!grid.is_walkable(GridCoord::new(3, 2)));
        assert!(grid.is_walkable(GridCoord::new(0, 0)));
        assert!(grid.is_walkable(GridCoord::new(4, 3)));
    }

    #[test]
    fn test_set_circle_walkable() {
        let mut grid = create_test_grid();
        // Centered on the middle of cell (5, 5)
        let center = grid.grid_to_world(GridCoord::new(5, 5));
        grid.set_circle_walkable(center, 40.0, false);

        assert!(!grid.is_walkable(GridCoord::new(5, 5)));
        assert!(!grid.is_walkable(GridCoord::new(4, 5)));
        assert!(!grid.is_walkable(GridCoord::new(5, 6)));
        // Diagonal neighbor center is 32*sqrt(2) ~ 45.3 away, outside r=40
        assert!(grid.is_walkable(GridCoord::new(4, 4)));
        assert!(grid.is_walkable(GridCoord::new(8, 5)));
    }

    #[test]
    fn test_neighbors_orthogonal() {
        let grid = create_test_grid();
        let n = grid.neighbors(GridCoord::new(5, 5), false);
        assert_eq!(n.len(), 4);

        // Corner cell only has in-bounds neighbors
        let n = grid.neighbors(GridCoord::new(0, 0), false);
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn test_neighbors_corner_guard() {
        let mut grid = create_test_grid();
        // Block both orthogonal cells flanking the NE diagonal of (5, 5)
        grid.set_walkable(GridCoord::new(6, 5), false);
        grid.set_walkable(GridCoord::new(5, 6), false);

        let n = grid.neighbors(GridCoord::new(5, 5), true);
        assert!(!n.contains(&GridCoord::new(6, 6)));
        // Other diagonals unaffected
        assert!(n.contains(&GridCoord::new(4, 4)));
    }

    #[test]
    fn test_nearest_walkable() {
        let mut grid = create_test_grid();
        let c = GridCoord::new(5, 5);
        assert_eq!(grid.nearest_walkable(c, 3), Some(c));

        grid.set_circle_walkable(grid.grid_to_world(c), 40.0, false);
        let found = grid.nearest_walkable(c, 3).unwrap();
        assert!(grid.is_walkable(found));
        assert!(found.chebyshev_distance(&c) <= 2);

        grid.fill(false);
        assert_eq!(grid.nearest_walkable(c, 3), None);
    }

    #[test]
    fn test_degenerate_grid() {
        let grid = NavGrid::new(0, 0, 32).unwrap();
        assert!(!grid.is_walkable(GridCoord::new(0, 0)));
        assert_eq!(grid.cell_count(), 0);
    }
}
