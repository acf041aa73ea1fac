//! Legal-move policy shared by the search engine and the grid.

use crate::core::GridCoord;
use crate::grid::NavGrid;

/// Movement rules: which neighbor transitions are legal and what they cost.
///
/// The presets are configuration bundles, not separate algorithms:
///
/// - [`MovementRules::point_and_click`]: diagonal on, corner-cutting
///   prevention on (the default)
/// - [`MovementRules::grid_strategy`]: diagonal off, uniform cost
/// - [`MovementRules::open_field`]: diagonal on, corner-cutting
///   prevention off
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementRules {
    /// Allow 8-directional movement (vs 4-directional)
    pub allow_diagonal: bool,
    /// Reject diagonal moves that would clip a wall corner
    pub prevent_corner_cutting: bool,
    /// Cost multiplier for diagonal moves (sqrt(2))
    pub diagonal_cost: f32,
}

impl Default for MovementRules {
    fn default() -> Self {
        Self::point_and_click()
    }
}

impl MovementRules {
    /// Point-and-click navigation: diagonal movement with corner-cutting
    /// prevention.
    pub fn point_and_click() -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting: true,
            diagonal_cost: std::f32::consts::SQRT_2,
        }
    }

    /// Grid-strategy movement: 4-directional, uniform cost.
    pub fn grid_strategy() -> Self {
        Self {
            allow_diagonal: false,
            prevent_corner_cutting: true,
            diagonal_cost: 1.0,
        }
    }

    /// Open-field movement: diagonal movement, corner clipping allowed.
    pub fn open_field() -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting: false,
            diagonal_cost: std::f32::consts::SQRT_2,
        }
    }

    /// Cost of a single step between two adjacent cells: 1.0 for an
    /// orthogonal step, `diagonal_cost` for a diagonal one.
    #[inline]
    pub fn move_cost(&self, from: GridCoord, to: GridCoord) -> f32 {
        if from.x != to.x && from.y != to.y {
            self.diagonal_cost
        } else {
            1.0
        }
    }

    /// Enumerate the legal, walkable neighbors of a cell under these rules.
    pub fn valid_neighbors(&self, grid: &NavGrid, coord: GridCoord) -> Vec<GridCoord> {
        let mut result = Vec::with_capacity(if self.allow_diagonal { 8 } else { 4 });

        for n in coord.neighbors_4() {
            if grid.is_walkable(n) {
                result.push(n);
            }
        }

        if self.allow_diagonal {
            for n in coord.neighbors_diagonal() {
                if !grid.is_walkable(n) {
                    continue;
                }
                if self.prevent_corner_cutting {
                    let flank_a = GridCoord::new(n.x, coord.y);
                    let flank_b = GridCoord::new(coord.x, n.y);
                    if !grid.is_walkable(flank_a) || !grid.is_walkable(flank_b) {
                        continue;
                    }
                }
                result.push(n);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid() -> NavGrid {
        NavGrid::new(10, 10, 32).unwrap()
    }

    #[test]
    fn test_move_cost() {
        let rules = MovementRules::point_and_click();
        let c = GridCoord::new(5, 5);
        assert_eq!(rules.move_cost(c, GridCoord::new(6, 5)), 1.0);
        assert_eq!(rules.move_cost(c, GridCoord::new(5, 4)), 1.0);
        assert_eq!(
            rules.move_cost(c, GridCoord::new(6, 6)),
            std::f32::consts::SQRT_2
        );
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = create_test_grid();
        let c = GridCoord::new(5, 5);
        assert_eq!(MovementRules::grid_strategy().valid_neighbors(&grid, c).len(), 4);
        assert_eq!(MovementRules::point_and_click().valid_neighbors(&grid, c).len(), 8);
    }

    #[test]
    fn test_corner_cutting_prevented() {
        let mut grid = create_test_grid();
        // Both orthogonal cells flanking the NE diagonal are blocked
        grid.set_walkable(GridCoord::new(6, 5), false);
        grid.set_walkable(GridCoord::new(5, 6), false);

        let c = GridCoord::new(5, 5);
        let guarded = MovementRules::point_and_click().valid_neighbors(&grid, c);
        assert!(!guarded.contains(&GridCoord::new(6, 6)));

        let open = MovementRules::open_field().valid_neighbors(&grid, c);
        assert!(open.contains(&GridCoord::new(6, 6)));
    }

    #[test]
    fn test_single_flank_blocks_diagonal() {
        let mut grid = create_test_grid();
        // One blocked flank is enough to reject the diagonal
        grid.set_walkable(GridCoord::new(6, 5), false);

        let c = GridCoord::new(5, 5);
        let n = MovementRules::point_and_click().valid_neighbors(&grid, c);
        assert!(!n.contains(&GridCoord::new(6, 6)));
        assert!(!n.contains(&GridCoord::new(6, 4)));
        assert!(n.contains(&GridCoord::new(4, 4)));
    }

    #[test]
    fn test_unwalkable_neighbors_excluded() {
        let mut grid = create_test_grid();
        grid.set_walkable(GridCoord::new(5, 6), false);

        let n = MovementRules::grid_strategy().valid_neighbors(&grid, GridCoord::new(5, 5));
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&GridCoord::new(5, 6)));
    }
}
