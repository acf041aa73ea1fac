//! Waypoint optimization for raw cell paths.
//!
//! Collapses a cell-by-cell route into a sparse waypoint list using
//! line-of-sight pruning, with optional smoothing, densification and
//! simplification passes for locomotion/animation consumers.

use crate::config::OptimizerSettings;
use crate::core::{GridCoord, WorldPoint};
use crate::grid::NavGrid;

/// Optimizer configuration
#[derive(Clone, Copy, Debug)]
pub struct OptimizerConfig {
    /// How many points ahead of the current anchor the greedy scan may
    /// look. Bounding the window keeps optimization O(n * window) on long
    /// paths.
    pub lookahead: usize,
    /// Raw paths longer than this that collapse to a single start-to-goal
    /// jump get a midpoint re-inserted, avoiding an unnaturally long
    /// straight-line snap across the whole route.
    pub midpoint_threshold: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            lookahead: 10,
            midpoint_threshold: 8,
        }
    }
}

impl OptimizerConfig {
    /// Build a runtime configuration from a serde settings section.
    pub fn from_settings(settings: &OptimizerSettings) -> Self {
        Self {
            lookahead: settings.lookahead,
            midpoint_threshold: settings.midpoint_threshold,
        }
    }
}

/// How far a smoothed point moves toward the midpoint of its neighbors
const SMOOTHING_ALPHA: f32 = 0.5;

/// Path post-processor over a borrowed grid.
pub struct PathOptimizer<'a> {
    grid: &'a NavGrid,
    config: OptimizerConfig,
}

impl<'a> PathOptimizer<'a> {
    /// Create a new path optimizer
    pub fn new(grid: &'a NavGrid, config: OptimizerConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a NavGrid) -> Self {
        Self::new(grid, OptimizerConfig::default())
    }

    /// Check that the straight segment between two world points crosses no
    /// unwalkable cell.
    ///
    /// Rasterizes the segment with Bresenham's line algorithm and fails as
    /// soon as any traversed cell (endpoints included) is not walkable.
    pub fn has_line_of_sight(&self, from: WorldPoint, to: WorldPoint) -> bool {
        let a = self.grid.world_to_grid(from);
        let b = self.grid.world_to_grid(to);

        let mut x0 = a.x;
        let mut y0 = a.y;
        let x1 = b.x;
        let y1 = b.y;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if !self.grid.is_walkable(GridCoord::new(x0, y0)) {
                return false;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }

        true
    }

    /// Reduce a raw cell-adjacent path to a sparse waypoint list.
    ///
    /// Greedy forward scan: from the current anchor, take the furthest
    /// point within the lookahead window that is still in line-of-sight
    /// and make it the next anchor. This is a bounded-lookahead
    /// approximation, not a globally minimal reduction; consumers depend
    /// on its waypoint density.
    ///
    /// Paths of three or fewer points are returned unchanged. The final
    /// output point always equals the final input point.
    pub fn optimize(&self, path: &[WorldPoint]) -> Vec<WorldPoint> {
        if path.len() <= 3 {
            return path.to_vec();
        }

        let mut result = vec![path[0]];
        let mut anchor = 0;

        while anchor < path.len() - 1 {
            let window_end = (anchor + self.config.lookahead).min(path.len() - 1);
            let mut furthest = anchor + 1;

            for j in (anchor + 2)..=window_end {
                if self.has_line_of_sight(path[anchor], path[j]) {
                    furthest = j;
                }
            }

            result.push(path[furthest]);
            anchor = furthest;
        }

        // A long route collapsed to one jump looks like a teleport snap;
        // put the middle of the raw path back in.
        if result.len() == 2 && path.len() > self.config.midpoint_threshold {
            result.insert(1, path[path.len() / 2]);
        }

        result
    }

    /// One low-pass smoothing pass: each interior point moves halfway
    /// toward the midpoint of its neighbors, reverted per-point when the
    /// move would land in an unwalkable cell. Endpoints never move.
    pub fn smooth(&self, path: &[WorldPoint]) -> Vec<WorldPoint> {
        if path.len() <= 2 {
            return path.to_vec();
        }

        let mut result = path.to_vec();
        for i in 1..path.len() - 1 {
            let target = path[i - 1].lerp(&path[i + 1], 0.5);
            let candidate = path[i].lerp(&target, SMOOTHING_ALPHA);

            if self.grid.is_walkable(self.grid.world_to_grid(candidate)) {
                result[i] = candidate;
            }
        }

        result
    }

    /// Insert evenly spaced intermediate points so that no segment exceeds
    /// `max_segment` world units.
    pub fn densify(&self, path: &[WorldPoint], max_segment: f32) -> Vec<WorldPoint> {
        if path.len() < 2 || max_segment <= 0.0 {
            return path.to_vec();
        }

        let mut result = vec![path[0]];
        for window in path.windows(2) {
            let length = window[0].distance(&window[1]);
            let segments = (length / max_segment).ceil().max(1.0) as usize;
            for s in 1..=segments {
                result.push(window[0].lerp(&window[1], s as f32 / segments as f32));
            }
        }

        result
    }

    /// Drop points closer than `min_distance` to the previously kept
    /// point. First and last points are always preserved.
    pub fn simplify(&self, path: &[WorldPoint], min_distance: f32) -> Vec<WorldPoint> {
        if path.len() <= 2 {
            return path.to_vec();
        }

        let mut result = vec![path[0]];
        for point in &path[1..path.len() - 1] {
            if result.last().unwrap().distance(point) >= min_distance {
                result.push(*point);
            }
        }
        result.push(*path.last().unwrap());

        result
    }

    /// Cheap revalidation of a stored path after grid changes: every
    /// point's cell must be walkable and every consecutive pair must be in
    /// line-of-sight. Empty paths are not valid routes.
    pub fn is_path_valid(&self, path: &[WorldPoint]) -> bool {
        if path.is_empty() {
            return false;
        }
        if !path
            .iter()
            .all(|p| self.grid.is_walkable(self.grid.world_to_grid(*p)))
        {
            return false;
        }
        path.windows(2)
            .all(|w| self.has_line_of_sight(w[0], w[1]))
    }
}

/// Total world-space length of a path
pub fn path_length(path: &[WorldPoint]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
