//! A* search engine.
//!
//! Implements A* over the walkability grid with:
//! - Pluggable heuristics and movement rules
//! - Deterministic tie-breaking (lower f, then lower h, then coordinates)
//! - A node-expansion budget guarding against runaway searches
//! - Partial-path fallback to the closest reachable approach

use crate::config::SearchSettings;
use crate::core::{GridCoord, WorldPoint};
use crate::grid::NavGrid;
use crate::pathfinding::{Heuristic, MovementRules};
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::time::Instant;

/// Start and end resolving to the same cell short-circuit the search; below
/// this world-space distance the movement is not worth a two-point path.
const SAME_CELL_EPSILON: f32 = 1e-3;

/// Search configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Heuristic used to estimate remaining cost
    pub heuristic: Heuristic,
    /// Legal-move policy
    pub movement: MovementRules,
    /// Maximum number of nodes to expand before giving up
    pub node_budget: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Octile,
            movement: MovementRules::default(),
            node_budget: 2_000,
        }
    }
}

impl SearchConfig {
    /// Build a runtime configuration from a serde settings section.
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self {
            heuristic: settings.heuristic,
            movement: MovementRules {
                allow_diagonal: settings.allow_diagonal,
                prevent_corner_cutting: settings.prevent_corner_cutting,
                diagonal_cost: settings.diagonal_cost,
            },
            node_budget: settings.node_budget,
        }
    }
}

/// Diagnostics from the most recent search call.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Nodes actually expanded (stale heap duplicates excluded)
    pub nodes_expanded: usize,
    /// Wall-clock search time in microseconds
    pub search_time_us: u64,
    /// Node budget the search ran under
    pub node_budget: usize,
}

/// Non-fatal configuration problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The selected heuristic overestimates under the current movement
    /// model; paths may be suboptimal.
    InadmissibleHeuristic {
        /// The offending heuristic
        heuristic: Heuristic,
    },
    /// A zero node budget aborts every search immediately.
    ZeroNodeBudget,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::InadmissibleHeuristic { heuristic } => write!(
                f,
                "{:?} heuristic overestimates with diagonal movement enabled; paths may be suboptimal",
                heuristic
            ),
            ConfigWarning::ZeroNodeBudget => {
                write!(f, "node budget is zero; every search will abort")
            }
        }
    }
}

/// Result of [`SearchEngine::validate`].
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// Detected configuration problems, possibly empty
    pub warnings: Vec<ConfigWarning>,
}

impl ValidationReport {
    /// True when no warnings were raised
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A search vertex in the arena.
///
/// `f` is always derived as `g + h`, never stored. Parent links are arena
/// indices, so the whole search tree is freed when the arena drops.
#[derive(Clone, Copy, Debug)]
struct Node {
    coord: GridCoord,
    /// Accumulated cost from the start, in cell units
    g: f32,
    /// Heuristic estimate to the goal, in cell units
    h: f32,
    parent: Option<u32>,
}

impl Node {
    #[inline]
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Open-set entry pointing into the node arena.
struct OpenEntry {
    f: f32,
    h: f32,
    coord: GridCoord,
    index: u32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; ties broken by lower h
        // (favors nodes closer to the goal), then by coordinates so pop
        // order never depends on insertion history.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.h.partial_cmp(&self.h).unwrap_or(Ordering::Equal))
            .then_with(|| self.coord.x.cmp(&other.coord.x))
            .then_with(|| self.coord.y.cmp(&other.coord.y))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one search run.
struct SearchOutcome {
    /// Arena index of the goal node, if it was reached
    reached: Option<u32>,
    /// Arena index of the node with the lowest heuristic seen
    closest: u32,
    arena: Vec<Node>,
}

/// A* pathfinder over a borrowed grid.
///
/// All query methods are world-space; results are world-space point lists.
/// "No route" outcomes are `None`, never errors.
pub struct SearchEngine<'a> {
    grid: &'a NavGrid,
    config: SearchConfig,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine
    pub fn new(grid: &'a NavGrid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a NavGrid) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Current configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Diagnostics from the most recent query
    pub fn last_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Report non-fatal configuration problems.
    ///
    /// The search still runs (possibly suboptimally) if warnings are
    /// ignored; each warning is also logged.
    pub fn validate(&self) -> ValidationReport {
        let mut warnings = Vec::new();

        if !self
            .config
            .heuristic
            .is_admissible(self.config.movement.allow_diagonal)
        {
            warnings.push(ConfigWarning::InadmissibleHeuristic {
                heuristic: self.config.heuristic,
            });
        }
        if self.config.node_budget == 0 {
            warnings.push(ConfigWarning::ZeroNodeBudget);
        }

        for w in &warnings {
            warn!("[Search] {}", w);
        }

        ValidationReport { warnings }
    }

    /// Find a walkable route from `start` to `goal`.
    ///
    /// Returns `None` when no route exists, the goal cell is unwalkable,
    /// the node budget is exceeded, or the input is invalid (non-finite or
    /// out of grid bounds). The start cell is deliberately not required to
    /// be walkable so an agent standing on an obstacle edge can path away
    /// from it.
    pub fn find_path(&mut self, start: WorldPoint, goal: WorldPoint) -> Option<Vec<WorldPoint>> {
        self.reset_stats();
        let (start_cell, goal_cell) = self.validated_cells(start, goal)?;

        trace!(
            "[Search] find_path: start=({},{}) goal=({},{})",
            start_cell.x, start_cell.y, goal_cell.x, goal_cell.y
        );

        if start_cell == goal_cell {
            return Some(Self::intra_cell_path(start, goal));
        }

        if !self.grid.is_walkable(goal_cell) {
            debug!(
                "[Search] goal cell ({},{}) is not walkable",
                goal_cell.x, goal_cell.y
            );
            return None;
        }

        let outcome = self.run_search(start_cell, goal_cell, None);
        let reached = outcome.reached?;
        Some(self.reconstruct(&outcome.arena, reached, start, Some(goal)))
    }

    /// Find a route towards `goal`, settling for the closest reachable
    /// approach when the goal cannot be reached.
    ///
    /// `max_distance` is a world-space cost cap: nodes whose accumulated
    /// cost exceeds it are not expanded further. Unlike [`Self::find_path`]
    /// the goal cell may be unwalkable - moving "as close as possible" to a
    /// blocked destination is the point of this query. Returns `None` only
    /// for invalid input.
    pub fn find_partial_path(
        &mut self,
        start: WorldPoint,
        goal: WorldPoint,
        max_distance: f32,
    ) -> Option<Vec<WorldPoint>> {
        self.reset_stats();
        if !max_distance.is_finite() {
            return None;
        }
        let (start_cell, goal_cell) = self.validated_cells(start, goal)?;

        trace!(
            "[Search] find_partial_path: start=({},{}) goal=({},{}) max_distance={:.1}",
            start_cell.x, start_cell.y, goal_cell.x, goal_cell.y, max_distance
        );

        if start_cell == goal_cell {
            return Some(Self::intra_cell_path(start, goal));
        }

        let cost_budget = max_distance / self.grid.cell_size() as f32;
        let outcome = self.run_search(start_cell, goal_cell, Some(cost_budget));

        let target = outcome.reached.unwrap_or(outcome.closest);
        // Only snap the final point onto the exact goal if we got there
        let exact_goal = outcome.reached.map(|_| goal);
        Some(self.reconstruct(&outcome.arena, target, start, exact_goal))
    }

    /// Whether any route exists from `start` to `goal`.
    ///
    /// Runs the same search as [`Self::find_path`] but skips path
    /// reconstruction.
    pub fn path_exists(&mut self, start: WorldPoint, goal: WorldPoint) -> bool {
        self.reset_stats();
        let Some((start_cell, goal_cell)) = self.validated_cells(start, goal) else {
            return false;
        };
        if start_cell == goal_cell {
            return true;
        }
        if !self.grid.is_walkable(goal_cell) {
            return false;
        }
        self.run_search(start_cell, goal_cell, None).reached.is_some()
    }

    /// Heuristic distance between the cells containing `start` and `goal`,
    /// scaled to world units.
    ///
    /// A fast, non-authoritative estimate for prioritization and sorting;
    /// no search runs. `None` on invalid input.
    pub fn estimate_cost(&self, start: WorldPoint, goal: WorldPoint) -> Option<f32> {
        let (start_cell, goal_cell) = self.validated_cells(start, goal)?;
        let estimate = self.config.heuristic.estimate(
            start_cell,
            goal_cell,
            self.config.movement.diagonal_cost,
        );
        Some(estimate * self.grid.cell_size() as f32)
    }

    fn reset_stats(&mut self) {
        self.stats = SearchStats {
            nodes_expanded: 0,
            search_time_us: 0,
            node_budget: self.config.node_budget,
        };
    }

    /// Validate world inputs and resolve them to in-bounds cells.
    fn validated_cells(&self, start: WorldPoint, goal: WorldPoint) -> Option<(GridCoord, GridCoord)> {
        if !start.is_finite() || !goal.is_finite() {
            return None;
        }
        let start_cell = self.grid.world_to_grid(start);
        let goal_cell = self.grid.world_to_grid(goal);
        if !self.grid.is_valid_coord(start_cell) || !self.grid.is_valid_coord(goal_cell) {
            return None;
        }
        Some((start_cell, goal_cell))
    }

    /// Trivial path for a start and goal inside the same cell.
    fn intra_cell_path(start: WorldPoint, goal: WorldPoint) -> Vec<WorldPoint> {
        if start.distance(&goal) > SAME_CELL_EPSILON {
            vec![start, goal]
        } else {
            vec![goal]
        }
    }

    /// Core A* loop shared by the full, partial and existence queries.
    ///
    /// `cost_budget` (cell units) caps how far out nodes are expanded; the
    /// node budget from the configuration always applies.
    fn run_search(
        &mut self,
        start: GridCoord,
        goal: GridCoord,
        cost_budget: Option<f32>,
    ) -> SearchOutcome {
        let started = Instant::now();
        let heuristic = self.config.heuristic;
        let movement = self.config.movement;

        let mut arena: Vec<Node> = Vec::with_capacity(64);
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut closed: HashSet<GridCoord> = HashSet::new();
        let mut best_g: HashMap<GridCoord, f32> = HashMap::new();

        let h0 = heuristic.estimate(start, goal, movement.diagonal_cost);
        let root = Node {
            coord: start,
            g: 0.0,
            h: h0,
            parent: None,
        };
        arena.push(root);
        best_g.insert(start, 0.0);
        open.push(OpenEntry {
            f: root.f(),
            h: h0,
            coord: start,
            index: 0,
        });

        let mut closest: u32 = 0;
        let mut closest_h = h0;
        let mut reached: Option<u32> = None;
        let mut expanded = 0usize;

        while let Some(entry) = open.pop() {
            if closed.contains(&entry.coord) {
                continue; // stale duplicate
            }

            if entry.coord == goal {
                reached = Some(entry.index);
                break;
            }

            let current = arena[entry.index as usize];

            // Out of range for a partial search: keep as a candidate but
            // do not expand further.
            if let Some(budget) = cost_budget {
                if current.g > budget {
                    continue;
                }
            }

            if expanded >= self.config.node_budget {
                warn!(
                    "[Search] node budget exceeded ({} nodes), aborting",
                    expanded
                );
                break;
            }
            closed.insert(entry.coord);
            expanded += 1;

            for neighbor in movement.valid_neighbors(self.grid, entry.coord) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current.g + movement.move_cost(entry.coord, neighbor);
                if let Some(&recorded) = best_g.get(&neighbor) {
                    if recorded <= tentative_g {
                        continue; // no improvement
                    }
                }

                let h = heuristic.estimate(neighbor, goal, movement.diagonal_cost);
                let index = arena.len() as u32;
                let node = Node {
                    coord: neighbor,
                    g: tentative_g,
                    h,
                    parent: Some(entry.index),
                };
                arena.push(node);
                best_g.insert(neighbor, tentative_g);

                if h < closest_h {
                    closest_h = h;
                    closest = index;
                }

                open.push(OpenEntry {
                    f: node.f(),
                    h,
                    coord: neighbor,
                    index,
                });
            }
        }

        self.stats.nodes_expanded = expanded;
        self.stats.search_time_us = started.elapsed().as_micros() as u64;

        match reached {
            Some(index) => debug!(
                "[Search] reached goal: cost={:.2} nodes_expanded={}",
                arena[index as usize].g,
                expanded
            ),
            None => debug!("[Search] goal not reached after {} nodes", expanded),
        }

        SearchOutcome {
            reached,
            closest,
            arena,
        }
    }

    /// Walk parent links from `end_index` back to the root and emit the
    /// world-space path, start first.
    ///
    /// Intermediate points are cell centers; the first point is the exact
    /// caller start, and the last is the exact caller goal when the goal
    /// cell was reached.
    fn reconstruct(
        &self,
        arena: &[Node],
        end_index: u32,
        exact_start: WorldPoint,
        exact_goal: Option<WorldPoint>,
    ) -> Vec<WorldPoint> {
        let mut cells = Vec::new();
        let mut cursor = Some(end_index);
        while let Some(index) = cursor {
            let node = &arena[index as usize];
            cells.push(node.coord);
            cursor = node.parent;
        }
        cells.reverse();

        let mut points: Vec<WorldPoint> =
            cells.iter().map(|&c| self.grid.grid_to_world(c)).collect();
        points[0] = exact_start;
        if let Some(goal) = exact_goal {
            let last = points.len() - 1;
            points[last] = goal;
        }
        points
    }
}
