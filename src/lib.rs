//! # Marga-Nav: Grid-Based A* Pathfinding
//!
//! A pathfinding engine for 2D worlds subdivided into a uniform grid of
//! traversability flags: A* search with pluggable heuristics and movement
//! rules, partial-path fallback, and a line-of-sight waypoint optimizer.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{NavGrid, PathOptimizer, SearchEngine, WorldPoint};
//!
//! // 16x16 cells, 32 world units per cell
//! let mut grid = NavGrid::new(16, 16, 32).unwrap();
//!
//! // Carve a wall out of the walkable area
//! grid.set_rect_walkable(WorldPoint::new(128.0, 0.0), 32.0, 320.0, false);
//!
//! let mut engine = SearchEngine::with_defaults(&grid);
//! let path = engine
//!     .find_path(WorldPoint::new(16.0, 16.0), WorldPoint::new(400.0, 400.0))
//!     .expect("route exists around the wall");
//!
//! let optimizer = PathOptimizer::with_defaults(&grid);
//! let waypoints = optimizer.optimize(&path);
//! assert!(waypoints.len() <= path.len());
//! ```
//!
//! ## Data Flow
//!
//! The caller supplies world-space start/end coordinates. The grid resolves
//! them to cells, the search engine explores cells using the movement rules
//! for legal steps and the heuristic for cost estimates, the raw cell route
//! is converted back to world coordinates, and the optimizer reduces it to
//! a minimal waypoint list.
//!
//! ## Architecture
//!
//! - [`core`]: Coordinate types ([`GridCoord`], [`WorldPoint`])
//! - [`grid`]: The walkability grid ([`NavGrid`])
//! - [`pathfinding`]: Heuristics, movement rules, the A\* engine and the
//!   path optimizer
//! - [`config`]: Serde-backed settings sections with YAML helpers
//! - [`error`]: Crate error type
//!
//! ## Concurrency
//!
//! Every query is synchronous and runs to completion (or aborts at the
//! node budget). Engines and optimizers borrow the grid, so the borrow
//! checker enforces the "no mutation during a search" rule in-process;
//! callers sharing a grid across threads must serialize mutation against
//! in-flight searches or hand workers a cloned snapshot.

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod pathfinding;

pub use config::{GridSettings, NavConfig, OptimizerSettings, SearchSettings};
pub use core::{GridCoord, WorldPoint};
pub use error::{NavError, Result};
pub use grid::NavGrid;
pub use pathfinding::{
    path_length, ConfigWarning, Heuristic, MovementRules, OptimizerConfig, PathOptimizer,
    SearchConfig, SearchEngine, SearchStats, ValidationReport,
};
