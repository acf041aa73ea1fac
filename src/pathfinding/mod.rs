//! Path planning over the navigation grid.
//!
//! This module provides:
//!
//! - **Heuristics**: Manhattan, Euclidean and Octile distance estimates
//! - **Movement rules**: 4-way vs 8-way movement, corner-cutting prevention
//! - **A\* search**: full, partial and existence queries with diagnostics
//! - **Path optimization**: line-of-sight waypoint reduction plus
//!   smoothing, densification and simplification passes
//!
//! ## Finding a path
//!
//! ```rust,ignore
//! use marga_nav::pathfinding::{SearchEngine, SearchConfig};
//!
//! let mut engine = SearchEngine::new(&grid, SearchConfig::default());
//! if let Some(path) = engine.find_path(start, goal) {
//!     println!("route with {} points", path.len());
//! }
//! ```
//!
//! ## Optimizing it
//!
//! ```rust,ignore
//! use marga_nav::pathfinding::PathOptimizer;
//!
//! let optimizer = PathOptimizer::with_defaults(&grid);
//! let waypoints = optimizer.optimize(&path);
//! ```

pub mod astar;
pub mod heuristic;
pub mod movement;
pub mod optimizer;

pub use astar::{
    ConfigWarning, SearchConfig, SearchEngine, SearchStats, ValidationReport,
};
pub use heuristic::Heuristic;
pub use movement::MovementRules;
pub use optimizer::{path_length, OptimizerConfig, PathOptimizer};
