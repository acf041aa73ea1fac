//! Navigation grid.
//!
//! Provides [`NavGrid`], the walkability matrix all searches run against,
//! with world-to-grid coordinate conversion and bulk obstacle setters.

mod storage;

pub use storage::NavGrid;
