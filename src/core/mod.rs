//! Fundamental coordinate types shared by the grid and the search engine.

mod point;

pub use point::{GridCoord, WorldPoint};
