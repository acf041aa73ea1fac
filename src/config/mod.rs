//! Configuration for the navigation engine.
//!
//! Serde-backed sections with YAML load/save helpers; the host application
//! decides where the values come from.

mod defaults;
mod sections;

pub use sections::{GridSettings, NavConfig, OptimizerSettings, SearchSettings};
