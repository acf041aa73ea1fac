//! Plan and optimize a route across a walled map.
//!
//! Run with `RUST_LOG=debug` to see the engine's search diagnostics.

use marga_nav::{
    path_length, NavGrid, PathOptimizer, SearchEngine, WorldPoint,
};

fn main() -> marga_nav::Result<()> {
    env_logger::init();

    // 24x24 cells at 32 world units per cell
    let mut grid = NavGrid::new(24, 24, 32)?;

    // Full-height wall at columns 12-13, with a gap at rows 10-12
    grid.set_rect_walkable(WorldPoint::new(384.0, 0.0), 32.0, 768.0, false);
    grid.set_rect_walkable(WorldPoint::new(384.0, 320.0), 32.0, 64.0, true);

    // Round obstacle in the right half
    grid.set_circle_walkable(WorldPoint::new(600.0, 200.0), 60.0, false);

    let start = WorldPoint::new(40.0, 40.0);
    let goal = WorldPoint::new(700.0, 700.0);

    let mut engine = SearchEngine::with_defaults(&grid);
    for warning in &engine.validate().warnings {
        eprintln!("config warning: {warning}");
    }

    match engine.find_path(start, goal) {
        Some(path) => {
            let stats = engine.last_stats();
            println!(
                "raw route: {} points, {:.0} units ({} nodes expanded in {}us)",
                path.len(),
                path_length(&path),
                stats.nodes_expanded,
                stats.search_time_us,
            );

            let optimizer = PathOptimizer::with_defaults(&grid);
            let waypoints = optimizer.optimize(&path);
            println!(
                "optimized: {} waypoints, {:.0} units",
                waypoints.len(),
                path_length(&waypoints),
            );
            for (i, p) in waypoints.iter().enumerate() {
                println!("  [{i}] ({:.1}, {:.1})", p.x, p.y);
            }
        }
        None => println!("no route from {start:?} to {goal:?}"),
    }

    Ok(())
}
