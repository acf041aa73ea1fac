//! Search benchmarks on a 64x64 grid with partial walls.

use criterion::{criterion_group, criterion_main, Criterion};
use marga_nav::{GridCoord, NavGrid, PathOptimizer, SearchConfig, SearchEngine, WorldPoint};

fn build_grid() -> NavGrid {
    let mut grid = NavGrid::new(64, 64, 32).unwrap();
    // Staggered walls force real detours
    for y in 0..48 {
        grid.set_walkable(GridCoord::new(16, y), false);
    }
    for y in 16..64 {
        grid.set_walkable(GridCoord::new(32, y), false);
    }
    for y in 0..48 {
        grid.set_walkable(GridCoord::new(48, y), false);
    }
    grid
}

fn bench_find_path(c: &mut Criterion) {
    let grid = build_grid();
    let start = WorldPoint::new(16.0, 16.0);
    let goal = WorldPoint::new(2030.0, 2030.0);
    // The snake route forces wide exploration; give the search headroom
    let config = SearchConfig {
        node_budget: 10_000,
        ..Default::default()
    };

    c.bench_function("find_path_64x64", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(&grid, config.clone());
            engine.find_path(start, goal).unwrap()
        })
    });

    c.bench_function("find_path_and_optimize_64x64", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(&grid, config.clone());
            let path = engine.find_path(start, goal).unwrap();
            PathOptimizer::with_defaults(&grid).optimize(&path)
        })
    });
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
