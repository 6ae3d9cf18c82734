//! Propagation and termination invariants of the double-buffered update.
//!
//! These tests pin the observable consequences of the chosen update model:
//! the fire front advances exactly one cell per step, every run terminates
//! within the longest occupied path, and a finished run is frozen.

use forest_fire_core::{Cell, ForestFire, SimulationParameters, StatsCollector, TreeGrid};

/// Step to completion (bounded) while collecting statistics, baseline included.
fn run_collected(sim: &mut ForestFire, max_steps: u64) -> StatsCollector {
    let mut collector = StatsCollector::new();
    collector.collect(sim);
    while sim.running() && sim.steps() < max_steps {
        sim.step();
        collector.collect(sim);
    }
    collector
}

fn full_grid_sim(width: usize, height: usize) -> ForestFire {
    let params = SimulationParameters::new(width, height, 1.0, 0.0, 0.0, 0).unwrap();
    ForestFire::new(params).unwrap()
}

#[test]
fn test_front_crosses_a_full_grid_in_width_steps() {
    // Fully occupied grid, whole first column alight: the front is a
    // vertical line moving right one column per step
    let mut sim = full_grid_sim(12, 4);
    let collector = run_collected(&mut sim, 1000);

    assert!(!sim.running());
    assert_eq!(sim.steps(), 12);

    // After step k, exactly k columns (4 cells each) have burned out and
    // the next column is burning
    for (k, snapshot) in collector.snapshots().iter().enumerate() {
        assert_eq!(snapshot.burned_out, 4 * k.min(12));
        let expected_burning = if k < 12 { 4 } else { 0 };
        assert_eq!(snapshot.burning, expected_burning);
    }
}

#[test]
fn test_termination_bounded_by_longest_occupied_path() {
    // Sparse stochastic layout still halts within tree_count steps, the
    // crude upper bound on any occupied path length
    let params = SimulationParameters::new(30, 30, 0.6, 0.0, 0.0, 11).unwrap();
    let mut sim = ForestFire::new(params).unwrap();
    let bound = sim.tree_count() as u64 + 1;
    run_collected(&mut sim, bound);
    assert!(!sim.running());
}

#[test]
fn test_burned_out_count_is_monotonic() {
    let params = SimulationParameters::new(25, 25, 0.7, 0.2, 0.1, 3).unwrap();
    let mut sim = ForestFire::new(params).unwrap();
    let collector = run_collected(&mut sim, 10_000);

    let snapshots = collector.snapshots();
    for pair in snapshots.windows(2) {
        assert!(pair[1].burned_out >= pair[0].burned_out);
    }
    // Tree population is fixed for the simulation's lifetime
    assert!(snapshots
        .iter()
        .all(|s| s.tree_count() == snapshots[0].tree_count()));
}

#[test]
fn test_soil_invariant_without_humidity() {
    // With humidity 0 no suppression can neutralize soil, so acidified
    // ground only accumulates and always covers burned-out cells plus the
    // cells that are currently or initially burning
    let params = SimulationParameters::new(25, 25, 0.7, 0.0, 0.15, 5).unwrap();
    let mut sim = ForestFire::new(params).unwrap();
    let collector = run_collected(&mut sim, 10_000);

    let snapshots = collector.snapshots();
    for pair in snapshots.windows(2) {
        assert!(pair[1].acidified_soil >= pair[0].acidified_soil);
    }
    // Burned-out ground is always acidified, and the initial acid cover
    // (ignition edge plus wind seeds) is never lost
    for snapshot in snapshots {
        assert!(snapshot.acidified_soil >= snapshot.burned_out);
        assert!(snapshot.acidified_soil >= snapshots[0].acidified_soil);
    }
}

#[test]
fn test_burning_positive_throughout_an_edge_ignited_run() {
    let mut sim = full_grid_sim(6, 3);
    let collector = run_collected(&mut sim, 1000);
    let snapshots = collector.snapshots();

    assert!(snapshots[0].burning > 0); // edge ignition
    assert_eq!(snapshots.last().unwrap().burning, 0);
    assert!(snapshots[1..snapshots.len() - 1]
        .iter()
        .all(|s| s.burning > 0));
}

#[test]
fn test_no_initial_fire_stays_cold() {
    // Hand-built grid with no ignition edge and no wind seeds
    let params = SimulationParameters::new(4, 4, 1.0, 0.0, 0.0, 0).unwrap();
    let mut grid = TreeGrid::new(4, 4, params.adjacency);
    for y in 0..4 {
        for x in 0..4 {
            grid.place(x, y, Cell::unignited());
        }
    }
    let mut sim = ForestFire::with_grid(grid, params).unwrap();
    assert!(!sim.running());

    let collector = run_collected(&mut sim, 100);
    let snapshots = collector.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].burning, 0);
    assert_eq!(snapshots[0].burned_out, 0);
    assert_eq!(snapshots[0].unignited, 16);
}

#[test]
fn test_finished_run_is_frozen() {
    let mut sim = full_grid_sim(5, 5);
    run_collected(&mut sim, 1000);
    assert!(!sim.running());

    let frozen = StatsCollector::new().collect(&sim);
    for _ in 0..10 {
        sim.step();
    }
    let after = StatsCollector::new().collect(&sim);
    assert_eq!(frozen, after);
    assert!(!sim.running());
}

#[test]
fn test_identical_seeds_produce_identical_runs() {
    let params = SimulationParameters::new(20, 20, 0.65, 0.3, 0.1, 99).unwrap();

    let mut a = ForestFire::new(params.clone()).unwrap();
    let mut b = ForestFire::new(params).unwrap();
    let log_a = run_collected(&mut a, 10_000);
    let log_b = run_collected(&mut b, 10_000);

    assert_eq!(log_a.snapshots(), log_b.snapshots());
}

#[test]
fn test_distinct_seeds_produce_distinct_layouts() {
    let a = ForestFire::new(SimulationParameters::new(20, 20, 0.65, 0.3, 0.1, 1).unwrap()).unwrap();
    let b = ForestFire::new(SimulationParameters::new(20, 20, 0.65, 0.3, 0.1, 2).unwrap()).unwrap();

    let cells_a: Vec<_> = a.cells().map(|(pos, cell)| (pos, *cell)).collect();
    let cells_b: Vec<_> = b.cells().map(|(pos, cell)| (pos, *cell)).collect();
    assert_ne!(cells_a, cells_b);
}
