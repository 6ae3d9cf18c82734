//! Stochastic seeding of the initial grid from simulation parameters.
//!
//! Draw order is fixed and documented so a seed fully determines the
//! layout: positions are visited row-major, every position consumes one
//! occupancy draw, and an occupied non-edge position consumes a humidity
//! draw followed (only if humidity declined) by a wind draw. Humidity and
//! wind are deliberately independent draws; gating both outcomes on a
//! single shared value would silently disable wind whenever
//! `wind <= humidity`.

use rand::rngs::StdRng;
use rand::Rng;

use crate::cell::Cell;
use crate::grid::TreeGrid;
use crate::params::SimulationParameters;

/// Column whose occupied cells are set on fire to start the simulation.
pub const IGNITION_COLUMN: usize = 0;

/// Populate a fresh grid from validated parameters and a seeded source.
///
/// Seeding priority per occupied position, first match wins:
/// 1. ignition edge (column 0): burning on acidified soil;
/// 2. humidity draw: humidity-saturated, soil neutral;
/// 3. wind draw: wind-stressed, soil acidified so it ignites next step;
/// 4. default: unignited on neutral soil.
#[must_use]
pub fn populate(params: &SimulationParameters, rng: &mut StdRng) -> TreeGrid {
    let mut grid = TreeGrid::new(params.width, params.height, params.adjacency);

    for y in 0..params.height {
        for x in 0..params.width {
            if rng.random::<f64>() >= params.density {
                continue;
            }
            let cell = if x == IGNITION_COLUMN {
                Cell::ignited()
            } else if rng.random::<f64>() < params.humidity {
                Cell::soaked()
            } else if rng.random::<f64>() < params.wind {
                Cell::primed()
            } else {
                Cell::unignited()
            };
            grid.place(x, y, cell);
        }
    }

    grid
}
