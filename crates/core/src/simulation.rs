//! The step-driven fire propagation engine.
//!
//! Update model: double-buffered synchronous commit. Every scheduled cell's
//! next state is a pure function of an immutable snapshot of the grid at
//! step start; all writes land at once at step end. The fire front
//! therefore advances exactly one cell per step along an occupied path, and
//! iteration order is unobservable, so the schedule keeps a fixed row-major
//! order rather than reshuffling per step.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cell::{Cell, CombustionState, SoilState};
use crate::grid::{GridPos, TreeGrid};
use crate::init;
use crate::params::{ConfigError, SimulationParameters};

/// Main forest fire simulation
pub struct ForestFire {
    // Grid and the fixed activation schedule over its occupied positions
    grid: TreeGrid,
    schedule: Vec<GridPos>,

    // Configuration echo for consumers (sweep harness, exports)
    params: SimulationParameters,

    // Step bookkeeping
    running: bool,
    steps: u64,
}

impl ForestFire {
    /// Create a simulation seeded from `params`.
    ///
    /// Randomness is consumed only here, during initialization; stepping is
    /// fully deterministic afterwards.
    ///
    /// # Errors
    /// Returns `ConfigError` if the parameters are invalid. Nothing is
    /// built in that case.
    pub fn new(params: SimulationParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let grid = init::populate(&params, &mut rng);
        Self::with_grid(grid, params)
    }

    /// Create a simulation over an explicitly prepared grid.
    ///
    /// Used by scenario tests and any caller that seeds cells itself. The
    /// grid is taken as-is; `params` is validated and kept as the
    /// configuration echo.
    ///
    /// # Errors
    /// Returns `ConfigError` if the parameters are invalid.
    pub fn with_grid(grid: TreeGrid, params: SimulationParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        let schedule: Vec<GridPos> = grid.occupied().map(|(pos, _)| pos).collect();
        let mut sim = ForestFire {
            grid,
            schedule,
            params,
            running: false,
            steps: 0,
        };
        // Wind-stressed cells on acidified soil ignite on their own during
        // step 1, so they keep a fireless grid running at start. They can
        // only exist before the first step; afterwards `running` tracks the
        // burning count alone.
        sim.running = sim.burning_count() > 0 || sim.pending_ignition_count() > 0;
        tracing::debug!(
            trees = sim.schedule.len(),
            burning = sim.burning_count(),
            "simulation initialized"
        );
        Ok(sim)
    }

    /// Advance the simulation by one step.
    ///
    /// Applies the cell transition rule to every scheduled cell exactly
    /// once, reading the step-start snapshot, then commits all next states
    /// and recomputes `running`. Once `running` is false this is a no-op.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        // Read phase: every next state comes from the same snapshot
        let mut next: Vec<(GridPos, Cell)> = Vec::with_capacity(self.schedule.len());
        for &(x, y) in &self.schedule {
            let Some(cell) = self.grid.get(x, y) else {
                continue;
            };
            let mut any_burning = false;
            let mut any_inert = false;
            for (nx, ny) in self.grid.neighbors(x, y) {
                if let Some(neighbor) = self.grid.get(nx, ny) {
                    match neighbor.combustion {
                        CombustionState::Burning => any_burning = true,
                        CombustionState::Inert => any_inert = true,
                        _ => {}
                    }
                }
            }
            next.push(((x, y), cell.next_state(any_burning, any_inert)));
        }

        // Commit phase
        for ((x, y), cell) in next {
            if let Some(slot) = self.grid.get_mut(x, y) {
                *slot = cell;
            }
        }

        self.steps += 1;
        let burning = self.burning_count();
        self.running = burning > 0;
        tracing::debug!(step = self.steps, burning, "step committed");
        if !self.running {
            tracing::info!(steps = self.steps, "no fire remaining, halting");
        }
    }

    /// Whether any cell is still burning. Recomputed after each step.
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Number of completed steps.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The configuration this simulation was built from.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &TreeGrid {
        &self.grid
    }

    /// Enumerate all occupied cells with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, &Cell)> {
        self.grid.occupied()
    }

    /// Number of trees placed at initialization.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.schedule.len()
    }

    /// Number of cells currently burning.
    #[must_use]
    pub fn burning_count(&self) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.combustion.is_burning())
            .count()
    }

    /// Cells that will ignite by themselves on the next step.
    fn pending_ignition_count(&self) -> usize {
        self.cells()
            .filter(|(_, cell)| {
                cell.combustion == CombustionState::PreIgnition && cell.soil == SoilState::Acidified
            })
            .count()
    }
}
