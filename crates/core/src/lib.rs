//! Forest Fire Simulation Core Library
//!
//! A discrete forest fire model on a rectangular grid of tree cells. Each
//! occupied cell carries a combustion state and a soil condition; fire
//! spreads to unignited neighbors, humidity-saturated trees douse fire on
//! contact, and wind-stressed trees ignite once their soil acidifies.
//!
//! The engine applies a double-buffered synchronous step: all next states
//! are computed from the step-start snapshot and committed at once, so
//! propagation advances exactly one cell per step and runs are fully
//! reproducible from their seed. Per-step aggregate statistics and a
//! render projection are provided for external sinks; batch execution
//! lives in the `demo-headless` consumer.

pub mod cell;
pub mod grid;
pub mod init;
pub mod params;
pub mod render;
pub mod simulation;
pub mod stats;

// Re-export the public surface
pub use cell::{Cell, CombustionState, SoilState};
pub use grid::{GridPos, TreeGrid};
pub use params::{Adjacency, ConfigError, SimulationParameters};
pub use render::{render_cells, RenderCell};
pub use simulation::ForestFire;
pub use stats::{PersistenceError, StatsCollector, StepSnapshot};
