//! Render-state export for external visualization front-ends.
//!
//! A pure read projection: per occupied cell, its coordinates and the two
//! color keys a canvas or chart needs. No behavior lives here and nothing
//! is mutated; front-ends consume this and the statistics log only.

use serde::Serialize;

use crate::cell::{CombustionState, SoilState};
use crate::simulation::ForestFire;

impl CombustionState {
    /// Canvas color key for this state.
    ///
    /// Unburned trees render green whether healthy, wind-stressed or
    /// humidity-saturated; only fire and ash are visually distinct.
    #[must_use]
    pub fn color_key(self) -> &'static str {
        match self {
            CombustionState::Unignited | CombustionState::PreIgnition | CombustionState::Inert => {
                "#00AA00"
            }
            CombustionState::Burning => "#880000",
            CombustionState::BurnedOut => "#000000",
        }
    }
}

impl SoilState {
    /// Canvas color key for this soil condition.
    #[must_use]
    pub fn color_key(self) -> &'static str {
        match self {
            SoilState::Neutral => "#964B00",
            SoilState::Acidified => "#FFFF00",
        }
    }
}

/// Drawable state of one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    pub x: usize,
    pub y: usize,
    /// Combustion-state color key
    pub color: &'static str,
    /// Soil-state color key
    pub soil_color: &'static str,
}

/// Project every occupied cell into its drawable state, row-major.
#[must_use]
pub fn render_cells(sim: &ForestFire) -> Vec<RenderCell> {
    sim.cells()
        .map(|((x, y), cell)| RenderCell {
            x,
            y,
            color: cell.combustion.color_key(),
            soil_color: cell.soil.color_key(),
        })
        .collect()
}
