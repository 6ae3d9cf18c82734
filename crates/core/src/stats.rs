//! Per-step aggregate statistics over the simulation's cells.
//!
//! The collector holds a growing, restartable log of snapshots: one record
//! per step, starting with the step-0 baseline taken before any step runs.
//! It reads the engine's cell enumeration and never mutates simulation
//! state; there is no process-wide aggregator, each simulation gets its own
//! collector instance.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::cell::{CombustionState, SoilState};
use crate::simulation::ForestFire;

/// Aggregate counts for one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Step the counts were taken after (0 = initial state)
    pub step: u64,
    pub unignited: usize,
    pub pre_ignition: usize,
    pub burning: usize,
    pub burned_out: usize,
    pub inert: usize,
    pub neutral_soil: usize,
    pub acidified_soil: usize,
}

impl StepSnapshot {
    /// Column names matching `csv_row`, for tabular sinks.
    pub const CSV_HEADER: &'static str =
        "step,unignited,pre_ignition,burning,burned_out,inert,neutral_soil,acidified_soil";

    /// Count every occupied cell of a simulation by state.
    #[must_use]
    pub fn sample(sim: &ForestFire) -> Self {
        let mut snapshot = StepSnapshot {
            step: sim.steps(),
            ..StepSnapshot::default()
        };
        for (_, cell) in sim.cells() {
            match cell.combustion {
                CombustionState::Unignited => snapshot.unignited += 1,
                CombustionState::PreIgnition => snapshot.pre_ignition += 1,
                CombustionState::Burning => snapshot.burning += 1,
                CombustionState::BurnedOut => snapshot.burned_out += 1,
                CombustionState::Inert => snapshot.inert += 1,
            }
            match cell.soil {
                SoilState::Neutral => snapshot.neutral_soil += 1,
                SoilState::Acidified => snapshot.acidified_soil += 1,
            }
        }
        snapshot
    }

    /// Total trees counted, equal across every snapshot of one run.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.unignited + self.pre_ignition + self.burning + self.burned_out + self.inert
    }

    /// Count for a single combustion state.
    #[must_use]
    pub fn combustion_count(&self, state: CombustionState) -> usize {
        match state {
            CombustionState::Unignited => self.unignited,
            CombustionState::PreIgnition => self.pre_ignition,
            CombustionState::Burning => self.burning,
            CombustionState::BurnedOut => self.burned_out,
            CombustionState::Inert => self.inert,
        }
    }

    /// Count for a single soil state.
    #[must_use]
    pub fn soil_count(&self, state: SoilState) -> usize {
        match state {
            SoilState::Neutral => self.neutral_soil,
            SoilState::Acidified => self.acidified_soil,
        }
    }

    /// Combustion counts as a name-to-count mapping for external sinks.
    #[must_use]
    pub fn state_counts(&self) -> FxHashMap<&'static str, usize> {
        CombustionState::ALL
            .iter()
            .map(|&state| (state.name(), self.combustion_count(state)))
            .collect()
    }

    /// Soil counts as a name-to-count mapping for external sinks.
    #[must_use]
    pub fn soil_counts(&self) -> FxHashMap<&'static str, usize> {
        SoilState::ALL
            .iter()
            .map(|&state| (state.name(), self.soil_count(state)))
            .collect()
    }

    /// One CSV row matching `CSV_HEADER`.
    #[must_use]
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.step,
            self.unignited,
            self.pre_ignition,
            self.burning,
            self.burned_out,
            self.inert,
            self.neutral_soil,
            self.acidified_soil,
        )
    }
}

/// Ordered, growing log of per-step snapshots for one simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsCollector {
    snapshots: Vec<StepSnapshot>,
}

impl StatsCollector {
    #[must_use]
    pub fn new() -> Self {
        StatsCollector::default()
    }

    /// Sample the simulation and append the record.
    ///
    /// Call once for the initial state and once after each `step()`. Reads
    /// only; simulation state is untouched.
    pub fn collect(&mut self, sim: &ForestFire) -> StepSnapshot {
        let snapshot = StepSnapshot::sample(sim);
        self.snapshots.push(snapshot);
        snapshot
    }

    /// All records collected so far, in step order.
    #[must_use]
    pub fn snapshots(&self) -> &[StepSnapshot] {
        &self.snapshots
    }

    /// Most recent record, if any step has been sampled.
    #[must_use]
    pub fn last(&self) -> Option<&StepSnapshot> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Restart the log, e.g. before reusing the collector for another run.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Save the log as JSON.
    ///
    /// # Errors
    /// Returns error if the log cannot be serialized or written.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PersistenceError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| PersistenceError::SaveFailed(e.to_string()))?;

        Ok(())
    }

    /// Load a previously saved log from JSON.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let contents =
            fs::read_to_string(path).map_err(|e| PersistenceError::LoadFailed(e.to_string()))?;

        let log: Self = serde_json::from_str(&contents)
            .map_err(|e| PersistenceError::ParseFailed(e.to_string()))?;

        Ok(log)
    }
}

/// Errors that can occur when saving or loading a statistics log.
#[derive(Debug)]
pub enum PersistenceError {
    /// Failed to load file
    LoadFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
    /// Failed to serialize the log
    SerializeFailed(String),
    /// Failed to save file
    SaveFailed(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            PersistenceError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            PersistenceError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            PersistenceError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
