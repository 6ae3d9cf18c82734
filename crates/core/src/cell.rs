use serde::{Deserialize, Serialize};

/// Fire-related status of a tree cell.
///
/// Replaces the ad hoc string conditions of earlier models with a closed,
/// exhaustively matched type. States move forward along
/// `Unignited -> PreIgnition -> Burning -> BurnedOut`, with one explicit
/// backward edge: a `Burning` cell touched by an `Inert` neighbor is
/// suppressed to `Inert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombustionState {
    /// Healthy tree, not yet touched by fire
    Unignited,
    /// Wind-stressed tree that ignites on its own once its soil is acidified
    PreIgnition,
    /// Actively on fire, spreading to unignited neighbors
    Burning,
    /// Consumed by fire (terminal)
    BurnedOut,
    /// Humidity-saturated tree that never burns and douses fire on contact
    Inert,
}

impl CombustionState {
    /// All states, in reporting order.
    pub const ALL: [CombustionState; 5] = [
        CombustionState::Unignited,
        CombustionState::PreIgnition,
        CombustionState::Burning,
        CombustionState::BurnedOut,
        CombustionState::Inert,
    ];

    /// Stable display name used in statistics records and exports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CombustionState::Unignited => "Unignited",
            CombustionState::PreIgnition => "PreIgnition",
            CombustionState::Burning => "Burning",
            CombustionState::BurnedOut => "BurnedOut",
            CombustionState::Inert => "Inert",
        }
    }

    #[must_use]
    pub fn is_burning(self) -> bool {
        self == CombustionState::Burning
    }
}

/// Soil condition gating delayed ignition.
///
/// Acidified soil is what lets a `PreIgnition` tree actually catch fire;
/// burning acidifies the cell's own soil, humidity suppression neutralizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilState {
    Neutral,
    Acidified,
}

impl SoilState {
    /// All states, in reporting order.
    pub const ALL: [SoilState; 2] = [SoilState::Neutral, SoilState::Acidified];

    /// Stable display name used in statistics records and exports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SoilState::Neutral => "Neutral",
            SoilState::Acidified => "Acidified",
        }
    }
}

/// A single tree cell. Position is implicit in the grid slot that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub combustion: CombustionState,
    pub soil: SoilState,
}

impl Cell {
    /// A healthy tree on neutral soil (the default seeding outcome).
    #[must_use]
    pub fn unignited() -> Self {
        Cell {
            combustion: CombustionState::Unignited,
            soil: SoilState::Neutral,
        }
    }

    /// A tree ignited at seeding time. Ignition acidifies the soil.
    #[must_use]
    pub fn ignited() -> Self {
        Cell {
            combustion: CombustionState::Burning,
            soil: SoilState::Acidified,
        }
    }

    /// A humidity-saturated tree. Never burns, soil stays neutral.
    #[must_use]
    pub fn soaked() -> Self {
        Cell {
            combustion: CombustionState::Inert,
            soil: SoilState::Neutral,
        }
    }

    /// A wind-stressed tree seeded on acidified soil, so it ignites on the
    /// first step.
    #[must_use]
    pub fn primed() -> Self {
        Cell {
            combustion: CombustionState::PreIgnition,
            soil: SoilState::Acidified,
        }
    }

    /// Compute this cell's state after one step, reading only the prior
    /// step's snapshot of itself and its neighborhood.
    ///
    /// Rule order matters and is fixed:
    /// 1. a burning tree next to an inert one is suppressed (becomes inert,
    ///    soil neutralized) instead of burning out;
    /// 2. a burning tree otherwise burns out and acidifies its soil;
    /// 3. a wind-stressed tree on acidified soil catches fire;
    /// 4. an unignited tree next to fire catches fire;
    /// 5. everything else is unchanged.
    ///
    /// Suppression never applies to a tree that has already burned out, and
    /// a wind-stressed tree on neutral soil waits indefinitely.
    #[must_use]
    pub fn next_state(self, any_burning_neighbor: bool, any_inert_neighbor: bool) -> Cell {
        match self.combustion {
            CombustionState::Burning if any_inert_neighbor => Cell {
                combustion: CombustionState::Inert,
                soil: SoilState::Neutral,
            },
            CombustionState::Burning => Cell {
                combustion: CombustionState::BurnedOut,
                soil: SoilState::Acidified,
            },
            CombustionState::PreIgnition if self.soil == SoilState::Acidified => Cell {
                combustion: CombustionState::Burning,
                soil: self.soil,
            },
            CombustionState::Unignited if any_burning_neighbor => Cell {
                combustion: CombustionState::Burning,
                soil: self.soil,
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burning_burns_out_and_acidifies() {
        let next = Cell::ignited().next_state(false, false);
        assert_eq!(next.combustion, CombustionState::BurnedOut);
        assert_eq!(next.soil, SoilState::Acidified);
    }

    #[test]
    fn test_burning_suppressed_by_inert_neighbor() {
        let next = Cell::ignited().next_state(false, true);
        assert_eq!(next.combustion, CombustionState::Inert);
        assert_eq!(next.soil, SoilState::Neutral);
    }

    #[test]
    fn test_suppression_wins_over_burnout() {
        // Both a burning and an inert neighbor: suppression is rule 1
        let next = Cell::ignited().next_state(true, true);
        assert_eq!(next.combustion, CombustionState::Inert);
    }

    #[test]
    fn test_unignited_catches_from_burning_neighbor() {
        let next = Cell::unignited().next_state(true, false);
        assert_eq!(next.combustion, CombustionState::Burning);
        // Soil only acidifies when the tree burns out, not at ignition
        assert_eq!(next.soil, SoilState::Neutral);
    }

    #[test]
    fn test_unignited_unaffected_by_inert_neighbor() {
        let next = Cell::unignited().next_state(false, true);
        assert_eq!(next, Cell::unignited());
    }

    #[test]
    fn test_primed_ignites_on_acid_soil() {
        let next = Cell::primed().next_state(false, false);
        assert_eq!(next.combustion, CombustionState::Burning);
        assert_eq!(next.soil, SoilState::Acidified);
    }

    #[test]
    fn test_pre_ignition_on_neutral_soil_waits() {
        let cell = Cell {
            combustion: CombustionState::PreIgnition,
            soil: SoilState::Neutral,
        };
        // Fire next door does not spread into a pre-ignition tree
        assert_eq!(cell.next_state(true, false), cell);
    }

    #[test]
    fn test_burned_out_is_terminal() {
        let cell = Cell {
            combustion: CombustionState::BurnedOut,
            soil: SoilState::Acidified,
        };
        assert_eq!(cell.next_state(true, true), cell);
    }

    #[test]
    fn test_inert_is_absorbing() {
        let cell = Cell::soaked();
        assert_eq!(cell.next_state(true, true), cell);
    }
}
