use serde::{Deserialize, Serialize};

/// Which positions count as adjacent for fire spread and suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Adjacency {
    /// The four orthogonal neighbors (default)
    #[default]
    Orthogonal,
    /// The eight surrounding positions, diagonals included
    Moore,
}

impl Adjacency {
    /// Offsets scanned by neighbor lookups, in a fixed order.
    #[must_use]
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::Orthogonal => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            Adjacency::Moore => &[
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
        }
    }
}

/// Construction parameters for a simulation run.
///
/// All probabilities are in `[0, 1]`. The grid never wraps and never
/// resizes, so width and height must be positive. The seed fully determines
/// the initial layout; two runs with identical parameters are identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that a position holds a tree
    pub density: f64,
    /// Probability that an occupied non-edge cell starts humidity-saturated
    pub humidity: f64,
    /// Probability that an occupied non-edge cell starts wind-stressed
    pub wind: f64,
    /// Seed for the injected random source
    pub seed: u64,
    /// Neighborhood shape used for spread and suppression
    pub adjacency: Adjacency,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            width: 100,
            height: 100,
            density: 0.65,
            humidity: 0.5,
            wind: 0.1,
            seed: 0,
            adjacency: Adjacency::default(),
        }
    }
}

impl SimulationParameters {
    /// Create a validated parameter set with the default adjacency.
    ///
    /// # Errors
    /// Returns `ConfigError` if a dimension is zero or a probability falls
    /// outside `[0, 1]`.
    pub fn new(
        width: usize,
        height: usize,
        density: f64,
        humidity: f64,
        wind: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let params = SimulationParameters {
            width,
            height,
            density,
            humidity,
            wind,
            seed,
            adjacency: Adjacency::default(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every construction constraint, before any state is built.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        for (name, value) in [
            ("density", self.density),
            ("humidity", self.humidity),
            ("wind", self.wind),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Errors rejecting an invalid configuration at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A grid dimension was zero
    ZeroDimension(&'static str),
    /// A probability parameter fell outside `[0, 1]`
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDimension(axis) => {
                write!(f, "grid {axis} must be positive")
            }
            ConfigError::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_validate() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = SimulationParameters::new(0, 10, 0.5, 0.0, 0.0, 1).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension("width"));

        let err = SimulationParameters::new(10, 0, 0.5, 0.0, 0.0, 1).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension("height"));
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let err = SimulationParameters::new(10, 10, 1.5, 0.0, 0.0, 1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ProbabilityOutOfRange { name: "density", .. }
        ));

        let err = SimulationParameters::new(10, 10, 0.5, -0.1, 0.0, 1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ProbabilityOutOfRange { name: "humidity", .. }
        ));
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = SimulationParameters::new(10, 10, 0.5, 0.0, 2.0, 1).unwrap_err();
        assert!(err.to_string().contains("wind"));
    }

    #[test]
    fn test_neighbor_offset_counts() {
        assert_eq!(Adjacency::Orthogonal.offsets().len(), 4);
        assert_eq!(Adjacency::Moore.offsets().len(), 8);
    }
}
