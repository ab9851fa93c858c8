//! Error types for nbsim.
//!
//! Everything that can go wrong does so before the first step: scenario
//! parsing, initial-condition loading, parameter validation, and the
//! up-front trajectory allocation. The integration itself is infallible.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal configuration errors, surfaced before the simulation loop starts.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read a scenario or particles file.
    Io { path: PathBuf, source: io::Error },
    /// Failed to parse the scenario YAML.
    Yaml(serde_yaml::Error),
    /// A malformed initial-condition record. `index` is the zero-based
    /// body index (the header line is not counted).
    Record { index: usize, detail: String },
    /// The initial-condition source supplied the wrong number of bodies.
    BodyCount { expected: usize, found: usize },
    /// A run parameter outside its valid range.
    Parameter(String),
    /// The pre-sized trajectory log (`bodies * steps` records) cannot be
    /// allocated on this host.
    TrajectoryCapacity { bodies: usize, steps: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::Yaml(e) => write!(f, "failed to parse scenario: {}", e),
            ConfigError::Record { index, detail } => {
                write!(f, "initial conditions record {}: {}", index, detail)
            }
            ConfigError::BodyCount { expected, found } => write!(
                f,
                "initial conditions supplied {} bodies, expected {}",
                found, expected
            ),
            ConfigError::Parameter(msg) => write!(f, "invalid parameter: {}", msg),
            ConfigError::TrajectoryCapacity { bodies, steps } => write!(
                f,
                "trajectory log of {} bodies x {} steps does not fit in memory",
                bodies, steps
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn record(index: usize, detail: impl Into<String>) -> Self {
        ConfigError::Record {
            index,
            detail: detail.into(),
        }
    }
}
