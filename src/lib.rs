pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{Force, ForceAccum, ForceSet, NewtonianGravity};
pub use simulation::integrator::{leapfrog_update, BodyUpdate, SECONDS_PER_DAY};
pub use simulation::trajectory::{BodyRecord, SampledStep, TrajectoryLog};
pub use simulation::engine::{Engine, EngineState};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;

pub use configuration::config::{InitialConfig, ParametersConfig, ScatterConfig, ScenarioConfig};
pub use configuration::initial::{load_bodies, read_bodies, scatter_bodies};

pub use output::csv::write_trajectory;

pub use benchmark::benchmark::{bench_forces, bench_step_curve};

pub use error::ConfigError;
