//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`InitialConfig`]    – where the bodies come from (file or scatter)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario reading its bodies from a particles file:
//!
//! ```yaml
//! parameters:
//!   body_count: 2              # N, must match the particles file
//!   dt: 1.0                    # timestep in days
//!   step_count: 200000         # Ndt
//!   gravitational_constant: 6.67e-11
//!   softening_length: 1.0e10   # epsilon, metres
//!   output_stride: 2000        # sample every 2000th step
//!   universe_size: 1.0e13      # metres
//!   scale_factor: 0.0          # optional, 0 disables expansion
//!
//! initial:
//!   file: particles.txt        # mass,x,y,z,vx,vy,vz rows after a header
//! ```
//!
//! or a random cloud instead of a file:
//!
//! ```yaml
//! initial:
//!   scatter:
//!     mass: 2.0e27             # every body gets this mass, kg
//!     seed: 42                 # RNG seed, fixed for reproducible runs
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; range checks happen there, not during deserialization.

use std::path::PathBuf;

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub body_count: usize, // number of bodies N
    pub dt: f64, // time step size (days)
    pub step_count: usize, // number of time steps Ndt
    pub gravitational_constant: f64, // G (m^3 kg^-1 s^-2)
    pub softening_length: f64, // epsilon (m) - prevent singular forces at small separations
    pub output_stride: usize, // sampling stride for trajectory output
    pub universe_size: f64, // universe size (m), scatter extent + reporting
    #[serde(default)]
    pub scale_factor: f64, // expansion factor a per step; defaults to off
}

/// Where the initial body states come from.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub enum InitialConfig {
    /// Comma-delimited particles file: one header line, then exactly
    /// `body_count` rows of `mass,x,y,z,vx,vy,vz`.
    File(PathBuf),
    /// Uniform random cloud within `universe_size / 2` of the origin.
    Scatter(ScatterConfig),
}

/// Settings for the random scatter source.
#[derive(Deserialize, Debug, Clone)]
pub struct ScatterConfig {
    pub mass: f64, // mass assigned to every body (kg)
    pub seed: u64, // RNG seed, fixed so runs are reproducible
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub initial: InitialConfig, // initial-conditions source
}
