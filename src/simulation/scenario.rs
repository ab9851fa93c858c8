//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by [`Engine`](crate::simulation::engine::Engine):
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, loaded from a particles
//!   file or scattered from a seed)
//! - active force set (`ForceSet` with Newtonian gravity registered)
//!
//! All validation happens here, before any stepping: a bad parameter or a
//! bad initial-conditions record aborts the run up front.

use std::path::Path;

use crate::configuration::config::{InitialConfig, ScenarioConfig};
use crate::configuration::initial;
use crate::error::ConfigError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// A fully-initialized simulation scenario, ready to hand to the engine.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    /// Build the runtime scenario. Relative particles-file paths are
    /// resolved against `base`, normally the scenario file's directory.
    pub fn build(cfg: ScenarioConfig, base: &Path) -> Result<Self, ConfigError> {
        validate(&cfg)?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            n: p_cfg.body_count,
            dt: p_cfg.dt,
            steps: p_cfg.step_count,
            g: p_cfg.gravitational_constant,
            eps: p_cfg.softening_length,
            stride: p_cfg.output_stride,
            size: p_cfg.universe_size,
            scale_factor: p_cfg.scale_factor,
        };

        // Bodies: from the configured initial-conditions source
        let bodies = match &cfg.initial {
            InitialConfig::File(path) => {
                let full = if path.is_absolute() {
                    path.clone()
                } else {
                    base.join(path)
                };
                initial::load_bodies(&full, parameters.n)?
            }
            InitialConfig::Scatter(scatter) => {
                initial::scatter_bodies(scatter, parameters.n, parameters.size)
            }
        };

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps: parameters.eps,
        });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

fn validate(cfg: &ScenarioConfig) -> Result<(), ConfigError> {
    let p = &cfg.parameters;
    if p.body_count == 0 {
        return Err(ConfigError::Parameter("body_count must be at least 1".into()));
    }
    if !(p.dt.is_finite() && p.dt > 0.0) {
        return Err(ConfigError::Parameter(format!(
            "dt must be a positive number of days, got {}",
            p.dt
        )));
    }
    if p.output_stride == 0 {
        return Err(ConfigError::Parameter(
            "output_stride must be at least 1".into(),
        ));
    }
    if !(p.gravitational_constant.is_finite() && p.gravitational_constant >= 0.0) {
        return Err(ConfigError::Parameter(format!(
            "gravitational_constant must be finite and non-negative, got {}",
            p.gravitational_constant
        )));
    }
    if !(p.softening_length.is_finite() && p.softening_length >= 0.0) {
        return Err(ConfigError::Parameter(format!(
            "softening_length must be finite and non-negative, got {}",
            p.softening_length
        )));
    }
    if !(p.universe_size.is_finite() && p.universe_size > 0.0) {
        return Err(ConfigError::Parameter(format!(
            "universe_size must be finite and positive, got {}",
            p.universe_size
        )));
    }
    // (1 + a) multiplies positions every step, so it must stay positive
    if !(p.scale_factor.is_finite() && p.scale_factor > -1.0) {
        return Err(ConfigError::Parameter(format!(
            "scale_factor must be finite and greater than -1, got {}",
            p.scale_factor
        )));
    }
    if let InitialConfig::Scatter(scatter) = &cfg.initial {
        if !(scatter.mass.is_finite() && scatter.mass > 0.0) {
            return Err(ConfigError::Parameter(format!(
                "scatter mass must be finite and positive, got {}",
                scatter.mass
            )));
        }
    }
    Ok(())
}
