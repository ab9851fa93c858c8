//! High-level runtime engine: the fixed-size simulation loop
//!
//! Each step runs one force pass over the whole body set, stages a
//! leapfrog update per body from that shared snapshot, records one
//! diagnostic per body, then commits all staged states at once. The
//! commit-after-everyone order is what makes the update synchronous: no
//! body ever sees a neighbour's already-updated position within a step.

use log::{debug, info};

use crate::error::ConfigError;
use crate::simulation::forces::{ForceAccum, ForceSet};
use crate::simulation::integrator::{leapfrog_update, BodyUpdate};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;
use crate::simulation::trajectory::{BodyRecord, TrajectoryLog};

/// Run state: `Running` while steps remain, `Done` after the final commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Done,
}

/// Owns the system, the force set, and the trajectory log for one run.
pub struct Engine {
    parameters: Parameters,
    system: System,
    forces: ForceSet,
    accum: Vec<ForceAccum>, // per-body force/potential, rebuilt every step
    staged: Vec<BodyUpdate>, // per-body next state, committed per step
    log: TrajectoryLog,
    step: usize,
    state: EngineState,
}

impl Engine {
    /// Build an engine from a prepared scenario. The trajectory log is
    /// allocated here in full, so an infeasible `n * steps` fails now
    /// rather than mid-run.
    pub fn new(scenario: Scenario) -> Result<Self, ConfigError> {
        let Scenario {
            parameters,
            system,
            forces,
        } = scenario;

        let n = system.len();
        let log = TrajectoryLog::new(n, parameters.steps)?;
        let state = if parameters.steps == 0 {
            EngineState::Done
        } else {
            EngineState::Running
        };

        Ok(Self {
            accum: vec![ForceAccum::zero(); n],
            staged: Vec::with_capacity(n),
            parameters,
            system,
            forces,
            log,
            step: 0,
            state,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Steps committed so far.
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn trajectory(&self) -> &TrajectoryLog {
        &self.log
    }

    /// Consume the engine, keeping only the recorded trajectory.
    pub fn into_trajectory(self) -> TrajectoryLog {
        self.log
    }

    /// Advance the system by one step. A no-op once `Done`.
    pub fn step(&mut self) -> EngineState {
        if self.state == EngineState::Done {
            return self.state;
        }

        let p = &self.parameters;
        let t_days = self.step as f64 * p.dt;

        // Force pass: every pair, from the prior step's positions
        self.forces
            .accumulate_forces(t_days, &self.system, &mut self.accum);

        // Expansion factor for this step, and the cumulative comoving
        // divisor used for the recorded positions
        let expansion = 1.0 + p.scale_factor;
        let comoving = expansion.powi(self.step as i32 + 1);

        // Stage every body's update from the shared force snapshot and
        // record its diagnostics
        self.staged.clear();
        for (body, acc) in self.system.bodies.iter().zip(self.accum.iter()) {
            let update = leapfrog_update(body, &acc.force, p.dt, expansion);
            self.log.push(BodyRecord {
                x: update.x / comoving,
                t: t_days,
                ek: update.kinetic,
                ep: acc.potential,
            });
            self.staged.push(update);
        }

        // Commit: only now does the body store change
        for (body, update) in self.system.bodies.iter_mut().zip(self.staged.iter()) {
            body.x = update.x;
            body.v = update.v;
        }

        self.step += 1;
        self.system.t = self.step as f64 * p.dt;
        if self.step == p.steps {
            self.state = EngineState::Done;
            debug!("run complete at step {}", self.step);
        }
        self.state
    }

    /// Run to completion.
    pub fn run(&mut self) -> EngineState {
        info!(
            "integrating {} bodies for {} steps of {} days",
            self.parameters.n, self.parameters.steps, self.parameters.dt
        );
        while self.state == EngineState::Running {
            self.step();
        }
        self.state
    }

    /// Run until done or until `keep_going` returns false, checked once
    /// per step boundary. The log stays sample-safe up to the last
    /// committed step either way.
    pub fn run_while(&mut self, mut keep_going: impl FnMut(usize) -> bool) -> EngineState {
        while self.state == EngineState::Running && keep_going(self.step) {
            self.step();
        }
        self.state
    }
}
