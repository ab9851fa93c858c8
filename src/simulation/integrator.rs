//! Fixed-step leapfrog-style update for a single body
//!
//! Given the net force from this step's force pass and the body's prior
//! state, produces the staged next state plus the half-step kinetic
//! energy diagnostic. The engine commits staged updates for all bodies
//! at once, so no body's update observes another body's new position
//! within the same step.

use crate::simulation::states::{Body, NVec3};

/// Timesteps are configured in days; the state advances in SI seconds.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Staged next state for one body, not yet committed to the system.
#[derive(Debug, Clone)]
pub struct BodyUpdate {
    pub x: NVec3, // new position (m), expansion applied
    pub v: NVec3, // new velocity (m/s)
    pub kinetic: f64, // half-step kinetic energy (J)
}

/// Advance one body by one step of `dt` days under `force`.
///
/// - kick: `v' = v + (F/m) dt`
/// - drift: `x' = expansion * (x + v' dt)`, with `expansion = 1 + a`;
///   `a = 0` reduces exactly to plain `x + v' dt`
/// - kinetic energy is evaluated at the half-step,
///   `Ek = m/2 |v + (F/m) dt/2|^2`, not from `v'` - that offset is what
///   keeps the energy diagnostic leapfrog-grade rather than plain Euler
pub fn leapfrog_update(body: &Body, force: &NVec3, dt_days: f64, expansion: f64) -> BodyUpdate {
    let dt = dt_days * SECONDS_PER_DAY;
    let accel = force / body.m;

    // Full kick, then drift with the updated velocity
    let v_new = body.v + dt * accel;
    let x_new = expansion * (body.x + dt * v_new);

    // Half-step velocity for the energy estimate
    let v_half = body.v + 0.5 * dt * accel;
    let kinetic = 0.5 * body.m * v_half.dot(&v_half);

    BodyUpdate {
        x: x_new,
        v: v_new,
        kinetic,
    }
}
