//! Force / potential contributors for the n-body engine
//!
//! Defines the [`Force`] trait, the [`ForceSet`] that sums contributions
//! from every registered term, and direct pairwise Newtonian gravity
//! with Plummer-style softening.

use crate::simulation::states::{NVec3, System};

/// Per-body accumulator for one force pass: the net force vector and the
/// potential-energy contributions assigned to this body. Valid only for
/// the step just computed; reset at the start of every pass.
#[derive(Debug, Clone, Copy)]
pub struct ForceAccum {
    pub force: NVec3, // net force (N)
    pub potential: f64, // accumulated potential energy (J)
}

impl ForceAccum {
    pub fn zero() -> Self {
        Self {
            force: NVec3::zeros(),
            potential: 0.0,
        }
    }
}

/// Collection of force terms (gravity today, drag etc. tomorrow)
/// Each term implements [`Force`] and their contributions are summed
/// into a single accumulator per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces and potentials at time `t` (days) for all
    /// bodies in `sys`
    /// - `out[i]` is zeroed, then every term adds its contribution
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [ForceAccum]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = ForceAccum::zero();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.accumulate(t, sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their force and potential contribution into
/// `out[i]` for each body. The pass is read-only over the system and
/// each `out[i]` belongs to exactly one body, so implementations may
/// partition the work by body or pair without sharing mutable state.
pub trait Force {
    fn accumulate(&self, t: f64, sys: &System, out: &mut [ForceAccum]);
}

/// Direct pairwise Newtonian gravity with softening (n^2/2 sum).
///
/// Forces go through the softened denominator `(r^2 + eps^2)^{3/2}` so
/// near-coincident bodies stay finite; exact coincidence gives a zero
/// force, not a fault. The pair potential `-G m_i m_j / r` is unsoftened
/// and is credited once per unordered pair, to the lower-index body, so
/// the sum over bodies is the unique-pair total. Coincident pairs are
/// skipped in the potential.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps: f64, // softening length (m)
}

impl Force for NewtonianGravity {
    fn accumulate(&self, _t: f64, sys: &System, out: &mut [ForceAccum]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        let eps2 = self.eps * self.eps;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from j to i; a negative coefficient below
                // turns it into an attraction.
                let d = xi - bj.x;

                // Squared separation |d|^2 (no softening yet)
                let r2 = d.dot(&d);

                // Softened squared distance: d2 = |d|^2 + eps^2
                let d2 = r2 + eps2;

                // 1 / |r_soft| and 1 / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // F_i = -G m_i m_j d / (r^2 + eps^2)^{3/2}, and the
                // mirrored force on j (Newton's third law, one
                // evaluation per pair)
                let coef = -self.g * mi * bj.m * inv_r3;
                out[i].force += coef * d;
                out[j].force -= coef * d;

                // Pair potential, counted once, into body i. Skipped at
                // exact coincidence; the softened force above already
                // keeps that case finite.
                if r2 > 0.0 {
                    out[i].potential -= self.g * mi * bj.m / r2.sqrt();
                }
            }
        }
    }
}
