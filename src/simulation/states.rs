//! Core state types for the N-body simulation.
//!
//! `Body` holds one point mass and `System` is the mutable body store for
//! the current step plus the simulation clock `t` (days). Bodies are
//! identified by their index in `System::bodies`, fixed for the whole run.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg), strictly positive
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, index = body identity
    pub t: f64, // time (days)
}

impl System {
    /// System at `t = 0` over the given bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
