//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings fixed for a whole run:
//! - body count and the fixed step count/size,
//! - softening length and gravitational constant (`eps`, `g`),
//! - output stride, universe size, and the optional expansion factor.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub n: usize, // number of bodies
    pub dt: f64, // time step (days)
    pub steps: usize, // number of time steps
    pub g: f64, // gravitational constant (m^3 kg^-1 s^-2)
    pub eps: f64, // softening length (m) - bounds forces at small separations
    pub stride: usize, // output sampling stride (steps), >= 1
    pub size: f64, // universe size (m), scatter extent and reporting only
    pub scale_factor: f64, // comoving expansion factor a; 0 disables expansion
}
