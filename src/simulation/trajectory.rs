//! Append-only trajectory log and its stride sampling
//!
//! One [`BodyRecord`] per (step, body), laid out step-major in a single
//! pre-sized vector, written once during the run and only read back
//! afterwards through [`TrajectoryLog::sample`].

use crate::error::ConfigError;
use crate::simulation::states::NVec3;

/// Diagnostics for one body at one step, immutable once appended.
/// Positions are comoving (expansion divided back out); with a zero
/// scale factor they are simply the updated positions.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub x: NVec3, // position (m)
    pub t: f64, // time (days), step * dt
    pub ek: f64, // kinetic energy (J), half-step estimate
    pub ep: f64, // potential energy (J), this body's accumulator share
}

/// Pre-sized record store indexed by (step, body).
///
/// Sized for `n * steps` records up front so a run can never fail an
/// allocation mid-flight; an infeasible size is a startup error instead.
#[derive(Debug)]
pub struct TrajectoryLog {
    n: usize, // bodies per step group
    steps: usize, // step capacity
    records: Vec<BodyRecord>,
}

impl TrajectoryLog {
    /// Allocate a log for `n` bodies over `steps` steps.
    pub fn new(n: usize, steps: usize) -> Result<Self, ConfigError> {
        let total = n
            .checked_mul(steps)
            .ok_or(ConfigError::TrajectoryCapacity { bodies: n, steps })?;
        let mut records = Vec::new();
        records
            .try_reserve_exact(total)
            .map_err(|_| ConfigError::TrajectoryCapacity { bodies: n, steps })?;
        Ok(Self { n, steps, records })
    }

    pub fn body_count(&self) -> usize {
        self.n
    }

    pub fn step_capacity(&self) -> usize {
        self.steps
    }

    /// Number of steps for which all `n` records have been appended.
    /// Sampling never reads past this, so a log cut short by early
    /// termination stays consistent.
    pub fn completed_steps(&self) -> usize {
        if self.n == 0 {
            0
        } else {
            self.records.len() / self.n
        }
    }

    /// Append the record for the next (step, body) slot, in step-major
    /// body-index order.
    pub fn push(&mut self, record: BodyRecord) {
        debug_assert!(self.records.len() < self.n * self.steps);
        self.records.push(record);
    }

    /// All `n` records for one committed step, in body-index order.
    pub fn step_records(&self, step: usize) -> &[BodyRecord] {
        let start = step * self.n;
        &self.records[start..start + self.n]
    }

    /// Lazy iterator over steps `0, stride, 2*stride, ..` up to the last
    /// committed step, each item carrying all records for that step.
    /// Restart by calling `sample` again.
    pub fn sample(&self, stride: usize) -> Sample<'_> {
        assert!(stride > 0, "sampling stride must be at least 1");
        Sample {
            log: self,
            stride,
            next: 0,
        }
    }
}

/// One sampled step group: the step index and all its body records.
#[derive(Debug, Clone, Copy)]
pub struct SampledStep<'a> {
    pub step: usize,
    pub records: &'a [BodyRecord],
}

/// Iterator returned by [`TrajectoryLog::sample`].
pub struct Sample<'a> {
    log: &'a TrajectoryLog,
    stride: usize,
    next: usize,
}

impl<'a> Iterator for Sample<'a> {
    type Item = SampledStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.log.completed_steps() {
            return None;
        }
        let step = self.next;
        self.next = step + self.stride;
        Some(SampledStep {
            step,
            records: self.log.step_records(step),
        })
    }
}
