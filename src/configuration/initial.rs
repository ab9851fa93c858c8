//! Initial-condition sources.
//!
//! Two ways to populate the body store before a run: a comma-delimited
//! particles file (one header line, then one `mass,x,y,z,vx,vy,vz` row
//! per body), or a seeded uniform scatter across the universe volume.
//! Any defect in the data aborts the run before the first step, naming
//! the offending record.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScatterConfig;
use crate::error::ConfigError;
use crate::simulation::states::{Body, NVec3};

const FIELDS: [&str; 7] = ["mass", "x", "y", "z", "vx", "vy", "vz"];

/// Read bodies from a particles file on disk.
pub fn load_bodies(path: &Path, expected: usize) -> Result<Vec<Body>, ConfigError> {
    let file = File::open(path).map_err(|e| ConfigError::io(path, e))?;
    read_bodies(BufReader::new(file), expected)
}

/// Read bodies from any line source: one header line (ignored), then
/// exactly `expected` data rows. Blank lines are skipped; anything past
/// the seventh field of a row is ignored.
pub fn read_bodies<R: BufRead>(reader: R, expected: usize) -> Result<Vec<Body>, ConfigError> {
    let mut bodies: Vec<Body> = Vec::with_capacity(expected);
    let mut lines = reader.lines();

    // First line is a header naming the columns; its content is ignored
    match lines.next() {
        Some(Ok(_)) => {}
        Some(Err(e)) => {
            return Err(ConfigError::record(0, format!("unreadable header: {}", e)))
        }
        None => return Err(ConfigError::BodyCount { expected, found: 0 }),
    }

    for line in lines {
        let line = line
            .map_err(|e| ConfigError::record(bodies.len(), format!("unreadable line: {}", e)))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        bodies.push(parse_record(bodies.len(), trimmed)?);
    }

    if bodies.len() != expected {
        return Err(ConfigError::BodyCount {
            expected,
            found: bodies.len(),
        });
    }
    Ok(bodies)
}

fn parse_record(index: usize, line: &str) -> Result<Body, ConfigError> {
    let mut fields = [0.0f64; 7];
    let mut split = line.split(',');

    for (k, slot) in fields.iter_mut().enumerate() {
        let raw = match split.next() {
            Some(raw) => raw.trim(),
            None => {
                return Err(ConfigError::record(
                    index,
                    format!("expected 7 fields, found {}", k),
                ))
            }
        };
        let value: f64 = raw.parse().map_err(|_| {
            ConfigError::record(index, format!("field {} is not a number: {:?}", FIELDS[k], raw))
        })?;
        if !value.is_finite() {
            return Err(ConfigError::record(
                index,
                format!("field {} must be finite, got {}", FIELDS[k], value),
            ));
        }
        *slot = value;
    }

    let m = fields[0];
    if m <= 0.0 {
        return Err(ConfigError::record(
            index,
            format!("mass must be positive, got {}", m),
        ));
    }

    Ok(Body {
        m,
        x: NVec3::new(fields[1], fields[2], fields[3]),
        v: NVec3::new(fields[4], fields[5], fields[6]),
    })
}

/// Scatter `n` bodies of equal mass uniformly within `extent / 2` of the
/// origin on each axis, at rest. The seed makes the cloud reproducible.
pub fn scatter_bodies(cfg: &ScatterConfig, n: usize, extent: f64) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let half = extent / 2.0;

    (0..n)
        .map(|_| Body {
            m: cfg.mass,
            x: NVec3::new(
                rng.gen_range(-1.0..1.0) * half,
                rng.gen_range(-1.0..1.0) * half,
                rng.gen_range(-1.0..1.0) * half,
            ),
            v: NVec3::zeros(),
        })
        .collect()
}
