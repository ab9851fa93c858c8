//! Comma-delimited trajectory output.
//!
//! Three header lines (parameter names, parameter values, data columns),
//! then one `x,y,z,t,Ek,Ep` row per body for every sampled step, bodies
//! in index order, values in scientific notation. Everything is read
//! through [`TrajectoryLog::sample`]; nothing here touches live state.

use std::io::{self, Write};

use crate::simulation::params::Parameters;
use crate::simulation::trajectory::TrajectoryLog;

/// Write the sampled trajectory of a finished (or cleanly stopped) run.
pub fn write_trajectory<W: Write>(
    out: &mut W,
    params: &Parameters,
    log: &TrajectoryLog,
) -> io::Result<()> {
    writeln!(out, "N,dt,Ndt,stride,size,epsilon")?;
    writeln!(
        out,
        "{},{},{},{},{:e},{:e}",
        params.n, params.dt, params.steps, params.stride, params.size, params.eps
    )?;
    writeln!(out, "x,y,z,t,Ek,Ep")?;

    for group in log.sample(params.stride) {
        for r in group.records {
            writeln!(
                out,
                "{:.6e},{:.6e},{:.6e},{:.6e},{:.6e},{:.6e}",
                r.x.x, r.x.y, r.x.z, r.t, r.ek, r.ep
            )?;
        }
    }
    Ok(())
}
