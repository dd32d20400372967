//! Lawnmower rows.
//!
//! ```text
//!  z
//!  ^   <-------------   row 2
//!  |   ------------->   row 1 (joined at the right end)
//!  |   <-------------
//!  |   ------------->   row 0 at global.min.z
//!  +-------------------> x
//! ```

use crate::error::Result;

use super::{PatternStrategy, SweepBuilder, SweepContext};
use crate::planning::generator::MIN_STEP;

/// Rows of constant z across the partition, alternating direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalSweep;

impl PatternStrategy for HorizontalSweep {
    fn name(&self) -> &'static str {
        "horizontal"
    }

    fn layout(&self, ctx: &SweepContext, out: &mut SweepBuilder) -> Result<()> {
        let p = &ctx.partition;
        let step = ctx.step;

        // Rows sit on the global grid so neighbouring partitions line up.
        // A row on a shared boundary belongs to the partition above it.
        let origin = ctx.global.min.z;
        let first = first_row_index(origin, p.min.z, step);
        let reaches_top = p.max.z >= ctx.global.max.z;
        let end = (!reaches_top).then(|| first_row_index(origin, p.max.z, step));

        if ctx.add_edge_scans {
            // Leading edge from the far corner down to the first row start
            out.emit(p.min.x, p.max.z)?;
        }

        let mut forward = true;
        let mut last_z = None;
        let mut i = first;
        loop {
            let z = origin + i as f32 * step;
            if z > p.max.z || end.is_some_and(|end| i >= end) {
                break;
            }
            out.emit_line((p.min.x, z), (p.max.x, z), forward)?;
            forward = !forward;
            last_z = Some(z);
            i += 1;
        }

        if ctx.add_edge_scans
            && reaches_top
            && let Some(z) = last_z
            && p.max.z - z > MIN_STEP
        {
            out.emit_line((p.min.x, p.max.z), (p.max.x, p.max.z), forward)?;
        }

        Ok(())
    }
}

/// Index of the first global row at or after `start`.
pub(super) fn first_row_index(origin: f32, start: f32, step: f32) -> u64 {
    if start <= origin {
        return 0;
    }
    // Small tolerance so a boundary that lands on a row keeps it
    ((start - origin) / step - 1e-4).ceil().max(0.0) as u64
}
