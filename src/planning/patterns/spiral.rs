//! Inward rectangular spiral.

use crate::error::Result;

use super::{PatternStrategy, SweepBuilder, SweepContext};

/// Concentric rings shrinking by `step` on every side, ending at the centre.
///
/// Each ring emits its four corners counter-clockwise from (min.x, min.z)
/// followed by a connector one step up the left edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpiralSweep;

impl PatternStrategy for SpiralSweep {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn layout(&self, ctx: &SweepContext, out: &mut SweepBuilder) -> Result<()> {
        let step = ctx.step;
        let (mut x0, mut x1) = (ctx.partition.min.x, ctx.partition.max.x);
        let (mut z0, mut z1) = (ctx.partition.min.z, ctx.partition.max.z);

        while x1 - x0 > step && z1 - z0 > step {
            out.emit(x0, z0)?;
            out.emit(x1, z0)?;
            out.emit(x1, z1)?;
            out.emit(x0, z1)?;
            out.emit(x0, z0 + step)?;

            x0 += step;
            x1 -= step;
            z0 += step;
            z1 -= step;
        }

        if x1 - x0 > 0.0 && z1 - z0 > 0.0 {
            out.emit((x0 + x1) * 0.5, (z0 + z1) * 0.5)?;
        }

        Ok(())
    }
}
