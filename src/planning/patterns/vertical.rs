//! Lawnmower columns.

use crate::error::Result;

use super::{PatternStrategy, SweepBuilder, SweepContext};

/// Columns of constant x starting at the partition's min.x, alternating
/// direction along z.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalSweep;

impl PatternStrategy for VerticalSweep {
    fn name(&self) -> &'static str {
        "vertical"
    }

    fn layout(&self, ctx: &SweepContext, out: &mut SweepBuilder) -> Result<()> {
        let p = &ctx.partition;
        let (z0, z1) = cross_range(ctx);

        let mut forward = true;
        let mut i = 0u64;
        loop {
            let x = p.min.x + i as f32 * ctx.step;
            if x > p.max.x {
                break;
            }
            out.emit_line((x, z0), (x, z1), forward)?;
            forward = !forward;
            i += 1;
        }
        Ok(())
    }
}

/// Z extent of each column: the global range clipped to the partition.
///
/// For partitions split along X this is exactly the global z range.
fn cross_range(ctx: &SweepContext) -> (f32, f32) {
    (
        ctx.global.min.z.max(ctx.partition.min.z),
        ctx.global.max.z.min(ctx.partition.max.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds3, Point3};

    #[test]
    fn test_columns() {
        let global = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(40.0, 0.0, 20.0));
        let ctx = SweepContext {
            partition: global.with_x_range(20.0, 40.0),
            global,
            step: 10.0,
            add_edge_scans: false,
        };
        let mut out = SweepBuilder::with_limit(100);
        VerticalSweep.layout(&ctx, &mut out).unwrap();
        let pts = out.finish();

        assert_eq!(
            pts,
            vec![
                (20.0, 0.0),
                (20.0, 20.0),
                (30.0, 20.0),
                (30.0, 0.0),
                (40.0, 0.0),
                (40.0, 20.0),
            ]
        );
    }
}
