//! 45 degree sweep lines.
//!
//! Line k satisfies `x + z = min.x + min.z + k * step`. Each endpoint is
//! clipped to the partition independently: the start walks up the left edge
//! then along the top edge, the end walks along the bottom edge then up the
//! right edge.
//!
//! ```text
//!   max.z +--s----s----+
//!         s    \    \  e
//!         |  \    \    e
//!         s    \    \  |
//!   min.z +--e----e----+
//!       min.x        max.x
//! ```

use crate::error::Result;

use super::{PatternStrategy, SweepBuilder, SweepContext};

/// Parallel diagonal lines, alternating direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiagonalSweep;

impl PatternStrategy for DiagonalSweep {
    fn name(&self) -> &'static str {
        "diagonal"
    }

    fn layout(&self, ctx: &SweepContext, out: &mut SweepBuilder) -> Result<()> {
        let p = &ctx.partition;
        let width = p.width();
        let depth = p.depth();
        let span = width + depth;

        let line = |offset: f32| {
            let start = if offset <= depth {
                (p.min.x, p.min.z + offset)
            } else {
                (p.min.x + (offset - depth), p.max.z)
            };
            let end = if offset <= width {
                (p.min.x + offset, p.min.z)
            } else {
                (p.max.x, p.min.z + (offset - width))
            };
            (start, end)
        };

        let mut forward = true;
        let mut k = 1u64;
        loop {
            let offset = k as f32 * ctx.step;
            if offset >= span {
                break;
            }
            let (start, end) = line(offset);
            out.emit_line(start, end, forward)?;
            forward = !forward;
            k += 1;
        }

        if out.is_empty() {
            // Too small for a single line at this spacing: sweep the middle
            let (start, end) = line(span * 0.5);
            out.emit_line(start, end, true)?;
        }

        Ok(())
    }
}
