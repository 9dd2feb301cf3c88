//! Gyroid isosurface by band filtering a cubic lattice.
//!
//! No surface extraction: a lattice point is emitted as-is when the implicit value
//! lands within [`BAND`] of the animated isolevel.

use super::quality::lattice_axis;
use super::{GenerationContext, VertexBuffer};

pub const GYROID_BASE: usize = 50;

/// Half-width of the accepted band around the isolevel.
pub const BAND: f32 = 0.05;

/// Lattice spans `[-HALF_EXTENT, HALF_EXTENT)` on every axis.
const HALF_EXTENT: f32 = 2.0;

#[inline]
pub fn gyroid_value(x: f32, y: f32, z: f32) -> f32 {
    x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
}

pub fn isolevel(time: f32) -> f32 {
    0.5 * (time * 0.6).sin()
}

pub fn gyroid(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = lattice_axis(GYROID_BASE, ctx.multiplier);
    let level = isolevel(t);
    let blue = 0.5 + 0.5 * t.sin();

    // The same n coordinates repeat on every axis, so the trig is tabulated once.
    let coords: Vec<f32> = (0..n)
        .map(|i| (i as f32 / n as f32 - 0.5) * 2.0 * HALF_EXTENT)
        .collect();
    let sines: Vec<f32> = coords.iter().map(|c| c.sin()).collect();
    let cosines: Vec<f32> = coords.iter().map(|c| c.cos()).collect();

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let value = sines[i] * cosines[j] + sines[j] * cosines[k] + sines[k] * cosines[i];
                let offset = value - level;
                if offset.abs() < BAND {
                    let c = (offset + BAND) / (2.0 * BAND);
                    out.push([coords[i], coords[j], coords[k]], [c, 1.0 - c, blue]);
                }
            }
        }
    }
}
