//! Two-dimensional parametric surfaces and height fields.
//!
//! Grids here scale by `sqrt(multiplier)` per axis so the total sample count grows
//! linearly with quality, like the 1-D curves.

use std::f32::consts::{PI, TAU};

use super::quality::grid_axis;
use super::{GenerationContext, VertexBuffer};

pub const SINE_GRID: usize = 80;
pub const TORUS_MAJOR: usize = 60;
pub const TORUS_MINOR: usize = 40;
pub const KLEIN_U: usize = 100;
pub const KLEIN_V: usize = 50;
pub const HARMONIC_LAT: usize = 40;
pub const HARMONIC_LON: usize = 80;
pub const INTERFERENCE_GRID: usize = 100;

/// Radially damped ripple over a 3×3 square, drawn as points.
pub fn sine_surface(ctx: &GenerationContext, out: &mut VertexBuffer) {
    const SCALE: f32 = 3.0;

    let t = ctx.time;
    let grid = grid_axis(SINE_GRID, ctx.multiplier);

    for i in 0..grid {
        let x = i as f32 / grid as f32 * SCALE - SCALE / 2.0;
        for j in 0..grid {
            let z = j as f32 / grid as f32 * SCALE - SCALE / 2.0;
            let distance = (x * x + z * z).sqrt();
            let y = 0.6 * (distance * 2.5 - t * 3.0).sin() * (-distance * 0.4).exp();
            let intensity = (y + 0.6) * 0.8 + 0.2;

            out.push(
                [x, y, z],
                [
                    0.3 + 0.7 * intensity,
                    0.2 + 0.6 * (distance * 0.5 + t).sin(),
                    0.8 + 0.2 * (distance * 0.3 + t * 1.2).cos(),
                ],
            );
        }
    }
}

/// Torus spinning about its axis with a pulsing tube radius.
pub fn torus(ctx: &GenerationContext, out: &mut VertexBuffer) {
    const MAJOR_RADIUS: f32 = 1.2;

    let t = ctx.time;
    let major = grid_axis(TORUS_MAJOR, ctx.multiplier);
    let minor = grid_axis(TORUS_MINOR, ctx.multiplier);
    let tube = 0.4 + 0.2 * (t * 2.0).sin();

    for i in 0..major {
        let u = TAU * i as f32 / major as f32 + t;
        for j in 0..minor {
            let v = TAU * j as f32 / minor as f32;
            let ring = MAJOR_RADIUS + tube * v.cos();

            out.push(
                [ring * u.cos(), tube * v.sin(), ring * u.sin()],
                [
                    0.6 + 0.4 * (u + t).cos(),
                    0.6 + 0.4 * (v + t * 1.3).sin(),
                    0.6 + 0.4 * (u + v + t * 0.7).sin(),
                ],
            );
        }
    }
}

/// Figure-8 immersion of the Klein bottle, scaled by 0.3.
pub fn klein_bottle(ctx: &GenerationContext, out: &mut VertexBuffer) {
    const SCALE: f32 = 0.3;

    let t = ctx.time;
    let u_steps = grid_axis(KLEIN_U, ctx.multiplier);
    let v_steps = grid_axis(KLEIN_V, ctx.multiplier);
    let radius = 1.5 + 0.3 * t.sin();

    for iu in 0..u_steps {
        let u = iu as f32 / u_steps as f32 * TAU;
        let (half_sin, half_cos) = (u / 2.0).sin_cos();
        for iv in 0..v_steps {
            let v = iv as f32 / v_steps as f32 * TAU;
            let w = radius + half_cos * v.sin() - half_sin * (2.0 * v).sin();

            out.push(
                [
                    w * u.cos() * SCALE,
                    w * u.sin() * SCALE,
                    (half_sin * v.sin() + half_cos * (2.0 * v).sin()) * SCALE,
                ],
                [
                    0.5 + 0.5 * (u + t).sin(),
                    0.5 + 0.5 * (v + t * 1.2).cos(),
                    0.5 + 0.5 * (u + v + t * 0.7).sin(),
                ],
            );
        }
    }
}

/// Cheap stand-in for an associated Legendre term; stays in `[-1, 1]`.
pub fn legendre_approx(l: u32, m: u32, x: f32) -> f32 {
    (l as f32 * x.clamp(-1.0, 1.0).acos() + m as f32 * 0.5).sin()
}

/// Unit sphere with its radius modulated by a low-order harmonic.
///
/// Degree `l` steps between 2 and 4 with time and `m = l / 2`. Both angle ranges
/// are sampled inclusively so the seams close.
pub fn spherical_harmonic(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let lat = grid_axis(HARMONIC_LAT, ctx.multiplier);
    let lon = grid_axis(HARMONIC_LON, ctx.multiplier);
    let l = 2 + (2.0 * (t * 0.3).sin().abs()) as u32;
    let m = l / 2;
    let eps = 0.2 + 0.3 * (t * 0.4).cos().abs();

    for i in 0..=lat {
        let theta = PI * i as f32 / lat.max(1) as f32;
        let legendre = legendre_approx(l, m, theta.cos());
        for j in 0..=lon {
            let phi = TAU * j as f32 / lon.max(1) as f32;
            let y = legendre * (m as f32 * phi).cos();
            let radius = 1.0 + eps * y;

            out.push(
                [
                    radius * theta.sin() * phi.cos(),
                    radius * theta.sin() * phi.sin(),
                    radius * theta.cos(),
                ],
                [0.5 + 0.5 * y, 0.5 - 0.5 * y, 0.3 + 0.7 * (t + phi).sin().abs()],
            );
        }
    }
}

/// Two travelling plane waves along x and z summed into one height field.
pub fn wave_interference(ctx: &GenerationContext, out: &mut VertexBuffer) {
    const SIZE: f32 = 4.0;

    let t = ctx.time;
    let grid = grid_axis(INTERFERENCE_GRID, ctx.multiplier);
    let k1 = 2.0 + (t * 0.3).sin();
    let k2 = 3.0 + (t * 0.4).cos();
    let w1 = 1.5 + (t * 0.5).cos();
    let w2 = 1.0 + (t * 0.6).sin();
    let blue = 0.5 + 0.5 * t.sin();

    for i in 0..grid {
        let x = (i as f32 / grid as f32 - 0.5) * SIZE;
        for j in 0..grid {
            let z = (j as f32 / grid as f32 - 0.5) * SIZE;
            let y = 0.5 * ((k1 * x - w1 * t).sin() + (k2 * z - w2 * t).sin());
            let h = (y + 1.0) * 0.5;

            out.push([x, y, z], [h, 1.0 - h, blue]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::WellParams;
    use proptest::prelude::*;

    fn ctx(time: f32, multiplier: i64) -> GenerationContext {
        GenerationContext::new(time, multiplier, WellParams::default())
    }

    #[test]
    fn test_sine_surface_grid_scales_with_sqrt() {
        let mut out = VertexBuffer::new();
        sine_surface(&ctx(0.0, 1), &mut out);
        assert_eq!(out.len(), 80 * 80);

        sine_surface(&ctx(0.0, 4), &mut out);
        assert_eq!(out.len(), 80 * 80 + 160 * 160, "caller is expected to clear");
    }

    #[test]
    fn test_harmonic_samples_poles_inclusively() {
        let mut out = VertexBuffer::new();
        spherical_harmonic(&ctx(0.0, 1), &mut out);
        assert_eq!(out.len(), 41 * 81);

        // First ring is the north pole: x = y = 0.
        let first = out.vertices()[0].position;
        assert!(first[0].abs() < 1e-6 && first[1].abs() < 1e-6);
    }

    #[test]
    fn test_wave_interference_height_bounded() {
        let mut out = VertexBuffer::new();
        wave_interference(&ctx(12.0, 1), &mut out);
        assert!(out.vertices().iter().all(|v| v.position[1].abs() <= 1.0 + 1e-5));
    }

    #[test]
    fn test_torus_points_lie_near_ring() {
        let mut out = VertexBuffer::new();
        torus(&ctx(0.0, 1), &mut out);
        for v in out.vertices() {
            let [x, _, z] = v.position;
            let ring_distance = (x * x + z * z).sqrt();
            assert!((0.6..=1.8 + 1e-4).contains(&ring_distance));
        }
    }

    proptest! {
        #[test]
        fn prop_legendre_approx_bounded(l in 0u32..8, m in 0u32..4, x in -2.0f32..2.0) {
            let value = legendre_approx(l, m, x);
            prop_assert!(value.is_finite());
            prop_assert!(value.abs() <= 1.0);
        }
    }
}
