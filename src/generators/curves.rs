//! One-dimensional parametric curves, each drawn as a single line strip.

use std::f32::consts::{PI, TAU};

use super::quality::linear_count;
use super::{GenerationContext, VertexBuffer, MIN_DENOMINATOR};

pub const SPIRAL_POINTS: usize = 1000;
pub const LISSAJOUS_POINTS: usize = 2000;
pub const HELIX_POINTS: usize = 1500;
pub const HYPOTROCHOID_POINTS: usize = 2000;
pub const SUPERFORMULA_POINTS: usize = 1000;
pub const PHYLLOTAXIS_SEEDS: usize = 1000;

const GOLDEN_RATIO: f32 = 1.618_034;

/// Five turns of a spiral whose radius and height breathe with time.
pub fn parametric_spiral(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = linear_count(SPIRAL_POINTS, ctx.multiplier);

    for i in 0..n {
        let p = i as f32 / n as f32 * 10.0 * PI;
        let radius = 0.8 + 0.4 * (p * 0.1 + t).sin();

        out.push(
            [
                radius * (p + t).cos(),
                (p * 0.3 + t * 0.5).sin() * 0.5,
                radius * (p + t).sin(),
            ],
            [
                0.6 + 0.4 * (p * 0.2 + t).sin(),
                0.6 + 0.4 * (p * 0.15 + t * 1.5).cos(),
                0.6 + 0.4 * (p * 0.3 + t * 0.8).sin(),
            ],
        );
    }
}

/// 3:2:5 Lissajous figure with per-axis phase drift.
pub fn lissajous(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = linear_count(LISSAJOUS_POINTS, ctx.multiplier);
    let third = TAU / 3.0;

    for i in 0..n {
        let p = i as f32 / n as f32 * 4.0 * PI;

        out.push(
            [
                1.2 * (3.0 * p + t).sin(),
                (2.0 * p + t * 0.7).sin(),
                0.8 * (5.0 * p + t * 1.3).sin(),
            ],
            [
                0.7 + 0.3 * (p + t).sin(),
                0.7 + 0.3 * (p + t + third).sin(),
                0.7 + 0.3 * (p + t + 2.0 * third).sin(),
            ],
        );
    }
}

pub fn helix(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = linear_count(HELIX_POINTS, ctx.multiplier);
    let amplitude = 1.0 + 0.3 * (t * 2.0).sin();

    for i in 0..n {
        let fraction = i as f32 / n as f32;
        let p = fraction * 12.0 * PI;

        out.push(
            [
                amplitude * (p + t).cos(),
                (p / (6.0 * PI) - 1.0) * 1.5,
                amplitude * (p + t).sin(),
            ],
            [
                0.8 * fraction + 0.2,
                0.8 * (1.0 - fraction) + 0.2,
                0.7 + 0.3 * (t + p).sin(),
            ],
        );
    }
}

/// Hypotrochoid in the z = 0 plane with time-varying radii and pen offset.
pub fn hypotrochoid(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = linear_count(HYPOTROCHOID_POINTS, ctx.multiplier);
    let big_r = 1.0 + 0.3 * (t * 0.5).sin();
    let small_r = (0.3 + 0.1 * (t * 0.7).cos()).max(MIN_DENOMINATOR);
    let pen = 0.5 + 0.2 * (t * 1.3).sin();
    let diff = big_r - small_r;
    let ratio = diff / small_r;

    for i in 0..n {
        let theta = i as f32 / n as f32 * TAU;
        let hue = (theta + t).rem_euclid(TAU);

        out.push(
            [
                diff * theta.cos() + pen * (ratio * theta).cos(),
                diff * theta.sin() - pen * (ratio * theta).sin(),
                0.0,
            ],
            [
                0.5 + 0.5 * hue.sin(),
                0.5 + 0.5 * (hue + 2.0).sin(),
                0.5 + 0.5 * (hue + 4.0).sin(),
            ],
        );
    }
}

/// Gielis superformula with animated symmetry and exponents, `a = b = 1`.
pub fn superformula(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let n = linear_count(SUPERFORMULA_POINTS, ctx.multiplier);
    let m = 6.0 + 4.0 * (t * 0.4).sin();
    let n1 = 0.3 + 1.2 * (t * 0.6).sin().abs();
    let n2 = 1.0 + 2.0 * (t * 0.5).cos().abs();
    let n3 = 1.0 + 2.0 * (t * 0.8).sin().abs();

    for i in 0..n {
        let phi = i as f32 / n as f32 * TAU;
        let angle = m * phi / 4.0;
        let sum = angle.cos().abs().powf(n2) + angle.sin().abs().powf(n3);
        let r = sum.max(MIN_DENOMINATOR).powf(-1.0 / n1);

        out.push(
            [r * phi.cos(), r * phi.sin(), 0.0],
            [
                0.5 + 0.5 * r,
                0.3 + 0.7 * (1.0 - r),
                0.5 + 0.5 * (t + phi).sin(),
            ],
        );
    }
}

/// Vogel sunflower model; the divergence angle wobbles around the golden angle.
pub fn phyllotaxis(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let seeds = linear_count(PHYLLOTAXIS_SEEDS, ctx.multiplier);
    let divergence = (GOLDEN_RATIO + 0.1 * (t * 0.5).sin()) * PI;
    let blue = 0.5 + 0.5 * t.sin();

    for seed in 0..seeds {
        let theta = seed as f32 * divergence;
        let r = 0.02 * (seed as f32).sqrt();

        out.push(
            [r * theta.cos(), r * theta.sin(), 0.0],
            [
                0.5 + 0.5 * (theta + t).sin(),
                0.5 + 0.5 * (theta + t * 1.2).cos(),
                blue,
            ],
        );
    }
}
