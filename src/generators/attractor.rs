//! Lorenz attractor, re-integrated from the same seed on every call.
//!
//! The trajectory is never carried between frames: each call restarts at
//! [`INITIAL_STATE`], so the output for a given time is reproducible bit for bit.

use glam::Vec3;

use super::quality::linear_count;
use super::{GenerationContext, VertexBuffer};

pub const LORENZ_STEPS: usize = 5000;
pub const DT: f32 = 0.005;
pub const INITIAL_STATE: Vec3 = Vec3::new(0.1, 0.0, 0.0);

const BETA: f32 = 8.0 / 3.0;
const SCALE: f32 = 0.1;
const OFFSET: Vec3 = Vec3::new(0.0, -0.5, -0.5);

/// Lorenz parameters `(sigma, rho, beta)` at time `t`.
pub fn parameters(t: f32) -> (f32, f32, f32) {
    (10.0 + 5.0 * (t * 0.3).sin(), 28.0 + 10.0 * (t * 0.5).cos(), BETA)
}

#[inline]
fn derivative(p: Vec3, sigma: f32, rho: f32, beta: f32) -> Vec3 {
    Vec3::new(sigma * (p.y - p.x), p.x * (rho - p.z) - p.y, p.x * p.y - beta * p.z)
}

pub fn lorenz(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let steps = linear_count(LORENZ_STEPS, ctx.multiplier);
    let (sigma, rho, beta) = parameters(t);
    let mut state = INITIAL_STATE;
    let mut last_visible = INITIAL_STATE * SCALE + OFFSET;

    for _ in 0..steps {
        let d = derivative(state, sigma, rho, beta);
        let next = state + d * DT;
        let speed = d.length();

        // Euler at this step size is stable for the parameter ranges above; if it
        // ever diverges, the strip holds its last finite point.
        let position = if next.is_finite() && speed.is_finite() {
            state = next;
            last_visible = state * SCALE + OFFSET;
            last_visible
        } else {
            log::trace!("Lorenz integration left finite range at t={}", t);
            last_visible
        };

        let heat = if speed.is_finite() { (speed * 0.05).min(1.0) } else { 1.0 };
        let shimmer = if speed.is_finite() { (speed + t).sin().abs() } else { 0.0 };

        out.push(position.to_array(), [heat, 0.2 + 0.8 * shimmer, 1.0 - heat]);
    }
}
