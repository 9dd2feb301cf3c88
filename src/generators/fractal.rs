//! Mandelbrot height field over a slowly panning, zooming window.

use super::quality::grid_axis;
use super::{GenerationContext, VertexBuffer};

pub const FRACTAL_RESOLUTION: usize = 200;
pub const MAX_ITERATIONS: u32 = 100;

/// Iterations before `z² + c` leaves the radius-2 disk, capped at `max_iter`.
pub fn escape_time(c_re: f32, c_im: f32, max_iter: u32) -> u32 {
    let (mut x, mut y) = (0.0f32, 0.0f32);
    let mut iter = 0;
    while x * x + y * y < 4.0 && iter < max_iter {
        let xt = x * x - y * y + c_re;
        y = 2.0 * x * y + c_im;
        x = xt;
        iter += 1;
    }
    iter
}

pub fn fractal_zoom(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let res = grid_axis(FRACTAL_RESOLUTION, ctx.multiplier);
    let zoom = 1.5 + 0.5 * (t * 0.2).sin();
    let center_re = -0.5 + 0.2 * (t * 0.3).cos();
    let center_im = 0.2 * (t * 0.4).sin();

    for i in 0..res {
        let u = i as f32 / res as f32 - 0.5;
        for j in 0..res {
            let v = j as f32 / res as f32 - 0.5;
            let h = escape_time(u * zoom + center_re, v * zoom + center_im, MAX_ITERATIONS) as f32
                / MAX_ITERATIONS as f32;

            out.push([u, h - 0.5, v], [h, 0.5 * h, 1.0 - h]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(0.0, 0.0, MAX_ITERATIONS), MAX_ITERATIONS);
        assert_eq!(escape_time(-1.0, 0.0, MAX_ITERATIONS), MAX_ITERATIONS);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(escape_time(3.0, 3.0, MAX_ITERATIONS), 1);
    }

    #[test]
    fn test_heights_in_unit_band() {
        let ctx = GenerationContext::new(2.0, 1, crate::generators::WellParams::default());
        let mut out = VertexBuffer::new();
        fractal_zoom(&ctx, &mut out);

        assert_eq!(out.len(), 200 * 200);
        assert!(out
            .vertices()
            .iter()
            .all(|v| (-0.5..=0.5).contains(&v.position[1])));
    }
}
