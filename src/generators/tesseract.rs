//! Perspective projection of a rotating 4-D hypercube.

use glam::{Vec3, Vec4};

use super::{GenerationContext, VertexBuffer};

pub const VERTEX_COUNT: usize = 16;

/// Smallest allowed `(d - w)` in the perspective divide.
pub const MIN_W_DIVISOR: f32 = 1e-3;

/// The 16 corners of `[-1, 1]^4`; bit `k` of the index picks the sign of axis `k`.
pub fn hypercube_vertices() -> [Vec4; VERTEX_COUNT] {
    std::array::from_fn(|i| {
        let axis = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
        Vec4::new(axis(0), axis(1), axis(2), axis(3))
    })
}

/// Rotation in the x-w plane.
pub fn rotate_xw(v: Vec4, angle: f32) -> Vec4 {
    let (s, c) = angle.sin_cos();
    Vec4::new(c * v.x - s * v.w, v.y, v.z, s * v.x + c * v.w)
}

/// Perspective divide along w from a viewer at `w = distance`.
pub fn project_to_3d(v: Vec4, distance: f32) -> Vec3 {
    let divisor = (distance - v.w).max(MIN_W_DIVISOR);
    v.truncate() / divisor
}

pub fn tesseract(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let t = ctx.time;
    let distance = 3.0 + (t * 0.5).sin();
    let blue = 0.5 + 0.5 * t.sin();

    for corner in hypercube_vertices() {
        let rotated = rotate_xw(corner, t * 0.3);
        let projected = project_to_3d(rotated, distance);

        out.push(
            projected.to_array(),
            [0.5 + 0.5 * rotated.w, 1.0 - 0.5 * rotated.w, blue],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypercube_corners_are_distinct_sign_patterns() {
        let corners = hypercube_vertices();
        for (i, a) in corners.iter().enumerate() {
            assert!(a.to_array().iter().all(|c| c.abs() == 1.0));
            for b in &corners[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        for corner in hypercube_vertices() {
            let rotated = rotate_xw(corner, 0.77);
            assert!((rotated.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_divisor_is_floored() {
        let projected = project_to_3d(Vec4::new(1.0, 1.0, 1.0, 5.0), 5.0);
        assert!(projected.is_finite());
        assert_eq!(projected, Vec3::splat(1.0 / MIN_W_DIVISOR));
    }

    #[test]
    fn test_emits_sixteen_vertices() {
        let ctx = GenerationContext::new(9.0, 8, crate::generators::WellParams::default());
        let mut out = VertexBuffer::new();
        tesseract(&ctx, &mut out);
        assert_eq!(out.len(), VERTEX_COUNT);
    }
}
