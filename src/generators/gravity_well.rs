//! Rubber-sheet picture of a gravitational well.
//!
//! An 80×80 height field over `[-4, 4]²` drawn in grey, followed by a sparse white
//! grid that follows the same surface slightly above it. Outside the disk of
//! radius [`EXTENT`] the sheet is exactly flat.

use super::{GenerationContext, VertexBuffer};

pub const GRID_SIZE: usize = 80;
pub const EXTENT: f32 = 4.0;
pub const GRID_LINES: usize = 15;
pub const GRID_LINE_STRIDE: usize = 3;
pub const GRID_LINE_LIFT: f32 = 0.01;

const SURFACE_COLOR: [f32; 3] = [0.6, 0.6, 0.6];
const GRID_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Mass and depth scale read by the well generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellParams {
    pub central_mass: f32,
    pub max_deformation: f32,
}

impl Default for WellParams {
    fn default() -> Self {
        Self {
            central_mass: 0.5,
            max_deformation: 1.0,
        }
    }
}

/// Sheet height at distance `r` from the centre.
///
/// Blends a steep Lorentzian core into a parabola that reaches zero at the rim.
pub fn well_height(r: f32, params: WellParams) -> f32 {
    if r >= EXTENT || r.is_nan() {
        return 0.0;
    }
    let u = r / EXTENT;
    let depth = params.central_mass * params.max_deformation;
    let well = 1.0 / (1.0 + 4.0 * params.central_mass * u * u);
    let parabolic = 1.0 - u * u;
    let blend = (-3.0 * u).exp();

    -depth * (blend * well + (1.0 - blend) * parabolic)
}

/// Samples per grid line.
fn samples_per_line() -> usize {
    GRID_SIZE.div_ceil(GRID_LINE_STRIDE)
}

pub fn vertex_count() -> usize {
    GRID_SIZE * GRID_SIZE + GRID_LINES * 2 * samples_per_line()
}

#[inline]
fn grid_coord(index: usize, count: usize) -> f32 {
    index as f32 / (count - 1) as f32 * 2.0 * EXTENT - EXTENT
}

pub fn gravity_well(ctx: &GenerationContext, out: &mut VertexBuffer) {
    let params = ctx.well;
    let height = |x: f32, z: f32| well_height((x * x + z * z).sqrt(), params);

    for i in 0..GRID_SIZE {
        let x = grid_coord(i, GRID_SIZE);
        for j in 0..GRID_SIZE {
            let z = grid_coord(j, GRID_SIZE);
            out.push([x, height(x, z), z], SURFACE_COLOR);
        }
    }

    for line in 0..GRID_LINES {
        let fixed = grid_coord(line, GRID_LINES);

        for j in (0..GRID_SIZE).step_by(GRID_LINE_STRIDE) {
            let z = grid_coord(j, GRID_SIZE);
            out.push([fixed, height(fixed, z) + GRID_LINE_LIFT, z], GRID_COLOR);
        }
        for i in (0..GRID_SIZE).step_by(GRID_LINE_STRIDE) {
            let x = grid_coord(i, GRID_SIZE);
            out.push([x, height(x, fixed) + GRID_LINE_LIFT, fixed], GRID_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_centre_depth_equals_mass_times_deformation() {
        let params = WellParams::default();
        assert!((well_height(0.0, params) + 0.5).abs() < 1e-6);

        let heavy = WellParams {
            central_mass: 2.0,
            max_deformation: 1.5,
        };
        assert!((well_height(0.0, heavy) + 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rim_is_nearly_flat() {
        // The exp(-3) core term survives at the rim, leaving a small step.
        let h = well_height(EXTENT - 1e-4, WellParams::default());
        assert!(h.abs() < 1e-2, "height near extent was {}", h);
        assert!(h.abs() < well_height(0.0, WellParams::default()).abs() * 0.05);
    }

    #[test]
    fn test_outside_extent_is_exactly_zero() {
        let params = WellParams::default();
        assert_eq!(well_height(EXTENT, params), 0.0);
        assert_eq!(well_height(5.5, params), 0.0);
        assert_eq!(well_height(f32::NAN, params), 0.0);
        assert_eq!(well_height(f32::INFINITY, params), 0.0);
    }

    #[test]
    fn test_vertex_layout() {
        assert_eq!(samples_per_line(), 27);
        assert_eq!(vertex_count(), 6400 + 810);

        let ctx = GenerationContext::new(0.0, 1, WellParams::default());
        let mut out = VertexBuffer::new();
        gravity_well(&ctx, &mut out);
        assert_eq!(out.len(), vertex_count());

        let surface = &out.vertices()[..GRID_SIZE * GRID_SIZE];
        let lines = &out.vertices()[GRID_SIZE * GRID_SIZE..];
        assert!(surface.iter().all(|v| v.color == SURFACE_COLOR));
        assert!(lines.iter().all(|v| v.color == GRID_COLOR));
    }

    #[test]
    fn test_grid_lines_float_above_surface() {
        let ctx = GenerationContext::new(0.0, 1, WellParams::default());
        let mut out = VertexBuffer::new();
        gravity_well(&ctx, &mut out);

        // Corner line sample at (-4, -4) is outside the disk: only the lift remains.
        let first_line = out.vertices()[GRID_SIZE * GRID_SIZE];
        assert_eq!(first_line.position, [-EXTENT, GRID_LINE_LIFT, -EXTENT]);
    }

    proptest! {
        #[test]
        fn prop_heavier_mass_never_shallower_at_centre(a in 0.1f32..5.0, b in 0.1f32..5.0) {
            let (light, heavy) = if a < b { (a, b) } else { (b, a) };
            let h = |m| well_height(0.0, WellParams { central_mass: m, max_deformation: 1.0 });
            prop_assert!(h(heavy) <= h(light));
        }

        #[test]
        fn prop_height_never_positive(r in 0.0f32..10.0, m in 0.1f32..5.0) {
            let h = well_height(r, WellParams { central_mass: m, max_deformation: 1.0 });
            prop_assert!(h <= 0.0);
        }
    }
}
