//! Generator library.
//!
//! Sixteen closed-form geometry generators sharing one call contract:
//! `(time, quality multiplier, well parameters) → vertices`. Each call clears the
//! output buffer and rebuilds it from scratch, so a frame's geometry depends only
//! on the [`GenerationContext`] it was given.

pub mod attractor;
pub mod curves;
pub mod fractal;
pub mod gravity_well;
pub mod implicit;
pub mod quality;
pub mod surfaces;
pub mod tesseract;
pub mod vertex;

pub use gravity_well::WellParams;
pub use quality::QualityLevel;
pub use vertex::{Vertex, VertexBuffer, FLOATS_PER_VERTEX};

/// Floor applied to any denominator that could approach zero.
pub(crate) const MIN_DENOMINATOR: f32 = 1e-4;

/// How a frame's vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Points,
    LineStrip,
}

/// Inputs shared by every generator for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationContext {
    /// Seconds since startup.
    pub time: f32,
    /// Sample-density multiplier, always >= 1.
    pub multiplier: u32,
    /// Only read by [`Generator::GravityWell`].
    pub well: WellParams,
}

impl GenerationContext {
    /// Build a context; a non-positive multiplier falls back to the default.
    pub fn new(time: f32, multiplier: i64, well: WellParams) -> Self {
        Self {
            time,
            multiplier: quality::effective_multiplier(multiplier),
            well,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Generator {
    #[default]
    ParametricSpiral,
    Lissajous,
    Helix,
    SineSurface,
    Torus,
    Hypotrochoid,
    Superformula,
    LorenzAttractor,
    KleinBottle,
    Gyroid,
    SphericalHarmonic,
    FractalZoom,
    Phyllotaxis,
    Tesseract,
    WaveInterference,
    GravityWell,
}

impl Generator {
    pub const COUNT: usize = 16;

    /// All generators in mode-index order.
    pub const ALL: [Generator; Generator::COUNT] = [
        Generator::ParametricSpiral,
        Generator::Lissajous,
        Generator::Helix,
        Generator::SineSurface,
        Generator::Torus,
        Generator::Hypotrochoid,
        Generator::Superformula,
        Generator::LorenzAttractor,
        Generator::KleinBottle,
        Generator::Gyroid,
        Generator::SphericalHarmonic,
        Generator::FractalZoom,
        Generator::Phyllotaxis,
        Generator::Tesseract,
        Generator::WaveInterference,
        Generator::GravityWell,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Mode index in `0..16`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Generator::ParametricSpiral => "Parametric Spiral",
            Generator::Lissajous => "Lissajous Curve",
            Generator::Helix => "3D Helix",
            Generator::SineSurface => "Sine Wave Surface",
            Generator::Torus => "Animated Torus",
            Generator::Hypotrochoid => "Hypotrochoid",
            Generator::Superformula => "Superformula",
            Generator::LorenzAttractor => "Lorenz Attractor",
            Generator::KleinBottle => "Klein Bottle",
            Generator::Gyroid => "Gyroid Surface",
            Generator::SphericalHarmonic => "Spherical Harmonic",
            Generator::FractalZoom => "Fractal Zoom",
            Generator::Phyllotaxis => "Phyllotaxis",
            Generator::Tesseract => "Tesseract 4D Projection",
            Generator::WaveInterference => "Wave Interference Surface",
            Generator::GravityWell => "Gravitational Spacetime Curvature",
        }
    }

    /// Surfaces, the implicit lattice and the fractal render as point clouds;
    /// everything else is one connected line strip.
    pub fn draw_mode(self) -> DrawMode {
        match self {
            Generator::SineSurface
            | Generator::Gyroid
            | Generator::FractalZoom
            | Generator::WaveInterference => DrawMode::Points,
            _ => DrawMode::LineStrip,
        }
    }

    /// Upper bound on the vertices one call can emit at `multiplier`.
    ///
    /// Exact for every generator except the gyroid, whose output depends on how
    /// many lattice cells fall inside the isolevel band.
    pub fn vertex_budget(self, multiplier: u32) -> usize {
        use self::quality::{grid_axis, lattice_axis, linear_count};

        match self {
            Generator::ParametricSpiral => linear_count(curves::SPIRAL_POINTS, multiplier),
            Generator::Lissajous => linear_count(curves::LISSAJOUS_POINTS, multiplier),
            Generator::Helix => linear_count(curves::HELIX_POINTS, multiplier),
            Generator::SineSurface => grid_axis(surfaces::SINE_GRID, multiplier).pow(2),
            Generator::Torus => {
                grid_axis(surfaces::TORUS_MAJOR, multiplier)
                    * grid_axis(surfaces::TORUS_MINOR, multiplier)
            }
            Generator::Hypotrochoid => linear_count(curves::HYPOTROCHOID_POINTS, multiplier),
            Generator::Superformula => linear_count(curves::SUPERFORMULA_POINTS, multiplier),
            Generator::LorenzAttractor => linear_count(attractor::LORENZ_STEPS, multiplier),
            Generator::KleinBottle => {
                grid_axis(surfaces::KLEIN_U, multiplier) * grid_axis(surfaces::KLEIN_V, multiplier)
            }
            Generator::Gyroid => lattice_axis(implicit::GYROID_BASE, multiplier).pow(3),
            Generator::SphericalHarmonic => {
                (grid_axis(surfaces::HARMONIC_LAT, multiplier) + 1)
                    * (grid_axis(surfaces::HARMONIC_LON, multiplier) + 1)
            }
            Generator::FractalZoom => grid_axis(fractal::FRACTAL_RESOLUTION, multiplier).pow(2),
            Generator::Phyllotaxis => linear_count(curves::PHYLLOTAXIS_SEEDS, multiplier),
            Generator::Tesseract => tesseract::VERTEX_COUNT,
            Generator::WaveInterference => {
                grid_axis(surfaces::INTERFERENCE_GRID, multiplier).pow(2)
            }
            Generator::GravityWell => gravity_well::vertex_count(),
        }
    }

    /// Clear `out` and fill it with this generator's geometry for `ctx`.
    pub fn generate(self, ctx: &GenerationContext, out: &mut VertexBuffer) {
        out.clear();
        if self != Generator::Gyroid {
            out.reserve(self.vertex_budget(ctx.multiplier));
        }

        match self {
            Generator::ParametricSpiral => curves::parametric_spiral(ctx, out),
            Generator::Lissajous => curves::lissajous(ctx, out),
            Generator::Helix => curves::helix(ctx, out),
            Generator::SineSurface => surfaces::sine_surface(ctx, out),
            Generator::Torus => surfaces::torus(ctx, out),
            Generator::Hypotrochoid => curves::hypotrochoid(ctx, out),
            Generator::Superformula => curves::superformula(ctx, out),
            Generator::LorenzAttractor => attractor::lorenz(ctx, out),
            Generator::KleinBottle => surfaces::klein_bottle(ctx, out),
            Generator::Gyroid => implicit::gyroid(ctx, out),
            Generator::SphericalHarmonic => surfaces::spherical_harmonic(ctx, out),
            Generator::FractalZoom => fractal::fractal_zoom(ctx, out),
            Generator::Phyllotaxis => curves::phyllotaxis(ctx, out),
            Generator::Tesseract => tesseract::tesseract(ctx, out),
            Generator::WaveInterference => surfaces::wave_interference(ctx, out),
            Generator::GravityWell => gravity_well::gravity_well(ctx, out),
        }

        debug_assert!(out.len() <= self.vertex_budget(ctx.multiplier));
    }
}
