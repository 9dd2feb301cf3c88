//! Quality policy.
//!
//! Maps the user-facing quality level (F5–F8) to the integer multiplier every
//! generator scales its sample count by. 1-D generators scale linearly, 2-D grids
//! take `sqrt(multiplier)` per axis so the total still grows linearly, and 3-D
//! lattices are additionally capped per axis.

/// Multiplier used whenever a level or multiplier is out of range.
pub const DEFAULT_MULTIPLIER: u32 = 4;

/// Hard per-axis cap for volumetric lattices, regardless of quality.
pub const MAX_LATTICE_RESOLUTION: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum QualityLevel {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Low,
        QualityLevel::Medium,
        QualityLevel::High,
        QualityLevel::Ultra,
    ];

    /// Level for a raw index; anything outside `0..=3` falls back to `High`.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => QualityLevel::Low,
            1 => QualityLevel::Medium,
            2 => QualityLevel::High,
            3 => QualityLevel::Ultra,
            _ => QualityLevel::default(),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn multiplier(self) -> u32 {
        match self {
            QualityLevel::Low => 1,
            QualityLevel::Medium => 2,
            QualityLevel::High => 4,
            QualityLevel::Ultra => 8,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            QualityLevel::Low => "Low",
            QualityLevel::Medium => "Medium",
            QualityLevel::High => "High",
            QualityLevel::Ultra => "Ultra",
        }
    }
}

/// Multiplier for a raw quality index.
pub fn multiplier_for_level(level: i64) -> u32 {
    QualityLevel::from_index(level).multiplier()
}

/// Zero or negative multipliers fail closed to [`DEFAULT_MULTIPLIER`].
pub fn effective_multiplier(multiplier: i64) -> u32 {
    if multiplier <= 0 {
        DEFAULT_MULTIPLIER
    } else {
        u32::try_from(multiplier).unwrap_or(DEFAULT_MULTIPLIER)
    }
}

/// Sample count for a 1-D domain.
#[inline]
pub fn linear_count(base: usize, multiplier: u32) -> usize {
    base * multiplier as usize
}

/// Per-axis resolution for a 2-D grid.
#[inline]
pub fn grid_axis(base: usize, multiplier: u32) -> usize {
    (base as f32 * (multiplier as f32).sqrt()) as usize
}

/// Per-axis resolution for a 3-D lattice, capped at [`MAX_LATTICE_RESOLUTION`].
#[inline]
pub fn lattice_axis(base: usize, multiplier: u32) -> usize {
    (base * multiplier as usize).min(MAX_LATTICE_RESOLUTION)
}
