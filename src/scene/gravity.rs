//! Central mass of the gravitational well.
//!
//! Mass is stored in integer tenths so repeated ±0.2 steps never drift: from 4.9 a
//! single increase reports exactly 5.0, and N increases followed by N decreases
//! land back on the starting value.

use crate::generators::WellParams;

pub const MIN_MASS_TENTHS: u32 = 1;
pub const MAX_MASS_TENTHS: u32 = 50;
pub const MASS_STEP_TENTHS: u32 = 2;
pub const DEFAULT_MASS_TENTHS: u32 = 5;

pub const DEFAULT_MAX_DEFORMATION: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityState {
    mass_tenths: u32,
    max_deformation: f32,
}

impl Default for GravityState {
    fn default() -> Self {
        Self {
            mass_tenths: DEFAULT_MASS_TENTHS,
            max_deformation: DEFAULT_MAX_DEFORMATION,
        }
    }
}

impl GravityState {
    /// State with the mass rounded to the nearest tenth and clamped into range.
    pub fn with_mass(mass: f32) -> Self {
        let tenths = if mass.is_finite() {
            (mass * 10.0).round().clamp(MIN_MASS_TENTHS as f32, MAX_MASS_TENTHS as f32) as u32
        } else {
            DEFAULT_MASS_TENTHS
        };
        Self {
            mass_tenths: tenths,
            ..Self::default()
        }
    }

    pub fn central_mass(&self) -> f32 {
        self.mass_tenths as f32 / 10.0
    }

    pub fn max_deformation(&self) -> f32 {
        self.max_deformation
    }

    pub fn increase_mass(&mut self) {
        self.mass_tenths = (self.mass_tenths + MASS_STEP_TENTHS).min(MAX_MASS_TENTHS);
        log::info!("Central mass: {:.1}", self.central_mass());
    }

    pub fn decrease_mass(&mut self) {
        self.mass_tenths = self
            .mass_tenths
            .saturating_sub(MASS_STEP_TENTHS)
            .max(MIN_MASS_TENTHS);
        log::info!("Central mass: {:.1}", self.central_mass());
    }

    pub fn reset(&mut self) {
        self.mass_tenths = DEFAULT_MASS_TENTHS;
    }

    pub fn well_params(&self) -> WellParams {
        WellParams {
            central_mass: self.central_mass(),
            max_deformation: self.max_deformation,
        }
    }
}
