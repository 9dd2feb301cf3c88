use crate::generators::QualityLevel;

/// Discrete commands produced by key presses and applied at the top of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectMode(usize),
    IncreaseMass,
    DecreaseMass,
    SetQuality(QualityLevel),
    SetTargetFps(u32),
    CycleBackground,
    ToggleVsync,
    ToggleCursor,
    /// Camera back to the start position and mass back to default.
    Reset,
    Quit,
}
