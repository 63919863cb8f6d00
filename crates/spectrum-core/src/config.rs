use serde::{Deserialize, Serialize};

/// Number of frequency bins in a spectrum.
pub const SPECTRUM_CONTROL_POINTS: usize = 30;
/// Bins per octave, used to place octave and fifth gridlines.
pub const SPECTRUM_CONTROL_POINTS_PER_OCTAVE: usize = 7;
/// Largest amplitude a bin can hold (3 bits per control point).
pub const SPECTRUM_MAX: u8 = 7;
/// Number of drum-kit slots, each with its own spectrum.
pub const DRUM_COUNT: usize = 12;

/// Shape of the spectrum domain: bin count and amplitude range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    pub control_points: usize,
    pub control_points_per_octave: usize,
    pub max_amplitude: u8,
}

impl SpectrumConfig {
    pub fn new(control_points: usize, max_amplitude: u8) -> Self {
        Self {
            control_points,
            max_amplitude,
            ..Self::default()
        }
    }

    /// Clamp an already-rounded amplitude into `[0, max_amplitude]`.
    pub fn clamp_amplitude(&self, value: i32) -> u8 {
        value.clamp(0, self.max_amplitude as i32) as u8
    }
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            control_points: SPECTRUM_CONTROL_POINTS,
            control_points_per_octave: SPECTRUM_CONTROL_POINTS_PER_OCTAVE,
            max_amplitude: SPECTRUM_MAX,
        }
    }
}

/// Size of the editor canvas in editor units (the SVG viewBox).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for EditorDimensions {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 26.0,
        }
    }
}
