use crate::config::SpectrumConfig;
use serde::{Deserialize, Serialize};

/// Bins over which the default pitched spectrum falls to silence. Fixed,
/// independent of `SpectrumConfig::control_points`.
pub const PITCHED_FALLOFF_BINS: f64 = 30.0;

/// Bins that carry energy in the default pitched spectrum.
fn is_default_harmonic(bin: usize) -> bool {
    matches!(bin, 0 | 7 | 11 | 14 | 16 | 18 | 21 | 23) || bin >= 25
}

/// A fixed-length amplitude envelope, one integer amplitude per frequency bin.
///
/// The length is set at construction and never changes. Every stored value
/// lies in `[0, max_amplitude]`; [`SpectrumBuffer::set`] clamps on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumBuffer {
    config: SpectrumConfig,
    values: Vec<u8>,
}

impl SpectrumBuffer {
    /// An all-zero (silent) spectrum.
    pub fn new(config: SpectrumConfig) -> Self {
        Self {
            config,
            values: vec![0; config.control_points],
        }
    }

    /// Default spectrum for a pitched instrument: a handful of harmonic bins
    /// with amplitude falling off toward the top of the range.
    pub fn pitched(config: SpectrumConfig) -> Self {
        let max = config.max_amplitude as f64;
        let values = (0..config.control_points)
            .map(|i| {
                if is_default_harmonic(i) {
                    let amp = (max * (1.0 - i as f64 / PITCHED_FALLOFF_BINS)).round() as i32;
                    config.clamp_amplitude(amp)
                } else {
                    0
                }
            })
            .collect();
        Self { config, values }
    }

    /// Default spectrum for a noise/drum voice: `max / sqrt(1 + i/3)`.
    pub fn noise(config: SpectrumConfig) -> Self {
        let max = config.max_amplitude as f64;
        let values = (0..config.control_points)
            .map(|i| {
                let amp = (max / (1.0 + i as f64 / 3.0).sqrt()).round() as i32;
                config.clamp_amplitude(amp)
            })
            .collect();
        Self { config, values }
    }

    /// Build a buffer from explicit values, clamping each one.
    pub fn from_values(config: SpectrumConfig, values: &[i32]) -> Self {
        let mut buffer = Self::new(config);
        for (i, &v) in values.iter().take(config.control_points).enumerate() {
            buffer.set(i, v);
        }
        buffer
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_amplitude(&self) -> u8 {
        self.config.max_amplitude
    }

    /// Amplitude at bin `i`.
    ///
    /// # Panics
    /// If `i` is outside `[0, len)`.
    pub fn get(&self, i: usize) -> u8 {
        self.values[i]
    }

    /// Store `value` at bin `i`, clamped to `[0, max_amplitude]`.
    ///
    /// # Panics
    /// If `i` is outside `[0, len)`. Range filtering is the caller's job.
    pub fn set(&mut self, i: usize, value: i32) {
        self.values[i] = self.config.clamp_amplitude(value);
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Overwrite every bin from `values`, which must have the same length.
    pub fn copy_from(&mut self, values: &[u8]) {
        assert_eq!(values.len(), self.values.len(), "spectrum length is fixed");
        for (i, &v) in values.iter().enumerate() {
            self.set(i, v as i32);
        }
    }

    /// Value of the last (highest-frequency) bin.
    pub fn last(&self) -> u8 {
        self.values.last().copied().unwrap_or(0)
    }
}
