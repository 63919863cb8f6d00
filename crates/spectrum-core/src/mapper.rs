use crate::config::{EditorDimensions, SpectrumConfig};
use glam::DVec2;

/// A point in the spectrum domain: fractional bin index and amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPoint {
    pub freq: f64,
    pub amp: f64,
}

impl DomainPoint {
    pub fn new(freq: f64, amp: f64) -> Self {
        Self { freq, amp }
    }
}

/// Affine conversions between editor units and the spectrum domain.
///
/// The x axis keeps one bin of margin on each side so the boundary bins are
/// not pinned to the canvas border; the y axis is inverted with a one-unit
/// inset. Nothing is clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub config: SpectrumConfig,
    pub dimensions: EditorDimensions,
}

impl CoordinateMapper {
    pub fn new(config: SpectrumConfig, dimensions: EditorDimensions) -> Self {
        Self { config, dimensions }
    }

    fn slots(&self) -> f64 {
        (self.config.control_points + 2) as f64
    }

    pub fn x_to_freq(&self, x: f64) -> f64 {
        self.slots() * x / self.dimensions.width - 1.0
    }

    pub fn y_to_amp(&self, y: f64) -> f64 {
        self.config.max_amplitude as f64 * (1.0 - (y - 1.0) / (self.dimensions.height - 2.0))
    }

    pub fn to_domain(&self, point: DVec2) -> DomainPoint {
        DomainPoint::new(self.x_to_freq(point.x), self.y_to_amp(point.y))
    }

    /// Horizontal position of bin `i` when drawing.
    pub fn bin_to_x(&self, bin: f64) -> f64 {
        (bin + 1.0) * self.dimensions.width / self.slots()
    }

    /// Vertical position of an amplitude when drawing. Zero lands on the
    /// bottom edge, the maximum one unit below the top.
    pub fn amp_to_y(&self, amp: f64) -> f64 {
        (1.0 - amp / self.config.max_amplitude as f64) * (self.dimensions.height - 1.0) + 1.0
    }

    /// Scale a container-normalized position (`[0, 1]` on both axes) to
    /// editor units.
    pub fn denormalize(&self, normalized: DVec2) -> DVec2 {
        normalized * DVec2::new(self.dimensions.width, self.dimensions.height)
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(SpectrumConfig::default(), EditorDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_to_freq_margins() {
        let mapper = CoordinateMapper::default();
        assert!((mapper.x_to_freq(0.0) + 1.0).abs() < 1e-9);
        assert!((mapper.x_to_freq(120.0) - 31.0).abs() < 1e-9);
        assert!((mapper.x_to_freq(120.0 / 32.0)).abs() < 1e-9);
    }

    #[test]
    fn test_y_to_amp_inverted() {
        let mapper = CoordinateMapper::default();
        assert!((mapper.y_to_amp(1.0) - 7.0).abs() < 1e-9);
        assert!((mapper.y_to_amp(25.0)).abs() < 1e-9);
        assert!(mapper.y_to_amp(30.0) < 0.0);
    }

    #[test]
    fn test_bin_to_x_inverts_x_to_freq() {
        let mapper = CoordinateMapper::default();
        for bin in 0..30 {
            let x = mapper.bin_to_x(bin as f64);
            assert!((mapper.x_to_freq(x) - bin as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_amp_to_y_range() {
        let mapper = CoordinateMapper::default();
        assert!((mapper.amp_to_y(0.0) - 26.0).abs() < 1e-9);
        assert!((mapper.amp_to_y(7.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_denormalize() {
        let mapper = CoordinateMapper::default();
        let p = mapper.denormalize(DVec2::new(0.5, 1.0));
        assert_eq!(p, DVec2::new(60.0, 26.0));
    }
}
