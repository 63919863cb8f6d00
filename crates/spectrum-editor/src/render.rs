use spectrum_core::{CoordinateMapper, SpectrumBuffer, SpectrumPath};

/// Drawable elements of the editor whose contents change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Fill,
    Curve,
    Arrow,
    Fifths,
}

/// A drawing target: something that can hold path-shaped elements.
pub trait SpectrumSurface {
    fn set_path(&mut self, layer: Layer, path: &SpectrumPath);
    fn set_visible(&mut self, layer: Layer, visible: bool);
}

/// Left edges of the 2-unit-wide gridline bars, in editor units.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridlines {
    pub octaves: Vec<f64>,
    pub fifths: Vec<f64>,
}

impl Gridlines {
    pub const BAR_WIDTH: f64 = 2.0;

    pub fn new(mapper: &CoordinateMapper) -> Self {
        let n = mapper.config.control_points;
        let step = mapper.config.control_points_per_octave.max(1);
        let bar = |i: usize| mapper.bin_to_x(i as f64) - Self::BAR_WIDTH / 2.0;
        Self {
            octaves: (0..n).step_by(step).map(bar).collect(),
            fifths: (4..=n).step_by(step).map(bar).collect(),
        }
    }
}

/// Paths computed from one buffer state.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumGeometry {
    pub curve: SpectrumPath,
    pub fill: SpectrumPath,
    pub arrow: SpectrumPath,
    pub arrow_visible: bool,
}

/// What was last written to the surface. Only suppresses redundant writes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCache {
    pub path: String,
    pub fifths_shown: bool,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self {
            path: String::new(),
            fifths_shown: true,
        }
    }
}

/// Turns a spectrum into curve, fill and end-arrow paths.
#[derive(Debug, Clone)]
pub struct PathRenderer {
    mapper: CoordinateMapper,
    gridlines: Gridlines,
    cache: RenderCache,
}

impl PathRenderer {
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self {
            gridlines: Gridlines::new(&mapper),
            mapper,
            cache: RenderCache::default(),
        }
    }

    pub fn gridlines(&self) -> &Gridlines {
        &self.gridlines
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn build(&self, buffer: &SpectrumBuffer) -> SpectrumGeometry {
        let width = self.mapper.dimensions.width;
        let height = self.mapper.dimensions.height;

        let mut curve = SpectrumPath::new();
        curve.move_to(0.0, height);
        let mut last = 0u8;
        for (i, &value) in buffer.values().iter().enumerate() {
            let x = self.mapper.bin_to_x(i as f64);
            let y = self.mapper.amp_to_y(value as f64);
            // Break the curve wherever it would run along the baseline.
            if last != 0 || value != 0 {
                curve.line_to(x, y);
            } else {
                curve.move_to(x, y);
            }
            last = value;
        }

        let last_height = self.mapper.amp_to_y(last as f64);
        if last > 0 {
            curve.line_to(width - 1.0, last_height);
        }

        let mut fill = curve.clone();
        fill.line_to(width, last_height)
            .line_to(width, height)
            .line_to(0.0, height)
            .close();

        let mut arrow = SpectrumPath::new();
        arrow
            .move_to(width, last_height)
            .line_to(width - 4.0, last_height - 4.0)
            .line_to(width - 4.0, last_height + 4.0)
            .close();

        SpectrumGeometry {
            curve,
            fill,
            arrow,
            arrow_visible: last > 0,
        }
    }

    /// Sync `surface` with `buffer` and the fifth-gridline preference,
    /// writing only what changed since the previous call. Returns whether
    /// anything was written.
    pub fn render<S: SpectrumSurface + ?Sized>(
        &mut self,
        buffer: &SpectrumBuffer,
        show_fifth: bool,
        surface: &mut S,
    ) -> bool {
        let mut wrote = false;

        let geometry = self.build(buffer);
        let data = geometry.curve.to_data();
        if data != self.cache.path {
            log::trace!("redrawing spectrum path");
            self.cache.path = data;
            surface.set_path(Layer::Curve, &geometry.curve);
            surface.set_path(Layer::Fill, &geometry.fill);
            surface.set_path(Layer::Arrow, &geometry.arrow);
            surface.set_visible(Layer::Arrow, geometry.arrow_visible);
            wrote = true;
        }

        if show_fifth != self.cache.fifths_shown {
            self.cache.fifths_shown = show_fifth;
            surface.set_visible(Layer::Fifths, show_fifth);
            wrote = true;
        }

        wrote
    }
}
