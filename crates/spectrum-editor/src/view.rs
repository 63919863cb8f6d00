//! egui front end: a surface that keeps the written paths and paints them,
//! and a widget function that feeds egui pointer state to the editor.

use crate::editor::SpectrumEditor;
use crate::host::SpectrumHost;
use crate::input::PointerEvent;
use crate::prefs::Theme;
use crate::render::{Gridlines, Layer, SpectrumSurface};
use crate::theme::Palette;
use egui::{pos2, Color32, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use glam::DVec2;
use spectrum_core::{EditorDimensions, SpectrumPath};

/// Retained drawing state written by the renderer.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    fill: SpectrumPath,
    curve: SpectrumPath,
    arrow: SpectrumPath,
    arrow_visible: bool,
    fifths_visible: bool,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self {
            fill: SpectrumPath::new(),
            curve: SpectrumPath::new(),
            arrow: SpectrumPath::new(),
            arrow_visible: true,
            fifths_visible: true,
        }
    }
}

impl SpectrumSurface for EguiSurface {
    fn set_path(&mut self, layer: Layer, path: &SpectrumPath) {
        match layer {
            Layer::Fill => self.fill = path.clone(),
            Layer::Curve => self.curve = path.clone(),
            Layer::Arrow => self.arrow = path.clone(),
            Layer::Fifths => {}
        }
    }

    fn set_visible(&mut self, layer: Layer, visible: bool) {
        match layer {
            Layer::Arrow => self.arrow_visible = visible,
            Layer::Fifths => self.fifths_visible = visible,
            Layer::Fill | Layer::Curve => {}
        }
    }
}

impl EguiSurface {
    pub fn curve(&self) -> &SpectrumPath {
        &self.curve
    }

    pub fn arrow_visible(&self) -> bool {
        self.arrow_visible
    }

    pub fn fifths_visible(&self) -> bool {
        self.fifths_visible
    }

    /// Paint everything into `rect`, stretching editor units to fit.
    pub fn paint(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        dimensions: EditorDimensions,
        gridlines: &Gridlines,
        palette: &Palette,
    ) {
        let to_screen = |(x, y): (f64, f64)| -> Pos2 {
            pos2(
                rect.min.x + (x / dimensions.width) as f32 * rect.width(),
                rect.min.y + (y / dimensions.height) as f32 * rect.height(),
            )
        };

        painter.rect_filled(rect, 0.0, palette.editor_background);

        // The fill outline is a function of x; paint it as trapezoids down
        // to the baseline.
        let points: Vec<(f64, f64)> = self.fill.commands().iter().filter_map(|c| c.point()).collect();
        let mut mesh = egui::Mesh::default();
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.0 <= a.0 {
                continue;
            }
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(to_screen(a), palette.fill);
            mesh.colored_vertex(to_screen(b), palette.fill);
            mesh.colored_vertex(to_screen((b.0, dimensions.height)), palette.fill);
            mesh.colored_vertex(to_screen((a.0, dimensions.height)), palette.fill);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
        painter.add(Shape::mesh(mesh));

        let bar = |x: f64, color: Color32| {
            let bar_rect = Rect::from_min_max(
                to_screen((x, 0.0)),
                to_screen((x + Gridlines::BAR_WIDTH, dimensions.height)),
            );
            painter.rect_filled(bar_rect, 0.0, color);
        };
        for &x in &gridlines.octaves {
            bar(x, palette.tonic);
        }
        if self.fifths_visible {
            for &x in &gridlines.fifths {
                bar(x, palette.fifth_note);
            }
        }

        for subpath in self.curve.subpaths() {
            if subpath.len() < 2 {
                continue;
            }
            let line: Vec<Pos2> = subpath.into_iter().map(to_screen).collect();
            painter.add(Shape::line(line, Stroke::new(2.0, palette.curve)));
        }

        if self.arrow_visible {
            let arrow: Vec<Pos2> = self
                .arrow
                .commands()
                .iter()
                .filter_map(|c| c.point())
                .map(to_screen)
                .collect();
            painter.add(Shape::convex_polygon(arrow, palette.curve, Stroke::NONE));
        }
    }
}

/// Translate this frame's egui pointer state into editor events, in the
/// order they happened.
///
/// A press and release within one frame yield `Down` then `Up`. A release
/// with no pointer position (the pointer left the window) is reported at
/// the last position seen over this widget.
pub fn pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: Rect,
    dragging: bool,
) -> Vec<PointerEvent> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Vec::new();
    }
    let (pos, pressed, down, released, delta) = ui.input(|i| {
        (
            i.pointer.interact_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.delta(),
        )
    });
    let pos = match pos {
        Some(pos) => {
            ui.data_mut(|d| d.insert_temp(response.id, pos));
            pos
        }
        None => match ui.data(|d| d.get_temp::<Pos2>(response.id)) {
            Some(last) => last,
            None => return Vec::new(),
        },
    };
    let normalized = DVec2::new(
        ((pos.x - rect.min.x) / rect.width()) as f64,
        ((pos.y - rect.min.y) / rect.height()) as f64,
    );

    let mut events = Vec::with_capacity(2);
    let mut dragging = dragging;
    if pressed && response.hovered() {
        events.push(PointerEvent::down(normalized));
        dragging = true;
    } else if delta != Vec2::ZERO && (dragging || response.hovered()) {
        events.push(PointerEvent::moved(normalized, down && dragging));
    }
    if released && dragging {
        events.push(PointerEvent::up(normalized));
    }
    events
}

/// Lay out, handle input for, and paint a spectrum editor filling the
/// available width.
pub fn draw_spectrum_editor<H: SpectrumHost + ?Sized>(
    ui: &mut egui::Ui,
    editor: &mut SpectrumEditor,
    host: &mut H,
    surface: &mut EguiSurface,
    theme: Theme,
) -> egui::Response {
    let dimensions = editor.dimensions();
    let width = ui.available_width();
    let height = width * (dimensions.height / dimensions.width) as f32;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click_and_drag());

    for event in pointer_events(ui, &response, rect, editor.is_dragging()) {
        editor.handle_pointer(host, event);
    }

    editor.render(&*host, surface);
    surface.paint(
        &ui.painter_at(rect),
        rect,
        dimensions,
        editor.gridlines(),
        &Palette::for_theme(theme),
    );

    response.on_hover_cursor(egui::CursorIcon::Crosshair)
}
