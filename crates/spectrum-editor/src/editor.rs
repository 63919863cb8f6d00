use crate::change::{ChangeEmitter, SpectrumChange};
use crate::drag::DragInterpolator;
use crate::host::SpectrumHost;
use crate::input::{GestureStep, PointerEvent, PointerInputController};
use crate::render::{Gridlines, PathRenderer, SpectrumSurface};
use spectrum_core::{CoordinateMapper, DomainPoint, EditorDimensions, SpectrumTarget};

/// Buffer a gesture edits and its contents when the gesture began.
#[derive(Debug, Clone)]
struct GestureTarget {
    target: SpectrumTarget,
    before: Vec<u8>,
}

/// Interactive editor for one spectrum of the host's current instrument.
///
/// `slot == None` edits the instrument's primary spectrum, `Some(i)` the
/// drum-kit spectrum at slot `i`. The slot is not range-checked.
#[derive(Debug)]
pub struct SpectrumEditor {
    slot: Option<usize>,
    mapper: CoordinateMapper,
    input: PointerInputController,
    drag: DragInterpolator,
    emitter: ChangeEmitter,
    renderer: PathRenderer,
    gesture: Option<GestureTarget>,
}

impl SpectrumEditor {
    pub fn new<H: SpectrumHost + ?Sized>(host: &H, slot: Option<usize>) -> Self {
        Self::with_dimensions(host, slot, EditorDimensions::default())
    }

    pub fn with_dimensions<H: SpectrumHost + ?Sized>(
        host: &H,
        slot: Option<usize>,
        dimensions: EditorDimensions,
    ) -> Self {
        let mapper = CoordinateMapper::new(host.spectrum_config(), dimensions);
        Self {
            slot,
            mapper,
            input: PointerInputController::new(mapper),
            drag: DragInterpolator::new(),
            emitter: ChangeEmitter::new(),
            renderer: PathRenderer::new(mapper),
            gesture: None,
        }
    }

    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn dimensions(&self) -> EditorDimensions {
        self.mapper.dimensions
    }

    pub fn gridlines(&self) -> &Gridlines {
        self.renderer.gridlines()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The spectrum this editor shows for the host's current selection.
    pub fn target<H: SpectrumHost + ?Sized>(&self, host: &H) -> SpectrumTarget {
        SpectrumTarget {
            instrument: host.current_instrument(),
            slot: self.slot,
        }
    }

    pub fn handle_pointer<H: SpectrumHost + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        match self.input.route(&event) {
            GestureStep::Begin(point) => self.begin(host, point),
            GestureStep::Drag(point) => self.drag_to(host, point),
            GestureStep::End => self.end(host),
            GestureStep::Ignore => {}
        }
    }

    fn begin<H: SpectrumHost + ?Sized>(&mut self, host: &mut H, point: DomainPoint) {
        if self.drag.is_dragging() {
            log::debug!("pointer pressed during a spectrum gesture; committing it first");
            self.end(host);
        }
        let target = self.target(&*host);
        log::debug!("spectrum gesture started on {target:?}");
        self.gesture = Some(GestureTarget {
            target,
            before: host.spectrum(target).values().to_vec(),
        });
        self.drag.begin(point);
        // A press paints like the first move of the drag.
        self.drag_to(host, point);
    }

    fn drag_to<H: SpectrumHost + ?Sized>(&mut self, host: &mut H, point: DomainPoint) {
        let Some(gesture) = &self.gesture else {
            return;
        };
        let after = {
            let buffer = host.spectrum_mut(gesture.target);
            if !self.drag.drag_to(buffer, point) {
                return;
            }
            buffer.values().to_vec()
        };
        let change = SpectrumChange::new(gesture.target, gesture.before.clone(), after);
        self.emitter.preview(host, change);
    }

    fn end<H: SpectrumHost + ?Sized>(&mut self, host: &mut H) {
        if !self.drag.end() {
            log::debug!("pointer released with no spectrum gesture active");
            return;
        }
        self.gesture = None;
        self.emitter.commit(host);
        log::debug!("spectrum gesture ended");
    }

    /// Sync `surface` with the current buffer and preferences. Writes nothing
    /// when neither changed since the last call.
    pub fn render<H: SpectrumHost + ?Sized, S: SpectrumSurface + ?Sized>(
        &mut self,
        host: &H,
        surface: &mut S,
    ) -> bool {
        let buffer = host.spectrum(self.target(host));
        self.renderer.render(buffer, host.show_fifth(), surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SongDocument;
    use crate::render::tests::RecordingSurface;
    use crate::render::Layer;
    use glam::DVec2;
    use spectrum_core::{Song, SpectrumBuffer, SpectrumConfig};

    fn silent_doc() -> SongDocument {
        let mut doc = SongDocument::default();
        let target = SpectrumTarget {
            instrument: doc.current_instrument(),
            slot: None,
        };
        let zeros = vec![0; doc.song.config.control_points];
        doc.song.spectrum_mut(target).copy_from(&zeros);
        doc
    }

    fn editor_target(doc: &SongDocument) -> SpectrumTarget {
        SpectrumTarget {
            instrument: doc.current_instrument(),
            slot: None,
        }
    }

    /// Normalized position of a bin centre at amplitude `amp`.
    fn at(bin: f64, amp: f64) -> DVec2 {
        let mapper = CoordinateMapper::default();
        let x = mapper.bin_to_x(bin) / 120.0;
        let y = (1.0 + (1.0 - amp / 7.0) * 24.0) / 26.0;
        DVec2::new(x, y)
    }

    #[test]
    fn test_press_paints_one_bin() {
        let mut doc = silent_doc();
        let mut editor = SpectrumEditor::new(&doc, None);
        editor.handle_pointer(&mut doc, PointerEvent::down(at(5.0, 4.0)));
        let target = editor.target(&doc);
        assert_eq!(doc.spectrum(target).get(5), 4);
        assert_eq!(doc.spectrum(target).values().iter().filter(|&&v| v != 0).count(), 1);
        assert!(doc.prospective_change().is_some());
        assert!(doc.history().is_empty());
    }

    #[test]
    fn test_hover_does_nothing() {
        let mut doc = silent_doc();
        let mut editor = SpectrumEditor::new(&doc, None);
        editor.handle_pointer(&mut doc, PointerEvent::moved(at(5.0, 4.0), false));
        assert!(doc.prospective_change().is_none());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_pressed_move_without_down_is_ignored() {
        let mut doc = silent_doc();
        let mut editor = SpectrumEditor::new(&doc, None);
        editor.handle_pointer(&mut doc, PointerEvent::moved(at(5.0, 4.0), true));
        editor.handle_pointer(&mut doc, PointerEvent::up(at(5.0, 4.0)));
        assert!(doc.prospective_change().is_none());
        assert!(doc.history().is_empty());
    }

    #[test]
    fn test_gesture_commits_once() {
        let mut doc = silent_doc();
        let mut editor = SpectrumEditor::new(&doc, None);
        editor.handle_pointer(&mut doc, PointerEvent::down(at(2.0, 0.0)));
        editor.handle_pointer(&mut doc, PointerEvent::moved(at(6.0, 4.0), true));
        editor.handle_pointer(&mut doc, PointerEvent::up(at(6.0, 4.0)));

        assert_eq!(doc.history().len(), 1);
        assert!(doc.prospective_change().is_none());
        let change = &doc.history().entries()[0];
        assert!(change.before.iter().all(|&v| v == 0));
        assert_eq!(&change.after[2..7], &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_second_press_commits_open_gesture() {
        let mut doc = silent_doc();
        let original = doc.spectrum(editor_target(&doc)).clone();
        let mut editor = SpectrumEditor::new(&doc, None);
        editor.handle_pointer(&mut doc, PointerEvent::down(at(2.0, 3.0)));
        editor.handle_pointer(&mut doc, PointerEvent::moved(at(6.0, 4.0), true));
        editor.handle_pointer(&mut doc, PointerEvent::down(at(12.0, 5.0)));
        assert_eq!(doc.history().len(), 1);
        assert!(editor.is_dragging());
        editor.handle_pointer(&mut doc, PointerEvent::up(at(12.0, 5.0)));

        assert_eq!(doc.history().len(), 2);
        assert!(doc.prospective_change().is_none());
        let target = editor_target(&doc);
        assert_eq!(doc.spectrum(target).get(6), 4);
        assert_eq!(doc.spectrum(target).get(12), 5);

        assert!(doc.undo());
        assert_eq!(doc.spectrum(target).get(12), 0);
        assert_eq!(doc.spectrum(target).get(6), 4);
        assert!(doc.undo());
        assert_eq!(doc.spectrum(target), &original);
    }

    #[test]
    fn test_drum_slot_is_edited() {
        let mut doc = SongDocument::new(Song::default(), Default::default());
        doc.set_channel(3);
        let mut editor = SpectrumEditor::new(&doc, Some(4));
        editor.handle_pointer(&mut doc, PointerEvent::down(at(10.0, 0.0)));
        editor.handle_pointer(&mut doc, PointerEvent::up(at(10.0, 0.0)));
        let instrument = doc.song.instrument(doc.current_instrument());
        assert_eq!(instrument.spectrum(Some(4)).get(10), 0);
        assert_eq!(
            instrument.spectrum(Some(5)),
            &SpectrumBuffer::noise(SpectrumConfig::default())
        );
    }

    #[test]
    fn test_render_after_undo_redraws() {
        let mut doc = silent_doc();
        let mut editor = SpectrumEditor::new(&doc, None);
        let mut surface = RecordingSurface::default();
        editor.render(&doc, &mut surface);
        assert_eq!(surface.last_visible(Layer::Arrow), Some(false));

        editor.handle_pointer(&mut doc, PointerEvent::down(at(29.0, 7.0)));
        editor.handle_pointer(&mut doc, PointerEvent::up(at(29.0, 7.0)));
        assert!(editor.render(&doc, &mut surface));
        assert_eq!(surface.last_visible(Layer::Arrow), Some(true));

        assert!(doc.undo());
        assert!(editor.render(&doc, &mut surface));
        assert_eq!(surface.last_visible(Layer::Arrow), Some(false));
        assert!(!editor.render(&doc, &mut surface));
    }
}
