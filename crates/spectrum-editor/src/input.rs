use glam::DVec2;
use spectrum_core::{CoordinateMapper, DomainPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event.
///
/// `position` is normalized to the editor container: `(0, 0)` is the top
/// left corner and `(1, 1)` the bottom right. `is_down` reports whether the
/// pointer is currently pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: DVec2,
    pub is_down: bool,
}

impl PointerEvent {
    pub fn down(position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position,
            is_down: true,
        }
    }

    pub fn moved(position: DVec2, is_down: bool) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            is_down,
        }
    }

    pub fn up(position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position,
            is_down: false,
        }
    }

    pub fn cancel(position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position,
            is_down: false,
        }
    }
}

/// What the editor should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    Begin(DomainPoint),
    Drag(DomainPoint),
    End,
    Ignore,
}

/// Maps raw pointer events onto gesture steps.
#[derive(Debug, Clone, Copy)]
pub struct PointerInputController {
    mapper: CoordinateMapper,
}

impl PointerInputController {
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self { mapper }
    }

    /// Domain point under a normalized container position.
    pub fn locate(&self, position: DVec2) -> DomainPoint {
        self.mapper.to_domain(self.mapper.denormalize(position))
    }

    pub fn route(&self, event: &PointerEvent) -> GestureStep {
        match event.kind {
            PointerEventKind::Down => GestureStep::Begin(self.locate(event.position)),
            PointerEventKind::Move if event.is_down => GestureStep::Drag(self.locate(event.position)),
            // Hover.
            PointerEventKind::Move => GestureStep::Ignore,
            PointerEventKind::Up | PointerEventKind::Cancel => GestureStep::End,
        }
    }
}
