use spectrum_core::{DomainPoint, SpectrumBuffer};

/// Editor-local state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Domain point of the previous pointer event in this gesture.
    pub prev: DomainPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Write the segment `from → to` into `buffer`.
///
/// Every whole bin the segment spans gets the rounded value of the line
/// through both points, so fast pointer motion leaves no gaps. The bin
/// nearest `to` is then overwritten with `to`'s own rounded amplitude.
/// Bins outside the buffer are skipped, never passed to `set`.
pub fn fill_segment(buffer: &mut SpectrumBuffer, from: DomainPoint, to: DomainPoint) {
    if buffer.is_empty() {
        return;
    }
    let last_bin = buffer.len() - 1;

    if to.freq != from.freq {
        let slope = (to.amp - from.amp) / (to.freq - from.freq);
        let offset = from.amp - from.freq * slope;
        let lo = from.freq.min(to.freq).ceil().max(0.0);
        let hi = from.freq.max(to.freq).floor().min(last_bin as f64);
        if lo <= hi {
            for i in lo as usize..=hi as usize {
                buffer.set(i, (i as f64 * slope + offset).round() as i32);
            }
        }
    }

    let end = to.freq.clamp(0.0, last_bin as f64).round() as usize;
    buffer.set(end, to.amp.round() as i32);
}

/// Two-state gesture machine turning pointer motion into buffer writes.
#[derive(Debug, Default)]
pub struct DragInterpolator {
    state: GestureState,
}

impl DragInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Start a gesture at `at`. Does not write; the caller follows up with
    /// [`DragInterpolator::drag_to`] at the same point.
    pub fn begin(&mut self, at: DomainPoint) {
        self.state = GestureState::Dragging(DragSession { prev: at });
    }

    /// Interpolate from the previous point to `to`. Returns `false` (and
    /// leaves the buffer untouched) when no gesture is active.
    pub fn drag_to(&mut self, buffer: &mut SpectrumBuffer, to: DomainPoint) -> bool {
        match &mut self.state {
            GestureState::Idle => false,
            GestureState::Dragging(session) => {
                fill_segment(buffer, session.prev, to);
                session.prev = to;
                true
            }
        }
    }

    /// Finish the gesture. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spectrum_core::SpectrumConfig;

    fn buffer_32() -> SpectrumBuffer {
        SpectrumBuffer::new(SpectrumConfig::new(32, 7))
    }

    #[test]
    fn test_ramp_fills_every_bin() {
        let mut buffer = buffer_32();
        buffer.set(1, 3);
        buffer.set(7, 3);
        fill_segment(&mut buffer, DomainPoint::new(2.0, 0.0), DomainPoint::new(6.0, 7.0));
        assert_eq!(&buffer.values()[1..8], &[3, 0, 2, 4, 5, 7, 3]);
    }

    #[test]
    fn test_reverse_direction_matches() {
        let mut forward = buffer_32();
        let mut backward = buffer_32();
        fill_segment(&mut forward, DomainPoint::new(2.0, 0.0), DomainPoint::new(6.0, 7.0));
        fill_segment(&mut backward, DomainPoint::new(6.0, 7.0), DomainPoint::new(2.0, 0.0));
        assert_eq!(forward.values(), backward.values());
    }

    #[test]
    fn test_same_freq_only_writes_endpoint() {
        let mut buffer = buffer_32();
        fill_segment(&mut buffer, DomainPoint::new(4.2, 1.0), DomainPoint::new(4.2, 5.6));
        let mut expected = vec![0u8; 32];
        expected[4] = 6;
        assert_eq!(buffer.values(), expected.as_slice());
    }

    #[test]
    fn test_out_of_range_segment_is_filtered() {
        let mut buffer = buffer_32();
        fill_segment(&mut buffer, DomainPoint::new(-5.0, 7.0), DomainPoint::new(-1.0, 7.0));
        // Only the clamped endpoint bin is written.
        assert_eq!(buffer.get(0), 7);
        assert!(buffer.values()[1..].iter().all(|&v| v == 0));

        fill_segment(&mut buffer, DomainPoint::new(29.5, 20.0), DomainPoint::new(40.0, 20.0));
        assert_eq!(&buffer.values()[30..], &[7, 7]);
        assert_eq!(buffer.get(29), 0);
    }

    #[test]
    fn test_amplitudes_are_clamped() {
        let mut buffer = buffer_32();
        fill_segment(&mut buffer, DomainPoint::new(0.0, -10.0), DomainPoint::new(10.0, 30.0));
        assert!(buffer.values().iter().all(|&v| v <= 7));
        assert_eq!(buffer.get(0), 0);
        assert_eq!(buffer.get(10), 7);
    }

    #[test]
    fn test_state_machine() {
        let mut drag = DragInterpolator::new();
        let mut buffer = buffer_32();
        assert!(!drag.drag_to(&mut buffer, DomainPoint::new(3.0, 3.0)));
        assert!(buffer.values().iter().all(|&v| v == 0));

        drag.begin(DomainPoint::new(2.0, 0.0));
        assert!(drag.is_dragging());
        assert!(drag.drag_to(&mut buffer, DomainPoint::new(2.0, 0.0)));
        assert!(drag.drag_to(&mut buffer, DomainPoint::new(6.0, 7.0)));
        assert_eq!(
            drag.state(),
            GestureState::Dragging(DragSession { prev: DomainPoint::new(6.0, 7.0) })
        );
        assert!(drag.end());
        assert!(!drag.end());
        assert_eq!(&buffer.values()[2..7], &[0, 2, 4, 5, 7]);
    }
}
