use crate::change::SpectrumChange;
use spectrum_core::{InstrumentRef, SpectrumBuffer, SpectrumConfig, SpectrumTarget};

/// What the spectrum editor needs from the document that owns the song.
///
/// The host exclusively owns every buffer. The editor borrows one through
/// this trait for the length of a single pointer event or render call and
/// never holds on to it.
pub trait SpectrumHost {
    fn spectrum_config(&self) -> SpectrumConfig;

    /// Instrument currently selected for editing.
    fn current_instrument(&self) -> InstrumentRef;

    fn spectrum(&self, target: SpectrumTarget) -> &SpectrumBuffer;

    fn spectrum_mut(&mut self, target: SpectrumTarget) -> &mut SpectrumBuffer;

    /// Whether fifth-interval gridlines are drawn.
    fn show_fifth(&self) -> bool;

    /// Show a tentative change live without adding it to history.
    fn preview_change(&mut self, change: SpectrumChange);

    /// Add a finished change to the undo history.
    fn commit_change(&mut self, change: SpectrumChange);
}
