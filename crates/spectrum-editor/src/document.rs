use crate::change::SpectrumChange;
use crate::history::ChangeHistory;
use crate::host::SpectrumHost;
use crate::prefs::Preferences;
use spectrum_core::{InstrumentRef, Song, SpectrumBuffer, SpectrumConfig, SpectrumTarget};

/// A song being edited: current selection, preferences and undo history.
#[derive(Debug)]
pub struct SongDocument {
    pub song: Song,
    pub prefs: Preferences,
    channel: usize,
    /// Selected instrument index, one per channel.
    selected_instruments: Vec<usize>,
    history: ChangeHistory,
    prospective: Option<SpectrumChange>,
}

impl SongDocument {
    pub fn new(song: Song, prefs: Preferences) -> Self {
        let selected_instruments = vec![0; song.channels.len()];
        Self {
            song,
            prefs,
            channel: 0,
            selected_instruments,
            history: ChangeHistory::new(),
            prospective: None,
        }
    }

    pub fn channel(&self) -> usize {
        self.channel
    }

    pub fn set_channel(&mut self, channel: usize) {
        self.channel = channel;
    }

    pub fn select_instrument(&mut self, instrument: usize) {
        self.selected_instruments[self.channel] = instrument;
    }

    pub fn history(&self) -> &ChangeHistory {
        &self.history
    }

    /// The change currently shown live, if a gesture is in progress.
    pub fn prospective_change(&self) -> Option<&SpectrumChange> {
        self.prospective.as_ref()
    }

    /// Revert the newest committed change. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(change) => {
                change.revert(&mut self.song);
                true
            }
            None => false,
        }
    }

    /// Reapply the newest undone change. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(change) => {
                change.apply(&mut self.song);
                true
            }
            None => false,
        }
    }
}

impl Default for SongDocument {
    fn default() -> Self {
        Self::new(Song::default(), Preferences::default())
    }
}

impl SpectrumHost for SongDocument {
    fn spectrum_config(&self) -> SpectrumConfig {
        self.song.config
    }

    fn current_instrument(&self) -> InstrumentRef {
        InstrumentRef::new(self.channel, self.selected_instruments[self.channel])
    }

    fn spectrum(&self, target: SpectrumTarget) -> &SpectrumBuffer {
        self.song.spectrum(target)
    }

    fn spectrum_mut(&mut self, target: SpectrumTarget) -> &mut SpectrumBuffer {
        self.song.spectrum_mut(target)
    }

    fn show_fifth(&self) -> bool {
        self.prefs.show_fifth
    }

    fn preview_change(&mut self, change: SpectrumChange) {
        // Idempotent for drag edits, which already wrote the buffer.
        change.apply(&mut self.song);
        self.prospective = Some(change);
    }

    fn commit_change(&mut self, change: SpectrumChange) {
        change.apply(&mut self.song);
        self.prospective = None;
        self.history.record(change);
    }
}
