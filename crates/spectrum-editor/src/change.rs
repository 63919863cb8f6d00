use crate::host::SpectrumHost;
use serde::{Deserialize, Serialize};
use spectrum_core::{Song, SpectrumTarget};

/// One edit to a spectrum: which buffer, and its values before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectrumChange {
    pub target: SpectrumTarget,
    pub before: Vec<u8>,
    pub after: Vec<u8>,
}

impl SpectrumChange {
    pub fn new(target: SpectrumTarget, before: Vec<u8>, after: Vec<u8>) -> Self {
        Self { target, before, after }
    }

    /// Whether applying the change leaves the buffer as it was.
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }

    /// Write the post-edit values into `song`.
    pub fn apply(&self, song: &mut Song) {
        song.spectrum_mut(self.target).copy_from(&self.after);
    }

    /// Write the pre-edit values back into `song`.
    pub fn revert(&self, song: &mut Song) {
        song.spectrum_mut(self.target).copy_from(&self.before);
    }
}

/// Tracks the change in flight during a gesture.
///
/// Each pointer move replaces the in-flight change and previews it on the
/// host; gesture end hands the latest one to the host's history, so one
/// gesture is one undo step no matter how many moves it had.
#[derive(Debug, Default)]
pub struct ChangeEmitter {
    in_flight: Option<SpectrumChange>,
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> Option<&SpectrumChange> {
        self.in_flight.as_ref()
    }

    pub fn preview<H: SpectrumHost + ?Sized>(&mut self, host: &mut H, change: SpectrumChange) {
        log::trace!("previewing spectrum change on {:?}", change.target);
        host.preview_change(change.clone());
        self.in_flight = Some(change);
    }

    /// Commit the in-flight change. Returns `false` if there was none.
    pub fn commit<H: SpectrumHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.in_flight.take() {
            Some(change) => {
                log::debug!("committing spectrum change on {:?}", change.target);
                host.commit_change(change);
                true
            }
            None => {
                log::warn!("gesture ended with no spectrum change to commit");
                false
            }
        }
    }
}
