use crate::change::SpectrumChange;

/// Undo/redo stacks of committed changes.
#[derive(Debug, Default)]
pub struct ChangeHistory {
    undo: Vec<SpectrumChange>,
    redo: Vec<SpectrumChange>,
}

impl ChangeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a committed change. Anything previously undone is forgotten.
    pub fn record(&mut self, change: SpectrumChange) {
        self.undo.push(change);
        self.redo.clear();
    }

    /// Move the newest change to the redo stack and return it.
    pub fn undo(&mut self) -> Option<&SpectrumChange> {
        let change = self.undo.pop()?;
        self.redo.push(change);
        self.redo.last()
    }

    /// Move the newest undone change back and return it.
    pub fn redo(&mut self) -> Option<&SpectrumChange> {
        let change = self.redo.pop()?;
        self.undo.push(change);
        self.undo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undoable entries.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn entries(&self) -> &[SpectrumChange] {
        &self.undo
    }
}
