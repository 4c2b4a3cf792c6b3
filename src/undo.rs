use crate::pile::PileId;

/// A transfer of the top `count` cards from `source` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: PileId,
    pub destination: PileId,
    pub count: usize,
}

impl MoveRecord {
    /// The transfer that puts the cards back.
    pub fn inverse(self) -> MoveRecord {
        MoveRecord {
            source: self.destination,
            destination: self.source,
            count: self.count,
        }
    }
}

/// Single-level undo: holds at most the most recent move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoLog {
    pending: Option<MoveRecord>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `record`, replacing whatever was pending.
    pub fn record(&mut self, record: MoveRecord) {
        self.pending = Some(record);
    }

    pub fn pending(&self) -> Option<MoveRecord> {
        self.pending
    }

    pub fn take(&mut self) -> Option<MoveRecord> {
        self.pending.take()
    }
}
