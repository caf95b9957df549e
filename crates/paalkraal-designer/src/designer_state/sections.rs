use super::DesignerState;
use crate::segment::{FenceSegment, SegmentKind};
use uuid::Uuid;

impl DesignerState {
    /// Appends a section using the pending turn and returns its id.
    pub fn append(&mut self, kind: SegmentKind) -> Uuid {
        let id = self.design.append(kind, self.pending_turn).id();
        self.notify();
        id
    }

    /// Removes the last section, if any.
    pub fn remove_last(&mut self) -> Option<FenceSegment> {
        let removed = self.design.remove_last();
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    /// Clears every section and the pending turn. Settings are kept.
    pub fn reset(&mut self) {
        self.design.reset();
        self.pending_turn = 0.0;
        self.notify();
    }
}
