// src/selection.rs - Anchor-based text selection

use std::ops::Range;

/// A selection runs from a fixed anchor to the cursor, both as char indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the anchor at `at` unless a selection is already in progress
    pub fn begin(&mut self, at: usize) {
        if self.anchor.is_none() {
            self.anchor = Some(at);
        }
    }

    pub fn clear(&mut self) {
        self.anchor = None;
    }

    /// Ordered range between the anchor and `head`; `None` when nothing is selected
    pub fn range(&self, head: usize) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let range = anchor.min(head)..anchor.max(head);
        (!range.is_empty()).then_some(range)
    }
}
