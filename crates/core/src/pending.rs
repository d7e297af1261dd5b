use crate::CardInstance;
use serde::{Deserialize, Serialize};

/// A played card waiting for die targets. At most one exists at a time;
/// it is destroyed when the effect resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSelection {
    pub card: CardInstance,
    pub required: u8,
    pub multi_select: bool,
    pub selected: Vec<usize>,
}

impl PendingSelection {
    pub fn new(card: CardInstance, required: u8, multi_select: bool) -> Self {
        Self {
            card,
            required,
            multi_select,
            selected: Vec::new(),
        }
    }

    /// Record a die click. Multi-select toggles membership; single-select
    /// appends. Returns whether the die is selected afterwards.
    pub fn record(&mut self, index: usize) -> bool {
        if self.multi_select {
            if let Some(position) = self.selected.iter().position(|&idx| idx == index) {
                self.selected.remove(position);
                return false;
            }
        }
        self.selected.push(index);
        true
    }

    /// Single-select resolves as soon as the count is reached.
    pub fn is_complete(&self) -> bool {
        self.selected.len() >= self.required as usize
    }

    /// Multi-select confirm gate; a required count of zero means at least
    /// one die.
    pub fn has_minimum(&self) -> bool {
        if self.required == 0 {
            return !self.selected.is_empty();
        }
        self.selected.len() >= self.required as usize
    }
}
