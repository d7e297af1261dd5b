use crate::Catalog;
use serde::{Deserialize, Serialize};

/// Run-lifetime progression: the deck blueprint and the gold balance.
/// Survives across combats; combats are rebuilt from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub deck: Vec<String>,
    pub gold: i64,
}

impl Profile {
    pub fn new(deck: Vec<String>, gold: i64) -> Self {
        Self { deck, gold }
    }

    pub fn add_card(&mut self, key: impl Into<String>) {
        self.deck.push(key.into());
    }

    /// Distinct blueprint keys that have an enhanced catalog counterpart,
    /// in first-appearance order.
    pub fn upgradable_keys(&self, catalog: &Catalog) -> Vec<String> {
        let mut keys = Vec::new();
        for key in &self.deck {
            if catalog.upgrade_key(key).is_some() && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }

    /// Replace the first blueprint entry equal to `from` with `to`.
    pub fn replace_first(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.deck.iter().position(|key| key == from) {
            Some(index) => {
                self.deck[index] = to.into();
                true
            }
            None => false,
        }
    }
}
