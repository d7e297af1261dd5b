use crate::{CardDef, RngState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown card key: {0}")]
    UnknownCardKey(String),
}

/// The immutable card library for a run. Built once by the data crate and
/// only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub cards: Vec<CardDef>,
}

impl Catalog {
    pub fn new(cards: Vec<CardDef>) -> Self {
        Self { cards }
    }

    pub fn get(&self, key: &str) -> Result<&CardDef, CatalogError> {
        self.cards
            .iter()
            .find(|card| card.key == key)
            .ok_or_else(|| CatalogError::UnknownCardKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cards.iter().any(|card| card.key == key)
    }

    /// The enhanced counterpart of `key`, if the catalog carries one.
    pub fn upgrade_key(&self, key: &str) -> Option<String> {
        let upgraded = format!("{key}_plus");
        self.contains(&upgraded).then_some(upgraded)
    }

    /// Up to `count` distinct card keys, uniformly sampled.
    pub fn sample_keys(&self, count: usize, rng: &mut RngState) -> Vec<String> {
        let mut keys: Vec<String> = self.cards.iter().map(|card| card.key.clone()).collect();
        rng.shuffle(&mut keys);
        keys.truncate(count);
        keys
    }
}
