use crate::{CardInstance, Deck, DiceSet, PendingSelection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Combat,
    Shop,
    Upgrade,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intent {
    Attack(u16),
    Block(u16),
}

impl Intent {
    pub fn magnitude(self) -> u16 {
        match self {
            Intent::Attack(value) | Intent::Block(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// Everything one encounter owns. Rebuilt from the deck blueprint when a
/// new battle starts.
#[derive(Debug, Clone)]
pub struct CombatState {
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub player_block: i32,
    pub enemy_hp: i32,
    pub enemy_max_hp: i32,
    pub enemy_block: i32,
    pub intent: Intent,
    pub turn: u32,
    pub outcome: Option<CombatOutcome>,
    pub dice: DiceSet,
    pub deck: Deck,
    pub hand: Vec<CardInstance>,
    pub pending: Option<PendingSelection>,
}

impl CombatState {
    pub fn new(player_max_hp: i32, enemy_max_hp: i32) -> Self {
        Self {
            player_hp: player_max_hp,
            player_max_hp,
            player_block: 0,
            enemy_hp: enemy_max_hp,
            enemy_max_hp,
            enemy_block: 0,
            intent: Intent::Attack(0),
            turn: 1,
            outcome: None,
            dice: DiceSet::default(),
            deck: Deck::default(),
            hand: Vec::new(),
            pending: None,
        }
    }

    pub fn over(&self) -> bool {
        self.outcome.is_some()
    }
}
