use crate::{Intent, Phase, DICE_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CombatStarted { deck: usize },
    TurnStarted { turn: u32 },
    TurnEnded { turn: u32 },
    DiceRolled { values: [u8; DICE_COUNT] },
    CardsDrawn { drawn: usize, requested: usize },
    DeckReshuffled { cards: usize },
    DieInspected { index: usize, value: u8 },
    CardPlayed { key: String },
    SelectionStarted { key: String, required: u8, hint: String },
    DieToggled { index: usize, selected: bool },
    SelectionResolved { key: String },
    DieCopied { from: usize, to: usize, value: u8 },
    DieFlipped { index: usize, from: u8, to: u8 },
    DieFrozen { index: usize },
    DieTuned { index: usize, from: u8, to: u8 },
    DieRerolled { index: usize, from: u8, to: u8 },
    DamageDealt { source: String, blocked: i32, damage: i32 },
    BlockGained { source: String, amount: i32 },
    NoEffect { source: String },
    EffectFizzled { key: String },
    ResolutionFailed { key: String },
    IntentRolled { intent: Intent },
    EnemyAttacked { magnitude: u16, blocked: i32, damage: i32 },
    EnemyBlocked { magnitude: u16 },
    Victory { reward: i64, gold: i64, next: Phase },
    Defeat { turn: u32 },
    ShopOpened { offers: usize, price: i64 },
    CardBought { key: String, cost: i64, gold: i64 },
    UpgradeOpened { options: usize },
    UpgradeApplied { from: String, to: String },
    UpgradeUnavailable,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
