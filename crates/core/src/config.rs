use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatRule {
    pub player_max_hp: i32,
    pub enemy_max_hp: i32,
    pub hand_limit: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntentRange {
    pub min: u16,
    pub max: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRule {
    pub attack_weight: u32,
    pub block_weight: u32,
    pub attack: IntentRange,
    pub block: IntentRange,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyRule {
    pub starting_gold: i64,
    pub reward: RewardRange,
    pub card_price: i64,
    pub shop_slots: usize,
    pub upgrade_slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub combat: CombatRule,
    pub enemy: EnemyRule,
    pub economy: EconomyRule,
    pub starting_deck: Vec<String>,
}
