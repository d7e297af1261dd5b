pub use pipfall_core::{
    CardCategory, CardDef, Catalog, CombatRule, EconomyRule, EffectKind, EnemyRule, GameConfig,
    IntentRange, RewardRange,
};
