use crate::schema::{CardDef, Catalog, CombatRule, EconomyRule, EffectKind, EnemyRule, GameConfig};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CARDS_FILE: &str = "cards.json";

/// Load and validate the card catalog. Any structural problem here is
/// corrupt data; abort before a run starts instead of failing mid-combat.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let cards: Vec<CardDef> = load_json(path)?;
    validate_catalog(&cards).with_context(|| format!("validate {}", path.display()))?;
    Ok(Catalog::new(cards))
}

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let combat: CombatRule = load_json(&dir.join("combat.json"))?;
    let enemy: EnemyRule = load_json(&dir.join("enemy.json"))?;
    let economy: EconomyRule = load_json(&dir.join("economy.json"))?;
    let starting_deck: Vec<String> = load_json(&dir.join("deck.json"))?;
    let config = GameConfig {
        combat,
        enemy,
        economy,
        starting_deck,
    };
    validate_config(&config).with_context(|| format!("validate {}", dir.display()))?;
    Ok(config)
}

/// Load everything a run needs from one assets directory and cross-check
/// the starting deck against the catalog.
pub fn load_assets(dir: &Path) -> anyhow::Result<(GameConfig, Catalog)> {
    let config = load_game_config(dir)?;
    let catalog = load_catalog(&dir.join(CARDS_FILE))?;
    for key in &config.starting_deck {
        if !catalog.contains(key) {
            bail!("starting deck references unknown card key {key}");
        }
    }
    Ok((config, catalog))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn validate_catalog(cards: &[CardDef]) -> anyhow::Result<()> {
    if cards.is_empty() {
        bail!("catalog is empty");
    }
    let mut seen = HashSet::new();
    for card in cards {
        if card.key.is_empty() || card.name.is_empty() {
            bail!("card with empty key or name");
        }
        if !seen.insert(card.key.as_str()) {
            bail!("duplicate card key {}", card.key);
        }
        if card.effect == EffectKind::Unknown {
            bail!("card {} has an unrecognized effect", card.key);
        }
        check_targets(card)?;
    }
    Ok(())
}

/// Target counts have to match the effect's arity or the selection flow
/// would wait for dice the resolver never reads (or vice versa).
fn check_targets(card: &CardDef) -> anyhow::Result<()> {
    match card.effect {
        EffectKind::Clone => {
            if card.targets != 2 {
                bail!("card {} must target exactly 2 dice", card.key);
            }
        }
        EffectKind::Mirror
        | EffectKind::Stasis
        | EffectKind::Tinker
        | EffectKind::TinkerPlus
        | EffectKind::Reroll
        | EffectKind::RerollPlus => {
            if card.targets == 0 {
                bail!("card {} must target at least 1 die", card.key);
            }
        }
        _ => {
            if card.targets != 0 {
                bail!("card {} takes no targets", card.key);
            }
            if card.multi_select {
                bail!("card {} cannot be multi-select without targets", card.key);
            }
        }
    }
    Ok(())
}

fn validate_config(config: &GameConfig) -> anyhow::Result<()> {
    if config.combat.player_max_hp <= 0 || config.combat.enemy_max_hp <= 0 {
        bail!("hit point totals must be positive");
    }
    if config.combat.hand_limit == 0 {
        bail!("hand limit must be positive");
    }
    if config.enemy.attack_weight + config.enemy.block_weight == 0 {
        bail!("enemy intent weights are all zero");
    }
    if config.economy.starting_gold < 0 || config.economy.card_price < 0 {
        bail!("economy values cannot be negative");
    }
    if config.starting_deck.is_empty() {
        bail!("starting deck is empty");
    }
    Ok(())
}
