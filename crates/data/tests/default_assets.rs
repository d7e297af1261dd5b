use pipfall_core::{EventBus, RunState};
use pipfall_data::load_assets;
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn bundled_assets_load_and_cross_validate() {
    let (config, catalog) = load_assets(&assets_root()).expect("load bundled assets");
    assert_eq!(config.combat.player_max_hp, 40);
    assert_eq!(config.combat.enemy_max_hp, 50);
    assert_eq!(config.combat.hand_limit, 4);
    assert_eq!(config.economy.card_price, 5);
    assert_eq!(config.starting_deck.len(), 39);
    assert_eq!(catalog.cards.len(), 20);
    for key in &config.starting_deck {
        assert!(catalog.contains(key), "starting deck key {key} missing");
    }
}

#[test]
fn every_plus_card_pairs_with_a_base_card() {
    let (_, catalog) = load_assets(&assets_root()).expect("load bundled assets");
    for card in &catalog.cards {
        if let Some(base_key) = card.key.strip_suffix("_plus") {
            assert!(
                catalog.contains(base_key),
                "{} has no base counterpart",
                card.key
            );
            assert_eq!(
                catalog.upgrade_key(base_key).as_deref(),
                Some(card.key.as_str())
            );
        }
    }
}

#[test]
fn upgradable_bases_exist_in_the_bundled_catalog() {
    let (_, catalog) = load_assets(&assets_root()).expect("load bundled assets");
    let upgradable: Vec<&str> = catalog
        .cards
        .iter()
        .filter(|card| catalog.upgrade_key(&card.key).is_some())
        .map(|card| card.key.as_str())
        .collect();
    assert!(upgradable.contains(&"tinker"));
    assert!(upgradable.contains(&"strike"));
    assert!(upgradable.contains(&"double_guard"));
}

#[test]
fn a_run_boots_from_the_bundled_assets() {
    let (config, catalog) = load_assets(&assets_root()).expect("load bundled assets");
    let mut run = RunState::new(config, catalog, 99).expect("start run");
    let mut events = EventBus::default();
    run.reset_combat(&mut events).expect("start combat");
    assert_eq!(run.combat.hand.len(), 4);
    assert_eq!(run.profile.gold, 10);
    assert_eq!(run.profile.deck.len(), 39);
}
