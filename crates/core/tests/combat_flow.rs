use pipfall_core::{
    Action, CardCategory, CardDef, Catalog, CombatOutcome, CombatRule, EconomyRule, EffectKind,
    EnemyRule, Event, EventBus, GameConfig, Intent, IntentRange, Phase, RewardRange, RunError,
    RunState,
};

fn def(key: &str, effect: EffectKind, targets: u8, multi_select: bool) -> CardDef {
    CardDef {
        key: key.to_string(),
        name: key.to_string(),
        effect,
        description: String::new(),
        targets,
        category: CardCategory::Utility,
        multi_select,
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        def("strike", EffectKind::Strike, 0, false),
        def("fortify", EffectKind::Fortify, 0, false),
        def("clone", EffectKind::Clone, 2, false),
        def("mirror", EffectKind::Mirror, 1, true),
        def("stasis", EffectKind::Stasis, 1, true),
        def("tinker", EffectKind::Tinker, 1, true),
        def("tinker_plus", EffectKind::TinkerPlus, 1, true),
    ])
}

fn config(deck: &[&str]) -> GameConfig {
    GameConfig {
        combat: CombatRule {
            player_max_hp: 40,
            enemy_max_hp: 50,
            hand_limit: 4,
        },
        enemy: EnemyRule {
            attack_weight: 7,
            block_weight: 3,
            attack: IntentRange { min: 6, max: 10 },
            block: IntentRange { min: 4, max: 8 },
        },
        economy: EconomyRule {
            starting_gold: 10,
            reward: RewardRange { min: 5, max: 8 },
            card_price: 5,
            shop_slots: 3,
            upgrade_slots: 3,
        },
        starting_deck: deck.iter().map(|key| key.to_string()).collect(),
    }
}

fn new_run(deck: &[&str], seed: u64) -> (RunState, EventBus) {
    let mut events = EventBus::default();
    let mut run = RunState::new(config(deck), catalog(), seed).expect("new run");
    run.reset_combat(&mut events).expect("reset combat");
    (run, events)
}

fn hand_instance(run: &RunState, position: usize) -> u32 {
    run.combat.hand[position].id
}

#[test]
fn reset_combat_builds_a_full_battle() {
    let deck = ["strike"; 12];
    let (run, _) = new_run(&deck, 3);
    assert_eq!(run.phase, Phase::Combat);
    assert_eq!(run.combat.turn, 1);
    assert_eq!(run.combat.player_hp, 40);
    assert_eq!(run.combat.enemy_hp, 50);
    assert_eq!(run.combat.hand.len(), 4);
    assert_eq!(run.combat.deck.draw.len(), 8);
    assert!(run.combat.deck.discard.is_empty());
    for die in &run.combat.dice.dice {
        assert!((1..=6).contains(&die.value));
        assert_eq!(die.frozen_turns, 0);
    }
    match run.combat.intent {
        Intent::Attack(value) => assert!((6..=10).contains(&value)),
        Intent::Block(value) => assert!((4..=8).contains(&value)),
    }
}

#[test]
fn card_instances_are_conserved_through_a_turn() {
    let deck = ["strike"; 12];
    let (mut run, mut events) = new_run(&deck, 11);
    let total = |run: &RunState| {
        run.combat.deck.draw.len() + run.combat.deck.discard.len() + run.combat.hand.len()
    };
    assert_eq!(total(&run), 12);

    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("play strike");
    assert_eq!(total(&run), 12);

    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(total(&run), 12);

    let mut ids: Vec<u32> = run
        .combat
        .deck
        .draw
        .iter()
        .chain(run.combat.deck.discard.iter())
        .chain(run.combat.hand.iter())
        .map(|card| card.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[test]
fn die_click_without_pending_is_an_inspection() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 5);
    let before = run.combat.dice.values();
    run.perform(Action::DieClicked { index: 2 }, &mut events)
        .expect("inspect die");
    assert_eq!(run.combat.dice.values(), before);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::DieInspected { index: 2, .. })));
}

#[test]
fn single_select_card_resolves_once_count_is_met() {
    let deck = ["clone"; 8];
    let (mut run, mut events) = new_run(&deck, 9);
    run.combat.dice.dice[0].value = 6;
    run.combat.dice.dice[3].value = 1;

    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("play clone");
    assert!(run.combat.pending.is_some());
    assert_eq!(run.combat.hand.len(), 3);

    run.perform(Action::DieClicked { index: 0 }, &mut events)
        .expect("pick source");
    assert!(run.combat.pending.is_some());
    run.perform(Action::DieClicked { index: 3 }, &mut events)
        .expect("pick destination");
    assert!(run.combat.pending.is_none());
    assert_eq!(run.combat.dice.dice[3].value, 6);
    assert_eq!(run.combat.deck.discard.len(), 1);
}

#[test]
fn multi_select_toggles_and_requires_confirm() {
    let deck = ["mirror"; 8];
    let (mut run, mut events) = new_run(&deck, 13);
    for (die, value) in run.combat.dice.dice.iter_mut().zip([1, 2, 3, 4, 5]) {
        die.value = value;
    }

    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("play mirror");

    run.perform(Action::DieClicked { index: 0 }, &mut events)
        .expect("select");
    run.perform(Action::DieClicked { index: 0 }, &mut events)
        .expect("deselect");
    let err = run
        .perform(Action::ConfirmSelection, &mut events)
        .expect_err("empty selection cannot confirm");
    assert!(matches!(err, RunError::SelectionIncomplete));

    run.perform(Action::DieClicked { index: 1 }, &mut events)
        .expect("select again");
    run.perform(Action::ConfirmSelection, &mut events)
        .expect("confirm");
    assert!(run.combat.pending.is_none());
    assert_eq!(run.combat.dice.values(), [1, 5, 3, 4, 5]);
}

#[test]
fn pending_selection_blocks_other_plays_and_end_turn() {
    let deck = ["stasis"; 8];
    let (mut run, mut events) = new_run(&deck, 17);
    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("play stasis");

    let err = run
        .perform(Action::EndTurn, &mut events)
        .expect_err("end turn must wait");
    assert!(matches!(err, RunError::SelectionPending));

    let other = hand_instance(&run, 0);
    let err = run
        .perform(Action::PlayCard { instance: other }, &mut events)
        .expect_err("no second card while pending");
    assert!(matches!(err, RunError::SelectionPending));
}

#[test]
fn enemy_attack_consumes_block_by_full_magnitude() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 19);
    run.combat.player_block = 4;
    run.combat.intent = Intent::Attack(6);
    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.player_block, 0);
    assert_eq!(run.combat.player_hp, 38);
}

#[test]
fn overblocked_attack_still_spends_its_magnitude() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 19);
    run.combat.player_block = 10;
    run.combat.intent = Intent::Attack(6);
    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.player_block, 4);
    assert_eq!(run.combat.player_hp, 40);
}

#[test]
fn enemy_block_intent_raises_enemy_block() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 23);
    run.combat.intent = Intent::Block(5);
    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.enemy_block, 5);
    assert_eq!(run.combat.player_hp, 40);
}

#[test]
fn lethal_attack_defeats_and_locks_the_battle() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 29);
    run.combat.player_hp = 5;
    run.combat.player_block = 0;
    run.combat.intent = Intent::Attack(6);
    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.outcome, Some(CombatOutcome::Defeat));

    for action in [
        Action::EndTurn,
        Action::DieClicked { index: 0 },
        Action::ConfirmSelection,
    ] {
        let err = run.perform(action, &mut events).expect_err("terminal");
        assert!(matches!(err, RunError::GameOver));
    }

    run.perform(Action::ResetCombat, &mut events)
        .expect("new battle");
    assert_eq!(run.combat.outcome, None);
    assert_eq!(run.combat.player_hp, 40);
}

#[test]
fn frozen_die_survives_exactly_one_roll() {
    let deck = ["strike"; 20];
    let (mut run, mut events) = new_run(&deck, 31);
    run.combat.dice.dice[0].value = 6;
    run.combat.dice.dice[0].frozen_turns = 1;
    run.combat.intent = Intent::Block(4);

    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.dice.dice[0].value, 6);
    assert_eq!(run.combat.dice.dice[0].frozen_turns, 0);
}

#[test]
fn draw_shortfall_when_both_piles_empty() {
    let deck = ["strike", "strike"];
    let (run, mut events) = new_run(&deck, 37);
    assert_eq!(run.combat.hand.len(), 2);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.iter().any(|event| matches!(
        event,
        Event::CardsDrawn { drawn: 2, requested: 4 }
    )));
}

#[test]
fn discard_pile_reshuffles_into_draws() {
    let deck = ["strike"; 4];
    let (mut run, mut events) = new_run(&deck, 41);
    assert_eq!(run.combat.hand.len(), 4);
    assert!(run.combat.deck.draw.is_empty());
    run.combat.intent = Intent::Block(4);

    run.perform(Action::EndTurn, &mut events).expect("end turn");
    assert_eq!(run.combat.hand.len(), 4);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::DeckReshuffled { cards: 4 })));
}

#[test]
fn victory_awards_gold_once_and_leaves_combat() {
    let deck = ["strike"; 8];
    let (mut run, mut events) = new_run(&deck, 43);
    run.combat.enemy_hp = 1;
    let gold_before = run.profile.gold;

    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("lethal strike");
    assert_eq!(run.combat.outcome, Some(CombatOutcome::Victory));
    assert!(matches!(run.phase, Phase::Shop | Phase::Upgrade));
    let reward = run.profile.gold - gold_before;
    assert!((5..=8).contains(&reward));

    let gold_after = run.profile.gold;
    let err = run
        .perform(Action::EndTurn, &mut events)
        .expect_err("combat is over");
    assert!(matches!(err, RunError::InvalidPhase(_)));
    assert_eq!(run.profile.gold, gold_after);
}

#[test]
fn confirm_below_minimum_is_refused() {
    let deck = ["mirror"; 8];
    let (mut run, mut events) = new_run(&deck, 47);
    let before = run.combat.dice.values();
    let instance = hand_instance(&run, 0);
    run.perform(Action::PlayCard { instance }, &mut events)
        .expect("play mirror");
    run.perform(Action::DieClicked { index: 0 }, &mut events)
        .expect("select");
    run.perform(Action::DieClicked { index: 0 }, &mut events)
        .expect("deselect");
    assert!(run.combat.pending.as_ref().is_some_and(|p| p.selected.is_empty()));
    let err = run
        .perform(Action::ConfirmSelection, &mut events)
        .expect_err("below minimum");
    assert!(matches!(err, RunError::SelectionIncomplete));
    assert_eq!(run.combat.dice.values(), before);
}
