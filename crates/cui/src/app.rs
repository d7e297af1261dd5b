use anyhow::{Context, Result};
use pipfall_core::{Action, CardDef, Event, EventBus, Intent, Phase, RunState};
use pipfall_data::load_assets;
use std::collections::VecDeque;
use std::path::Path;

pub const DEFAULT_RUN_SEED: u64 = 0xD1CE;
const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub run: RunState,
    pub events: EventBus,
    pub seed: u64,
    pub hand_cursor: usize,
    pub offer_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(assets: &Path, seed: u64) -> Result<Self> {
        let (config, catalog) = load_assets(assets)
            .with_context(|| format!("load assets from {}", assets.display()))?;
        let run = RunState::new(config, catalog, seed)
            .map_err(|err| anyhow::anyhow!(err.to_string()))
            .context("start run")?;
        let mut app = Self {
            run,
            events: EventBus::default(),
            seed,
            hand_cursor: 0,
            offer_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        };
        app.run
            .reset_combat(&mut app.events)
            .map_err(|err| anyhow::anyhow!(err.to_string()))
            .context("start combat")?;
        app.flush_events();
        app.normalize_cursors();
        Ok(app)
    }

    fn apply(&mut self, action: Action) {
        match self.run.perform(action, &mut self.events) {
            Ok(()) => self.status_line.clear(),
            Err(err) => self.status_line = format!("error: {err}"),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn click_die(&mut self, index: usize) {
        self.apply(Action::DieClicked { index });
    }

    pub fn confirm_selection(&mut self) {
        self.apply(Action::ConfirmSelection);
    }

    pub fn end_turn(&mut self) {
        self.apply(Action::EndTurn);
    }

    pub fn new_battle(&mut self) {
        self.apply(Action::ResetCombat);
    }

    pub fn continue_run(&mut self) {
        self.apply(Action::Continue);
    }

    /// Enter acts on whatever the current phase puts under the cursor.
    pub fn activate_primary(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        match self.run.phase {
            Phase::Combat => self.play_cursor_card(),
            Phase::Shop => self.apply(Action::Buy {
                index: self.offer_cursor,
            }),
            Phase::Upgrade => self.apply(Action::ApplyUpgrade {
                index: self.offer_cursor,
            }),
        }
    }

    fn play_cursor_card(&mut self) {
        let Some(card) = self.run.combat.hand.get(self.hand_cursor) else {
            self.status_line = "no card under the cursor".to_string();
            return;
        };
        let instance = card.id;
        self.apply(Action::PlayCard { instance });
    }

    pub fn move_cursor(&mut self, down: bool) {
        match self.run.phase {
            Phase::Combat => {
                move_index(&mut self.hand_cursor, self.run.combat.hand.len(), down);
            }
            Phase::Shop | Phase::Upgrade => {
                let offer_len = self.offer_rows().len();
                move_index(&mut self.offer_cursor, offer_len, down);
            }
        }
    }

    pub fn normalize_cursors(&mut self) {
        let hand_len = self.run.combat.hand.len();
        if self.hand_cursor >= hand_len {
            self.hand_cursor = hand_len.saturating_sub(1);
        }
        let offer_len = self.offer_rows().len();
        if self.offer_cursor >= offer_len {
            self.offer_cursor = offer_len.saturating_sub(1);
        }
    }

    pub fn card_def(&self, key: &str) -> Option<&CardDef> {
        self.run.catalog.get(key).ok()
    }

    pub fn card_name(&self, key: &str) -> String {
        self.card_def(key)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| key.to_string())
    }

    /// Labels for the offer pane, shop or upgrade depending on phase.
    pub fn offer_rows(&self) -> Vec<String> {
        match self.run.phase {
            Phase::Shop => {
                let Some(shop) = self.run.shop.as_ref() else {
                    return Vec::new();
                };
                shop.offers
                    .iter()
                    .map(|offer| {
                        let marker = if offer.sold { "sold" } else { "for sale" };
                        format!(
                            "{} ({} gold, {marker})",
                            self.card_name(&offer.key),
                            offer.price
                        )
                    })
                    .collect()
            }
            Phase::Upgrade => {
                let Some(upgrade) = self.run.upgrade.as_ref() else {
                    return Vec::new();
                };
                upgrade
                    .options
                    .iter()
                    .map(|option| {
                        format!(
                            "{} -> {}",
                            self.card_name(&option.base_key),
                            self.card_name(&option.upgraded_key)
                        )
                    })
                    .collect()
            }
            Phase::Combat => Vec::new(),
        }
    }

    pub fn selected_dice(&self) -> Vec<usize> {
        self.run
            .combat
            .pending
            .as_ref()
            .map(|pending| pending.selected.clone())
            .unwrap_or_default()
    }

    pub fn pending_summary(&self) -> Option<String> {
        let pending = self.run.combat.pending.as_ref()?;
        let def = self.card_def(&pending.card.key)?;
        Some(format!("{}: {}", def.name, def.selection_hint()))
    }

    pub fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            let line = self.describe_event(&event);
            if self.event_log.len() >= MAX_EVENT_LOG {
                let _ = self.event_log.pop_front();
            }
            self.event_log.push_back(line);
        }
    }

    fn describe_event(&self, event: &Event) -> String {
        match event {
            Event::CombatStarted { deck } => {
                format!("A new battle begins with {deck} cards in the deck.")
            }
            Event::TurnStarted { turn } => format!("Turn {turn} begins."),
            Event::DiceRolled { values } => format!("Dice: {values:?}"),
            Event::CardsDrawn { drawn, requested } => {
                if drawn < requested {
                    format!("Drew {drawn} of {requested} cards; the piles ran dry.")
                } else {
                    format!("Drew {drawn} cards.")
                }
            }
            Event::DeckReshuffled { cards } => {
                format!("Shuffled {cards} discards back into the deck.")
            }
            Event::DieInspected { index, value } => format!("Die {}: {value}", index + 1),
            Event::CardPlayed { key } => format!("{} played!", self.card_name(key)),
            Event::SelectionStarted { key, hint, .. } => {
                format!("Playing {}. {hint}", self.card_name(key))
            }
            Event::DieToggled { index, selected } => {
                if *selected {
                    format!("Selected die {}.", index + 1)
                } else {
                    format!("Deselected die {}.", index + 1)
                }
            }
            Event::SelectionResolved { key } => format!("{} resolved!", self.card_name(key)),
            Event::DieCopied { from, to, value } => {
                format!("Copied die {} value ({value}) to die {}.", from + 1, to + 1)
            }
            Event::DieFlipped { index, from, to } => {
                format!("Die {} flipped from {from} to {to}.", index + 1)
            }
            Event::DieFrozen { index } => format!("Locked die {} until next turn.", index + 1),
            Event::DieTuned { index, from, to } => {
                format!("Die {} tuned from {from} to {to}.", index + 1)
            }
            Event::DieRerolled { index, from, to } => {
                format!("Die {} rerolled from {from} to {to}.", index + 1)
            }
            Event::DamageDealt {
                source,
                blocked,
                damage,
            } => format!("{source}! Removed {blocked} block and dealt {damage} damage."),
            Event::BlockGained { source, amount } => format!("{source}! Gained {amount} block."),
            Event::NoEffect { source } => format!("{source}! The attack had no effect."),
            Event::EffectFizzled { key } => {
                format!("{} fizzled without targets.", self.card_name(key))
            }
            Event::ResolutionFailed { key } => {
                format!("The card effect failed to resolve ({key}).")
            }
            Event::IntentRolled { intent } => match intent {
                Intent::Attack(value) => format!("Enemy intent: Attack {value}."),
                Intent::Block(value) => format!("Enemy intent: Block {value}."),
            },
            Event::EnemyAttacked {
                magnitude,
                blocked,
                damage,
            } => format!("Enemy attacks for {magnitude}! Blocked {blocked}, took {damage} damage."),
            Event::EnemyBlocked { magnitude } => format!("Enemy gained {magnitude} block."),
            Event::TurnEnded { turn } => format!("Turn {turn} ends."),
            Event::Victory { reward, gold, next } => {
                let destination = match next {
                    Phase::Shop => "shop",
                    Phase::Upgrade => "upgrade chamber",
                    Phase::Combat => "battle",
                };
                format!("Victory! Gained {reward} gold ({gold} total). Heading to the {destination}.")
            }
            Event::Defeat { .. } => "Defeated. Press n to try again.".to_string(),
            Event::ShopOpened { offers, price } => {
                format!("The shop offers {offers} cards at {price} gold each.")
            }
            Event::CardBought { key, cost, gold } => format!(
                "Added {} to your deck for {cost} gold ({gold} left).",
                self.card_name(key)
            ),
            Event::UpgradeOpened { options } => {
                format!("{options} cards can be enhanced. Pick one.")
            }
            Event::UpgradeApplied { from, to } => format!(
                "Upgraded {} into {}!",
                self.card_name(from),
                self.card_name(to)
            ),
            Event::UpgradeUnavailable => {
                "No cards can be enhanced right now. Continue to the next battle.".to_string()
            }
        }
    }
}

fn move_index(value: &mut usize, len: usize, down: bool) {
    if len == 0 {
        *value = 0;
        return;
    }
    if down {
        *value = (*value + 1) % len;
    } else if *value == 0 {
        *value = len - 1;
    } else {
        *value -= 1;
    }
}
