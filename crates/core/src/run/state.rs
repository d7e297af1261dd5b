use super::{RunError, RunState};
use crate::{
    CardInstance, Catalog, CombatState, Event, EventBus, GameConfig, Intent, Phase, Profile,
    RngState,
};

impl RunState {
    pub fn new(config: GameConfig, catalog: Catalog, seed: u64) -> Result<Self, RunError> {
        // A blueprint entry without a catalog card is corrupt data; refuse
        // to start rather than fail mid-combat.
        for key in &config.starting_deck {
            catalog.get(key)?;
        }
        let profile = Profile::new(config.starting_deck.clone(), config.economy.starting_gold);
        let combat = CombatState::new(config.combat.player_max_hp, config.combat.enemy_max_hp);
        Ok(Self {
            config,
            catalog,
            profile,
            rng: RngState::from_seed(seed),
            phase: Phase::Combat,
            combat,
            shop: None,
            upgrade: None,
            next_card_id: 1,
        })
    }

    /// Start a fresh battle from the current blueprint. Only valid while
    /// the combat flow owns the turn; shop and upgrade leave via `Continue`.
    pub fn reset_combat(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Combat)?;
        self.rebuild_combat(events)
    }

    pub(super) fn rebuild_combat(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        let mut combat =
            CombatState::new(self.config.combat.player_max_hp, self.config.combat.enemy_max_hp);
        let mut draw = Vec::with_capacity(self.profile.deck.len());
        for key in &self.profile.deck {
            self.catalog.get(key)?;
            let id = self.next_card_id;
            self.next_card_id = self.next_card_id.saturating_add(1);
            draw.push(CardInstance::new(id, key.clone()));
        }
        combat.deck.draw = draw;
        combat.deck.shuffle(&mut self.rng);
        combat.dice.roll_all(&mut self.rng);
        self.combat = combat;
        events.push(Event::CombatStarted {
            deck: self.combat.deck.total(),
        });
        events.push(Event::DiceRolled {
            values: self.combat.dice.values(),
        });
        self.draw_cards(self.config.combat.hand_limit, events);
        self.roll_intent(events);
        Ok(())
    }

    /// Draw up to `count` cards, folding the discard pile back in when the
    /// draw pile runs dry. Drawing fewer than requested is not an error.
    pub(super) fn draw_cards(&mut self, count: usize, events: &mut EventBus) {
        let mut drawn = 0;
        for _ in 0..count {
            if self.combat.deck.draw.is_empty() && !self.combat.deck.discard.is_empty() {
                let cards = self.combat.deck.discard.len();
                self.combat.deck.reshuffle_discard(&mut self.rng);
                events.push(Event::DeckReshuffled { cards });
            }
            match self.combat.deck.draw_one() {
                Some(card) => {
                    self.combat.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        events.push(Event::CardsDrawn {
            drawn,
            requested: count,
        });
    }

    pub(super) fn roll_intent(&mut self, events: &mut EventBus) {
        let enemy = &self.config.enemy;
        let total = (enemy.attack_weight + enemy.block_weight).max(1) as u64;
        let roll = self.rng.next_u64() % total;
        let intent = if roll < enemy.attack_weight as u64 {
            let value = self
                .rng
                .pick_range(enemy.attack.min as i64, enemy.attack.max as i64);
            Intent::Attack(value as u16)
        } else {
            let value = self
                .rng
                .pick_range(enemy.block.min as i64, enemy.block.max as i64);
            Intent::Block(value as u16)
        };
        self.combat.intent = intent;
        events.push(Event::IntentRolled { intent });
    }
}
