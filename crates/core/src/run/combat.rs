use super::{RunError, RunState};
use crate::{
    resolve_effect, CombatOutcome, Event, EventBus, Intent, PendingSelection, Phase, ShopState,
    UpgradeState, DICE_COUNT,
};

impl RunState {
    /// A die click is an inspection when nothing is pending, otherwise a
    /// target pick for the waiting card.
    pub fn die_clicked(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Combat)?;
        if self.combat.over() {
            return Err(RunError::GameOver);
        }
        if index >= DICE_COUNT {
            return Err(RunError::InvalidDie(index));
        }
        let resolve_now = match self.combat.pending.as_mut() {
            None => {
                let value = self.combat.dice.dice[index].value;
                events.push(Event::DieInspected { index, value });
                false
            }
            Some(pending) => {
                let selected = pending.record(index);
                events.push(Event::DieToggled { index, selected });
                !pending.multi_select && pending.is_complete()
            }
        };
        if resolve_now {
            self.resolve_pending(events)?;
        }
        Ok(())
    }

    /// Play a specific copy out of hand. Cards that need no targets resolve
    /// on the spot; the rest open a selection.
    pub fn play_card(&mut self, instance: u32, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Combat)?;
        if self.combat.over() {
            return Err(RunError::GameOver);
        }
        if self.combat.pending.is_some() {
            return Err(RunError::SelectionPending);
        }
        let position = self
            .combat
            .hand
            .iter()
            .position(|card| card.id == instance)
            .ok_or(RunError::CardNotInHand)?;
        let def = self.catalog.get(&self.combat.hand[position].key)?.clone();
        let card = self.combat.hand.remove(position);
        if def.requires_targets() {
            events.push(Event::SelectionStarted {
                key: def.key.clone(),
                required: def.targets,
                hint: def.selection_hint().to_string(),
            });
            self.combat.pending = Some(PendingSelection::new(card, def.targets, def.multi_select));
            return Ok(());
        }
        events.push(Event::CardPlayed {
            key: def.key.clone(),
        });
        resolve_effect(
            &def,
            &[],
            &mut self.combat.battlefield(),
            &mut self.rng,
            events,
        );
        self.combat.deck.discard.push(card);
        self.finalize_resolution(events);
        Ok(())
    }

    /// Fire a multi-select card once its minimum is met.
    pub fn confirm_selection(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Combat)?;
        if self.combat.over() {
            return Err(RunError::GameOver);
        }
        let pending = self.combat.pending.as_ref().ok_or(RunError::NoSelection)?;
        if !pending.multi_select {
            return Err(RunError::NoSelection);
        }
        if !pending.has_minimum() {
            return Err(RunError::SelectionIncomplete);
        }
        self.resolve_pending(events)
    }

    fn resolve_pending(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        let pending = self.combat.pending.take().ok_or(RunError::NoSelection)?;
        let def = self.catalog.get(&pending.card.key)?.clone();
        resolve_effect(
            &def,
            &pending.selected,
            &mut self.combat.battlefield(),
            &mut self.rng,
            events,
        );
        self.combat.deck.discard.push(pending.card);
        events.push(Event::SelectionResolved {
            key: def.key.clone(),
        });
        self.finalize_resolution(events);
        Ok(())
    }

    /// Discard the hand, let the enemy act, then set up the next turn.
    /// Refused while a selection is open; there is no forced-discard rule.
    pub fn end_turn(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Combat)?;
        if self.combat.over() {
            return Err(RunError::GameOver);
        }
        if self.combat.pending.is_some() {
            return Err(RunError::SelectionPending);
        }
        let hand = std::mem::take(&mut self.combat.hand);
        self.combat.deck.discard_cards(hand);
        events.push(Event::TurnEnded {
            turn: self.combat.turn,
        });

        match self.combat.intent {
            Intent::Attack(magnitude) => {
                let incoming = magnitude as i32;
                let blocked = incoming.min(self.combat.player_block);
                let damage = incoming - blocked;
                // The attack consumes its full magnitude of block, whether
                // or not the block fully absorbed it.
                self.combat.player_block = (self.combat.player_block - incoming).max(0);
                if damage > 0 {
                    self.combat.player_hp -= damage;
                }
                events.push(Event::EnemyAttacked {
                    magnitude,
                    blocked,
                    damage,
                });
            }
            Intent::Block(magnitude) => {
                self.combat.enemy_block += magnitude as i32;
                events.push(Event::EnemyBlocked { magnitude });
            }
        }

        if self.combat.player_hp <= 0 {
            self.combat.outcome = Some(CombatOutcome::Defeat);
            events.push(Event::Defeat {
                turn: self.combat.turn,
            });
            return Ok(());
        }

        self.combat.turn += 1;
        events.push(Event::TurnStarted {
            turn: self.combat.turn,
        });
        self.combat.dice.roll_turn(&mut self.rng);
        events.push(Event::DiceRolled {
            values: self.combat.dice.values(),
        });
        self.draw_cards(self.config.combat.hand_limit, events);
        self.roll_intent(events);
        Ok(())
    }

    fn finalize_resolution(&mut self, events: &mut EventBus) {
        if self.combat.enemy_hp <= 0 {
            self.on_victory(events);
        }
    }

    /// Award gold once and hand the run to the shop or the upgrade chamber.
    fn on_victory(&mut self, events: &mut EventBus) {
        if self.combat.outcome.is_some() {
            return;
        }
        self.combat.outcome = Some(CombatOutcome::Victory);
        let economy = &self.config.economy;
        let reward = self.rng.pick_range(economy.reward.min, economy.reward.max);
        self.profile.gold += reward;
        if self.rng.next_u64() % 2 == 0 {
            let shop = ShopState::generate(
                &self.catalog,
                self.config.economy.card_price,
                self.config.economy.shop_slots,
                &mut self.rng,
            );
            events.push(Event::Victory {
                reward,
                gold: self.profile.gold,
                next: Phase::Shop,
            });
            events.push(Event::ShopOpened {
                offers: shop.offers.len(),
                price: self.config.economy.card_price,
            });
            self.shop = Some(shop);
            self.phase = Phase::Shop;
        } else {
            let upgrade = UpgradeState::generate(
                &self.profile,
                &self.catalog,
                self.config.economy.upgrade_slots,
                &mut self.rng,
            );
            events.push(Event::Victory {
                reward,
                gold: self.profile.gold,
                next: Phase::Upgrade,
            });
            if upgrade.options.is_empty() {
                events.push(Event::UpgradeUnavailable);
            } else {
                events.push(Event::UpgradeOpened {
                    options: upgrade.options.len(),
                });
            }
            self.upgrade = Some(upgrade);
            self.phase = Phase::Upgrade;
        }
    }
}
