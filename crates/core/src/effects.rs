use crate::{CardDef, CombatState, DiceSet, EffectKind, Event, EventBus, RngState};

/// The slice of combat state an effect may touch: the dice and the battle
/// totals. Piles, hand, and pending selection stay out of reach.
#[derive(Debug)]
pub struct Battlefield<'a> {
    pub dice: &'a mut DiceSet,
    pub player_block: &'a mut i32,
    pub enemy_hp: &'a mut i32,
    pub enemy_block: &'a mut i32,
}

impl CombatState {
    pub fn battlefield(&mut self) -> Battlefield<'_> {
        Battlefield {
            dice: &mut self.dice,
            player_block: &mut self.player_block,
            enemy_hp: &mut self.enemy_hp,
            enemy_block: &mut self.enemy_block,
        }
    }
}

/// Apply one card effect. Dispatch is exhaustive over `EffectKind`;
/// selection-driven effects with too few targets fizzle rather than error,
/// and a fizzled card still goes to the discard pile.
pub fn resolve_effect(
    def: &CardDef,
    selection: &[usize],
    field: &mut Battlefield<'_>,
    rng: &mut RngState,
    events: &mut EventBus,
) {
    match def.effect {
        EffectKind::Clone => {
            let (Some(&from), Some(&to)) = (selection.first(), selection.get(1)) else {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            };
            let (Some(source), Some(_)) = (field.dice.get(from), field.dice.get(to)) else {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            };
            field.dice.dice[to].value = source.value;
            events.push(Event::DieCopied {
                from,
                to,
                value: source.value,
            });
        }
        EffectKind::Mirror => {
            if selection.is_empty() {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            }
            for &index in selection {
                let Some(die) = field.dice.get(index) else {
                    continue;
                };
                let flipped = 7 - die.value;
                field.dice.dice[index].value = flipped;
                events.push(Event::DieFlipped {
                    index,
                    from: die.value,
                    to: flipped,
                });
            }
        }
        EffectKind::Stasis => {
            if selection.is_empty() {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            }
            for &index in selection {
                if index >= field.dice.dice.len() {
                    continue;
                }
                let die = &mut field.dice.dice[index];
                die.frozen_turns = die.frozen_turns.max(1);
                events.push(Event::DieFrozen { index });
            }
        }
        EffectKind::Tinker | EffectKind::TinkerPlus => {
            if selection.is_empty() {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            }
            let boost = if def.effect == EffectKind::TinkerPlus {
                2
            } else {
                1
            };
            for &index in selection {
                let Some(die) = field.dice.get(index) else {
                    continue;
                };
                let tuned = (die.value + boost).min(6);
                field.dice.dice[index].value = tuned;
                events.push(Event::DieTuned {
                    index,
                    from: die.value,
                    to: tuned,
                });
            }
        }
        EffectKind::Reroll | EffectKind::RerollPlus => {
            if selection.is_empty() {
                events.push(Event::EffectFizzled {
                    key: def.key.clone(),
                });
                return;
            }
            let keep_best = def.effect == EffectKind::RerollPlus;
            for &index in selection {
                let Some(die) = field.dice.get(index) else {
                    continue;
                };
                let rolled = if keep_best {
                    rng.roll_face().max(rng.roll_face())
                } else {
                    rng.roll_face()
                };
                field.dice.dice[index].value = rolled;
                events.push(Event::DieRerolled {
                    index,
                    from: die.value,
                    to: rolled,
                });
            }
        }
        EffectKind::OddAttack => {
            let damage = field.dice.sum_where(|value| value % 2 == 1);
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::EvenShield => {
            let block = field.dice.sum_where(|value| value % 2 == 0);
            gain_block(field, block, &def.name, events);
        }
        EffectKind::Strike => {
            let damage = field.dice.sum();
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::StrikePlus => {
            let damage = field.dice.sum() + 6;
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::Fortify => {
            let block = field.dice.sum();
            gain_block(field, block, &def.name, events);
        }
        EffectKind::FortifyPlus => {
            let block = field.dice.sum() + 6;
            gain_block(field, block, &def.name, events);
        }
        EffectKind::Strafe => {
            let damage = if field.dice.has_big_straight() {
                60
            } else if field.dice.has_small_straight() {
                30
            } else {
                0
            };
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::PairShot | EffectKind::PairShotPlus => {
            let damage = if field.dice.has_pair() {
                if def.effect == EffectKind::PairShotPlus {
                    25
                } else {
                    15
                }
            } else {
                0
            };
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::OneShot | EffectKind::OneShotPlus => {
            let per_die = if def.effect == EffectKind::OneShotPlus {
                20
            } else {
                15
            };
            let damage = field.dice.count_of(1) * per_die;
            deal_damage(field, damage, &def.name, events);
        }
        EffectKind::DoubleGuard | EffectKind::DoubleGuardPlus => {
            let per_die = if def.effect == EffectKind::DoubleGuardPlus {
                12
            } else {
                10
            };
            let block = field.dice.count_of(2) * per_die;
            if block > 0 {
                gain_block(field, block, &def.name, events);
            } else {
                events.push(Event::NoEffect {
                    source: def.name.clone(),
                });
            }
        }
        EffectKind::Unknown => {
            events.push(Event::ResolutionFailed {
                key: def.key.clone(),
            });
        }
    }
}

/// Enemy block soaks damage before HP; the same rule for every attack.
fn deal_damage(field: &mut Battlefield<'_>, amount: i32, source: &str, events: &mut EventBus) {
    if amount <= 0 {
        events.push(Event::NoEffect {
            source: source.to_string(),
        });
        return;
    }
    let blocked = amount.min(*field.enemy_block);
    *field.enemy_block -= blocked;
    let damage = amount - blocked;
    *field.enemy_hp -= damage;
    events.push(Event::DamageDealt {
        source: source.to_string(),
        blocked,
        damage,
    });
}

fn gain_block(field: &mut Battlefield<'_>, amount: i32, source: &str, events: &mut EventBus) {
    *field.player_block += amount.max(0);
    events.push(Event::BlockGained {
        source: source.to_string(),
        amount: amount.max(0),
    });
}
