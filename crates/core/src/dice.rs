use crate::RngState;
use serde::{Deserialize, Serialize};

pub const DICE_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Die {
    pub value: u8,
    pub frozen_turns: u8,
}

impl Default for Die {
    fn default() -> Self {
        Self {
            value: 1,
            frozen_turns: 0,
        }
    }
}

impl Die {
    pub fn frozen(&self) -> bool {
        self.frozen_turns > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceSet {
    pub dice: [Die; DICE_COUNT],
}

impl DiceSet {
    pub fn get(&self, index: usize) -> Option<Die> {
        self.dice.get(index).copied()
    }

    /// Fresh roll at combat start: every die rolls, freeze counters clear.
    pub fn roll_all(&mut self, rng: &mut RngState) {
        for die in &mut self.dice {
            die.value = rng.roll_face();
            die.frozen_turns = 0;
        }
    }

    /// Natural roll at a turn boundary: frozen dice keep their value for
    /// this roll and tick their counter down instead.
    pub fn roll_turn(&mut self, rng: &mut RngState) {
        for die in &mut self.dice {
            if die.frozen_turns > 0 {
                die.frozen_turns -= 1;
                continue;
            }
            die.value = rng.roll_face();
        }
    }

    pub fn values(&self) -> [u8; DICE_COUNT] {
        let mut values = [0u8; DICE_COUNT];
        for (slot, die) in values.iter_mut().zip(self.dice.iter()) {
            *slot = die.value;
        }
        values
    }

    pub fn sum(&self) -> i32 {
        self.dice.iter().map(|die| die.value as i32).sum()
    }

    pub fn sum_where(&self, keep: impl Fn(u8) -> bool) -> i32 {
        self.dice
            .iter()
            .filter(|die| keep(die.value))
            .map(|die| die.value as i32)
            .sum()
    }

    pub fn count_of(&self, face: u8) -> i32 {
        self.dice.iter().filter(|die| die.value == face).count() as i32
    }

    pub fn has_pair(&self) -> bool {
        let mut counts = [0u8; 7];
        for die in &self.dice {
            counts[die.value as usize] += 1;
        }
        counts.iter().any(|&count| count >= 2)
    }

    /// Five consecutive faces among the distinct values: 1-5 or 2-6.
    pub fn has_big_straight(&self) -> bool {
        let present = self.presence();
        (1..=5usize).all(|face| present[face]) || (2..=6usize).all(|face| present[face])
    }

    /// Four consecutive faces among the distinct values.
    pub fn has_small_straight(&self) -> bool {
        let present = self.presence();
        (1..=3usize).any(|start| (start..start + 4).all(|face| present[face]))
    }

    fn presence(&self) -> [bool; 7] {
        let mut present = [false; 7];
        for die in &self.dice {
            present[die.value as usize] = true;
        }
        present
    }
}
