use crate::{CardInstance, RngState};

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<CardInstance>,
    pub discard: Vec<CardInstance>,
}

impl Deck {
    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Top of the draw pile is the end of the vec.
    pub fn draw_one(&mut self) -> Option<CardInstance> {
        self.draw.pop()
    }

    pub fn discard_cards(&mut self, mut cards: Vec<CardInstance>) {
        self.discard.append(&mut cards);
    }

    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }

    pub fn total(&self) -> usize {
        self.draw.len() + self.discard.len()
    }
}
