use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck. Cards are dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 cards face-down, suit-major, rank-minor.
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        debug_assert_eq!(cards.len(), DECK_SIZE, "Deck must have exactly 52 cards");
        Deck { cards }
    }

    /// Fisher–Yates shuffle of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Remove and return the front card, or `None` once the deck is exhausted.
    pub fn deal_next(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Seed derived from the wall clock, for games started without `--seed`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
