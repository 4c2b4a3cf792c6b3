use std::collections::HashSet;

use crate::card::Card;
use crate::deck::{DECK_SIZE, Deck};
use crate::error::{GameError, Result};
use crate::pile::{NUM_COLUMNS, NUM_FOUNDATIONS, PileId};

/// The thirteen piles. Every pile is a stack whose last element is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; NUM_FOUNDATIONS],
    /// 7 tableau columns; index 0 is leftmost.
    pub columns: [Vec<Card>; NUM_COLUMNS],
}

impl Board {
    // -------------------------------------------------------------------------
    // Construction / Dealing
    // -------------------------------------------------------------------------

    /// Deal a board from an already-ordered deck.
    ///
    /// Column `i` receives `i + 1` cards with only the last one face-up; the
    /// rest of the deck goes to the stock in deck order, so the last card
    /// dealt ends up on top of the stock.
    pub fn deal_from_deck(mut deck: Deck) -> Self {
        debug_assert_eq!(deck.len(), DECK_SIZE, "Need exactly 52 cards to deal");

        let mut columns: [Vec<Card>; NUM_COLUMNS] = Default::default();
        for (i, column) in columns.iter_mut().enumerate() {
            for j in 0..=i {
                let Some(mut card) = deck.deal_next() else { break };
                card.face_up = j == i;
                column.push(card);
            }
        }

        let mut stock = Vec::with_capacity(deck.len());
        while let Some(card) = deck.deal_next() {
            stock.push(card);
        }

        Board {
            stock,
            waste: Vec::new(),
            foundations: Default::default(),
            columns,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub(crate) fn pile(&self, id: PileId) -> &Vec<Card> {
        match id {
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
            PileId::Foundation(i) => &self.foundations[i],
            PileId::Column(i) => &self.columns[i],
        }
    }

    fn pile_mut(&mut self, id: PileId) -> &mut Vec<Card> {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Foundation(i) => &mut self.foundations[i],
            PileId::Column(i) => &mut self.columns[i],
        }
    }

    /// Returns the top card of a pile, if any.
    pub(crate) fn top_of(&self, id: PileId) -> Option<Card> {
        self.pile(id).last().copied()
    }

    pub(crate) fn size_of(&self, id: PileId) -> usize {
        self.pile(id).len()
    }

    /// Cards of a pile, bottom first.
    pub(crate) fn cards_of(&self, id: PileId) -> &[Card] {
        self.pile(id)
    }

    /// True when the piles together hold each of the 52 cards exactly once.
    pub fn is_complete(&self) -> bool {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0;
        for id in PileId::all() {
            for card in self.pile(id) {
                total += 1;
                if !seen.insert(card.identity()) {
                    return false;
                }
            }
        }
        total == DECK_SIZE
    }

    // -------------------------------------------------------------------------
    // Move Execution
    // -------------------------------------------------------------------------

    /// Move the top `count` cards of `src` onto `dst` as one block, keeping
    /// their relative order. No placement rules apply; the only check is that
    /// `src` holds enough cards. `count == 0` succeeds and moves nothing.
    pub(crate) fn transfer(&mut self, src: PileId, dst: PileId, count: usize) -> Result<()> {
        let available = self.size_of(src);
        if available < count {
            return Err(GameError::InsufficientCards {
                pile: src,
                requested: count,
                available,
            });
        }

        let block = self.pile_mut(src).split_off(available - count);
        self.pile_mut(dst).extend(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Board {
        Board::deal_from_deck(Deck::build())
    }

    #[test]
    fn test_deal_shape() {
        let board = fresh();
        for (i, column) in board.columns.iter().enumerate() {
            assert_eq!(column.len(), i + 1);
            let (top, rest) = column.split_last().unwrap();
            assert!(top.face_up, "top of column {} must be face-up", i + 1);
            assert!(rest.iter().all(|c| !c.face_up));
        }
        assert_eq!(board.stock.len(), 24);
        assert!(board.stock.iter().all(|c| !c.face_up));
        assert!(board.waste.is_empty());
        assert!(board.foundations.iter().all(|f| f.is_empty()));
        assert!(board.is_complete());
    }

    #[test]
    fn test_deal_order_follows_deck() {
        let order: Vec<Card> = Deck::build().iter().copied().collect();
        let board = fresh();
        // Column 1 gets the first card, column 2 the next two, and so on.
        assert_eq!(board.columns[0][0].identity(), order[0].identity());
        assert_eq!(board.columns[1][0].identity(), order[1].identity());
        assert_eq!(board.columns[1][1].identity(), order[2].identity());
        // Stock holds the tail of the deck with the deck's last card on top.
        assert_eq!(board.stock[0].identity(), order[28].identity());
        assert_eq!(
            board.top_of(PileId::Stock).map(|c| c.identity()),
            Some(order[51].identity())
        );
    }

    #[test]
    fn test_transfer_preserves_block_order() {
        let mut board = fresh();
        let before = board.columns[6].clone();
        let dst_before = board.columns[2].clone();

        board.transfer(PileId::Column(6), PileId::Column(2), 2).unwrap();

        assert_eq!(board.columns[6], before[..5]);
        assert_eq!(board.columns[2][..3], dst_before[..]);
        assert_eq!(board.columns[2][3..], before[5..]);
        // The old top is still the top.
        assert_eq!(board.top_of(PileId::Column(2)), before.last().copied());
        assert!(board.is_complete());
    }

    #[test]
    fn test_transfer_insufficient_cards_leaves_board_alone() {
        let mut board = fresh();
        let before = board.clone();
        let err = board
            .transfer(PileId::Column(0), PileId::Column(1), 2)
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientCards {
                pile: PileId::Column(0),
                requested: 2,
                available: 1,
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_zero_and_same_pile_are_no_ops() {
        let mut board = fresh();
        let before = board.clone();
        board.transfer(PileId::Waste, PileId::Column(0), 0).unwrap();
        assert_eq!(board, before);
        board.transfer(PileId::Column(4), PileId::Column(4), 3).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_has_no_placement_rules() {
        let mut board = fresh();
        board.transfer(PileId::Stock, PileId::Foundation(0), 24).unwrap();
        assert_eq!(board.size_of(PileId::Foundation(0)), 24);
        assert_eq!(board.size_of(PileId::Stock), 0);
        assert!(board.is_complete());
    }

    #[test]
    fn test_is_complete_detects_duplicates() {
        let mut board = fresh();
        let card = board.columns[0][0];
        board.waste.push(card);
        assert!(!board.is_complete());
        board.waste.clear();
        board.columns[0].clear();
        assert!(!board.is_complete());
    }
}
