use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::pile::PileId;
use crate::undo::{MoveRecord, UndoLog};

/// A game in progress: the board, the single pending undo record, and the
/// textual log of applied moves.
#[derive(Debug, Clone)]
pub struct Solitaire {
    board: Board,
    undo: UndoLog,
    history: Vec<String>,
}

impl Solitaire {
    /// Build, shuffle with `rng`, and deal.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::build();
        deck.shuffle(rng);
        Self::from_board(Board::deal_from_deck(deck))
    }

    /// Deal a game from a specific seed (reproducible).
    pub fn new_seeded(seed: u64) -> Self {
        info!(seed, "dealing new game");
        Self::new_game(&mut SmallRng::seed_from_u64(seed))
    }

    /// Start from an arbitrary board, with nothing to undo.
    pub fn from_board(board: Board) -> Self {
        Solitaire {
            board,
            undo: UndoLog::new(),
            history: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Move the top `count` cards from `source` to `destination`.
    ///
    /// Both labels must name a pile and the source must hold at least `count`
    /// cards. Suits and ranks are not checked. On success the move becomes the
    /// pending undo record.
    pub fn move_cards(&mut self, source: &str, destination: &str, count: usize) -> Result<()> {
        let result = self.try_move(source, destination, count);
        match &result {
            Ok(()) => debug!(source, destination, count, "moved"),
            Err(e) => warn!(source, destination, count, error = %e, "move rejected"),
        }
        result
    }

    fn try_move(&mut self, source: &str, destination: &str, count: usize) -> Result<()> {
        let src = resolve(source)?;
        let dst = resolve(destination)?;
        self.board.transfer(src, dst, count)?;

        self.undo.record(MoveRecord {
            source: src,
            destination: dst,
            count,
        });
        self.history.push(format!("move {} to {}", src, dst));
        debug_assert!(self.board.is_complete());
        Ok(())
    }

    /// Turn the top card of the stock onto the waste.
    pub fn draw_from_stock(&mut self) -> Result<()> {
        if self.board.stock.is_empty() {
            warn!("draw from empty stock");
            return Err(GameError::StockEmpty);
        }

        self.board.transfer(PileId::Stock, PileId::Waste, 1)?;
        self.undo.record(MoveRecord {
            source: PileId::Stock,
            destination: PileId::Waste,
            count: 1,
        });
        self.history.push("draw".to_string());
        debug!(stock = self.board.stock.len(), "drew from stock");
        Ok(())
    }

    /// Reverse the last move or draw. Only one level is kept: after a
    /// successful undo there is nothing left to undo until the next move.
    ///
    /// If the reverse transfer is impossible the record stays pending and the
    /// board is untouched.
    pub fn undo(&mut self) -> Result<()> {
        let Some(record) = self.undo.take() else {
            warn!("nothing to undo");
            return Err(GameError::NothingToUndo);
        };

        let back = record.inverse();
        if let Err(e) = self.board.transfer(back.source, back.destination, back.count) {
            warn!(?record, error = %e, "undo failed");
            self.undo.record(record);
            return Err(GameError::UndoFailed(Box::new(e)));
        }

        self.history.pop();
        debug!(?record, "undone");
        debug_assert!(self.board.is_complete());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pending_undo(&self) -> Option<MoveRecord> {
        self.undo.pending()
    }

    /// Textual log of applied moves, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn top_of(&self, label: &str) -> Result<Option<Card>> {
        Ok(self.board.top_of(resolve(label)?))
    }

    pub fn size_of(&self, label: &str) -> Result<usize> {
        Ok(self.board.size_of(resolve(label)?))
    }

    /// Cards of a pile, bottom first.
    pub fn all_cards_of(&self, label: &str) -> Result<&[Card]> {
        Ok(self.board.cards_of(resolve(label)?))
    }
}

fn resolve(label: &str) -> Result<PileId> {
    PileId::resolve(label).ok_or_else(|| GameError::UnresolvedPile(label.to_string()))
}
