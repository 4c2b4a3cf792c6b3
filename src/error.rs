use thiserror::Error;

use crate::pile::PileId;

pub type Result<T> = std::result::Result<T, GameError>;

/// Why an operation was refused. A refused operation never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no pile named '{0}'")]
    UnresolvedPile(String),
    #[error("{pile} holds {available} card(s), cannot take {requested}")]
    InsufficientCards {
        pile: PileId,
        requested: usize,
        available: usize,
    },
    #[error("stock is empty")]
    StockEmpty,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("undo failed: {0}")]
    UndoFailed(Box<GameError>),
}

impl GameError {
    /// Status line shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            GameError::UnresolvedPile(_) | GameError::InsufficientCards { .. } => "Invalid move!",
            GameError::StockEmpty => "Stock is empty!",
            GameError::NothingToUndo => "No moves to undo!",
            GameError::UndoFailed(_) => "Undo failed!",
        }
    }
}
