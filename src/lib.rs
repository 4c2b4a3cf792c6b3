//! Klondike Solitaire played through short text commands.
//!
//! The core is [`engine::Solitaire`]: a deck dealt into thirteen piles, moves
//! of any number of cards between piles, and a single level of undo. No
//! solitaire placement rules are enforced. [`game::Game`] wraps it in a
//! read-eval-render loop.

pub mod board;
pub mod card;
pub mod command;
pub mod deck;
pub mod engine;
pub mod error;
pub mod game;
pub mod pile;
pub mod renderer;
pub mod undo;

pub use engine::Solitaire;
pub use error::{GameError, Result};
pub use pile::PileId;
