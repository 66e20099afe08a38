//! The stateful Ludo engine.
//!
//! `LudoGame` owns the board, the dice and the turn state. Callers drive it
//! with `roll_die`, `apply_move` and `skip_turn`; each call either applies
//! all of its effects or returns a `LudoError` and changes nothing.

mod engine;
mod error;
mod outcome;

pub use engine::LudoGame;
pub use error::{LudoError, LudoResult};
pub use outcome::{GameEvent, MoveResult, SkipResult};
