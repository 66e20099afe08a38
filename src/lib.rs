//! # ludo-engine
//!
//! A deterministic rules engine for two-color Ludo.
//!
//! The engine owns every token and is the only thing that mutates them. A
//! caller (usually a UI) rolls the die, asks which tokens may move, picks one
//! and hands it back. The engine applies the move, resolves captures, checks
//! for a win and decides whose turn is next, then returns a result describing
//! everything that happened so the caller can render it however it likes.
//!
//! ## Modules
//!
//! - `core`: colors, tokens, the board, dice, rule configuration, move records
//! - `rules`: pure rule functions (advance, movability, legal moves, captures)
//! - `game`: the stateful `LudoGame` engine, its results and its errors
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{Color, LudoGame};
//!
//! let mut game = LudoGame::with_seed(7);
//! let die = game.roll_die().unwrap();
//!
//! let movable = game.legal_moves_for_pending();
//! if let Some(&token) = movable.first() {
//!     let result = game.apply_move(Color::Red, token).unwrap();
//!     assert_eq!(result.die, die);
//! } else {
//!     let skip = game.skip_turn(Color::Red).unwrap();
//!     assert_eq!(skip.next_color, Color::Blue);
//! }
//! ```

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, ColorMap, ConfigError, DiceRng, Location, MoveRecord, RecordKind, RuleSet,
    TokenRef,
};

pub use crate::rules::{advance, capture_targets, destination, is_movable, legal_moves, LegalMoves};

pub use crate::game::{GameEvent, LudoError, LudoGame, LudoResult, MoveResult, SkipResult};
