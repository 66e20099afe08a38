//! Core engine types: colors, tokens, board, dice, rule configuration, records.
//!
//! Nothing in here knows how a move is decided. These are the data the
//! `rules` functions read and the `game` engine mutates.

pub mod color;
pub mod token;
pub mod board;
pub mod rng;
pub mod config;
pub mod record;

pub use color::{Color, ColorMap};
pub use token::{Location, TokenRef};
pub use board::Board;
pub use rng::DiceRng;
pub use config::{ConfigError, RuleSet};
pub use record::{MoveRecord, RecordKind};
