//! Pure rule functions.
//!
//! Everything here is a function of a `RuleSet`, a `Board` and a die value.
//! Nothing mutates state: the `LudoGame` engine calls these to decide what
//! is legal and then applies the result itself.
//!
//! - `advance`: where a token on the track or in its stretch ends up
//! - `destination`: `advance` plus leaving the yard on an exit roll
//! - `legal_moves`: which of a color's tokens can move with a roll
//! - `capture_targets`: which opposing tokens a landing sends home

pub mod movement;

pub use movement::{advance, capture_targets, destination, is_movable, legal_moves, LegalMoves};
