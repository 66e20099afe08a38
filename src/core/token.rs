//! Token locations and token references.
//!
//! A token is always in exactly one of four places. `Location` makes the
//! other combinations unrepresentable: there is no "on track but also
//! finished" state to get wrong.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Where a token currently is.
///
/// Lifecycle: `AtHome` -> `OnTrack` -> (`HomeStretch`) -> `Finished`.
/// A capture sends an `OnTrack` token back to `AtHome`. `Finished` is
/// permanent until the game is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// In the color's yard, waiting for an exit roll.
    #[default]
    AtHome,
    /// On the shared circular track at the given cell.
    OnTrack(u8),
    /// In the color's private lane, 1-indexed offset.
    HomeStretch(u8),
    /// Completed the home stretch.
    Finished,
}

impl Location {
    #[must_use]
    pub const fn is_at_home(self) -> bool {
        matches!(self, Location::AtHome)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Location::Finished)
    }

    /// The track cell, if the token is on the shared track.
    #[must_use]
    pub const fn track_cell(self) -> Option<u8> {
        match self {
            Location::OnTrack(cell) => Some(cell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::AtHome => write!(f, "home"),
            Location::OnTrack(cell) => write!(f, "cell {}", cell),
            Location::HomeStretch(offset) => write!(f, "stretch {}", offset),
            Location::Finished => write!(f, "finished"),
        }
    }
}

/// Identifies one token: its color and its index within that color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenRef {
    pub color: Color,
    pub index: usize,
}

impl TokenRef {
    #[must_use]
    pub const fn new(color: Color, index: usize) -> Self {
        Self { color, index }
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} token {}", self.color, self.index)
    }
}
