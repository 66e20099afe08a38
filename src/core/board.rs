//! Token placement for both colors.
//!
//! The board is plain data: it knows where every token is and answers
//! occupancy questions, but it never decides whether a placement is legal.
//! That is the job of the `rules` functions and the `LudoGame` engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, ColorMap};
use super::token::{Location, TokenRef};

/// Locations of every token, indexed by color then token index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tokens: ColorMap<Vec<Location>>,
}

impl Board {
    /// Create a board with every token at home.
    #[must_use]
    pub fn new(tokens_per_color: usize) -> Self {
        Self {
            tokens: ColorMap::new(|_| vec![Location::AtHome; tokens_per_color]),
        }
    }

    /// Number of tokens each color owns.
    #[must_use]
    pub fn tokens_per_color(&self) -> usize {
        self.tokens[Color::Red].len()
    }

    /// All token locations for a color, in index order.
    #[must_use]
    pub fn tokens(&self, color: Color) -> &[Location] {
        &self.tokens[color]
    }

    /// Location of one token, or `None` if the index is out of range.
    #[must_use]
    pub fn location(&self, color: Color, index: usize) -> Option<Location> {
        self.tokens[color].get(index).copied()
    }

    /// Place a token.
    ///
    /// Returns false (and changes nothing) if the index is out of range.
    pub fn set(&mut self, color: Color, index: usize, location: Location) -> bool {
        match self.tokens[color].get_mut(index) {
            Some(slot) => {
                *slot = location;
                true
            }
            None => false,
        }
    }

    /// Builder-style `set`, for assembling positions.
    ///
    /// ```
    /// use ludo_engine::{Board, Color, Location};
    ///
    /// let board = Board::new(4)
    ///     .with_token(Color::Red, 0, Location::OnTrack(48))
    ///     .with_token(Color::Blue, 3, Location::HomeStretch(2));
    ///
    /// assert_eq!(board.location(Color::Red, 0), Some(Location::OnTrack(48)));
    /// ```
    #[must_use]
    pub fn with_token(mut self, color: Color, index: usize, location: Location) -> Self {
        self.set(color, index, location);
        self
    }

    /// Count of a color's finished tokens.
    #[must_use]
    pub fn finished_count(&self, color: Color) -> usize {
        self.tokens[color].iter().filter(|loc| loc.is_finished()).count()
    }

    /// True iff every token of the color is finished.
    #[must_use]
    pub fn all_finished(&self, color: Color) -> bool {
        self.tokens[color].iter().all(|loc| loc.is_finished())
    }

    /// Tokens of any color standing on a track cell.
    pub fn occupants(&self, cell: u8) -> impl Iterator<Item = TokenRef> + '_ {
        self.tokens.iter().flat_map(move |(color, locations)| {
            locations
                .iter()
                .enumerate()
                .filter(move |(_, loc)| loc.track_cell() == Some(cell))
                .map(move |(index, _)| TokenRef::new(color, index))
        })
    }

    /// Every occupied track cell mapped to the tokens standing on it.
    ///
    /// Home-stretch, home and finished tokens are not on the track and are
    /// left out.
    #[must_use]
    pub fn track_occupancy(&self) -> FxHashMap<u8, SmallVec<[TokenRef; 4]>> {
        let mut occupancy: FxHashMap<u8, SmallVec<[TokenRef; 4]>> = FxHashMap::default();
        for (color, locations) in self.tokens.iter() {
            for (index, loc) in locations.iter().enumerate() {
                if let Some(cell) = loc.track_cell() {
                    occupancy.entry(cell).or_default().push(TokenRef::new(color, index));
                }
            }
        }
        occupancy
    }

    /// Send a token back to its yard.
    pub(crate) fn send_home(&mut self, token: TokenRef) {
        self.set(token.color, token.index, Location::AtHome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_home() {
        let board = Board::new(4);

        assert_eq!(board.tokens_per_color(), 4);
        for color in Color::ALL {
            assert!(board.tokens(color).iter().all(|loc| loc.is_at_home()));
            assert_eq!(board.finished_count(color), 0);
            assert!(!board.all_finished(color));
        }
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::new(4);
        assert!(!board.set(Color::Red, 4, Location::OnTrack(1)));
        assert_eq!(board, Board::new(4));
        assert_eq!(board.location(Color::Red, 4), None);
    }

    #[test]
    fn test_all_finished() {
        let mut board = Board::new(2);
        board.set(Color::Blue, 0, Location::Finished);
        assert_eq!(board.finished_count(Color::Blue), 1);
        assert!(!board.all_finished(Color::Blue));

        board.set(Color::Blue, 1, Location::Finished);
        assert!(board.all_finished(Color::Blue));
        assert!(!board.all_finished(Color::Red));
    }

    #[test]
    fn test_occupants_only_counts_track() {
        let board = Board::new(4)
            .with_token(Color::Red, 0, Location::OnTrack(10))
            .with_token(Color::Red, 1, Location::OnTrack(10))
            .with_token(Color::Blue, 2, Location::OnTrack(10))
            .with_token(Color::Blue, 3, Location::HomeStretch(10));

        let occupants: Vec<_> = board.occupants(10).collect();
        assert_eq!(
            occupants,
            vec![
                TokenRef::new(Color::Red, 0),
                TokenRef::new(Color::Red, 1),
                TokenRef::new(Color::Blue, 2),
            ]
        );
        assert_eq!(board.occupants(11).count(), 0);
    }

    #[test]
    fn test_track_occupancy() {
        let board = Board::new(4)
            .with_token(Color::Red, 0, Location::OnTrack(3))
            .with_token(Color::Blue, 1, Location::OnTrack(3))
            .with_token(Color::Blue, 2, Location::OnTrack(40))
            .with_token(Color::Red, 3, Location::Finished);

        let occupancy = board.track_occupancy();
        assert_eq!(occupancy.len(), 2);
        assert_eq!(occupancy[&3].len(), 2);
        assert_eq!(occupancy[&40].as_slice(), &[TokenRef::new(Color::Blue, 2)]);
    }

    #[test]
    fn test_send_home() {
        let mut board = Board::new(4).with_token(Color::Blue, 1, Location::OnTrack(30));
        board.send_home(TokenRef::new(Color::Blue, 1));
        assert_eq!(board.location(Color::Blue, 1), Some(Location::AtHome));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::new(2).with_token(Color::Red, 1, Location::HomeStretch(3));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
