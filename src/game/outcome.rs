//! What a move or skip did.
//!
//! The engine's state is fully updated by the time these are returned.
//! They exist so a UI can animate the change step by step without
//! re-deriving it from before/after snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Location, TokenRef};

/// A single notification derived from a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    Moved { token: TokenRef, from: Location, to: Location },
    Captured { by: TokenRef, victim: TokenRef, cell: u8 },
    Finished { token: TokenRef },
    Won { color: Color },
    /// Same color rolls again.
    BonusRoll { color: Color },
    /// Too many bonus rolls in a row; the turn passes.
    TurnForfeited { color: Color, next: Color },
    TurnChanged { from: Color, to: Color },
}

/// Result of `LudoGame::apply_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Color that moved.
    pub color: Color,

    /// Index of the token that moved.
    pub token: usize,

    /// The roll that was used.
    pub die: u8,

    pub from: Location,
    pub to: Location,

    /// Opposing tokens sent home, in index order.
    pub captured: SmallVec<[TokenRef; 4]>,

    /// The moved token reached the end of its stretch.
    pub finished: bool,

    /// The move finished the color's last token.
    pub won: bool,

    /// Color to roll next. Equal to `color` on a bonus roll or a win.
    pub next_color: Color,

    /// The mover rolls again.
    pub bonus_roll: bool,

    /// A bonus roll was cancelled by the streak limit.
    pub forfeited: bool,
}

impl MoveResult {
    /// The move as an ordered list of notifications.
    ///
    /// Order: the move itself, each capture, the finish, then either the
    /// win or exactly one turn event.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        let mover = TokenRef::new(self.color, self.token);
        let mut events = vec![GameEvent::Moved {
            token: mover,
            from: self.from,
            to: self.to,
        }];

        if let Some(cell) = self.to.track_cell() {
            events.extend(self.captured.iter().map(|&victim| GameEvent::Captured {
                by: mover,
                victim,
                cell,
            }));
        }

        if self.finished {
            events.push(GameEvent::Finished { token: mover });
        }

        if self.won {
            events.push(GameEvent::Won { color: self.color });
        } else if self.bonus_roll {
            events.push(GameEvent::BonusRoll { color: self.color });
        } else if self.forfeited {
            events.push(GameEvent::TurnForfeited {
                color: self.color,
                next: self.next_color,
            });
        } else {
            events.push(GameEvent::TurnChanged {
                from: self.color,
                to: self.next_color,
            });
        }

        events
    }
}

/// Result of `LudoGame::skip_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipResult {
    /// Color whose turn was skipped.
    pub color: Color,

    /// Color to roll next.
    pub next_color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MoveResult {
        MoveResult {
            color: Color::Red,
            token: 1,
            die: 4,
            from: Location::OnTrack(10),
            to: Location::OnTrack(14),
            captured: SmallVec::new(),
            finished: false,
            won: false,
            next_color: Color::Blue,
            bonus_roll: false,
            forfeited: false,
        }
    }

    #[test]
    fn test_plain_move_events() {
        let events = base().events();
        assert_eq!(
            events,
            vec![
                GameEvent::Moved {
                    token: TokenRef::new(Color::Red, 1),
                    from: Location::OnTrack(10),
                    to: Location::OnTrack(14),
                },
                GameEvent::TurnChanged {
                    from: Color::Red,
                    to: Color::Blue,
                },
            ]
        );
    }

    #[test]
    fn test_capture_events() {
        let mut result = base();
        result.captured.push(TokenRef::new(Color::Blue, 0));
        result.captured.push(TokenRef::new(Color::Blue, 3));

        let captures: Vec<_> = result
            .events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Captured { .. }))
            .collect();

        assert_eq!(captures.len(), 2);
        assert_eq!(
            captures[1],
            GameEvent::Captured {
                by: TokenRef::new(Color::Red, 1),
                victim: TokenRef::new(Color::Blue, 3),
                cell: 14,
            }
        );
    }

    #[test]
    fn test_win_has_no_turn_event() {
        let mut result = base();
        result.to = Location::Finished;
        result.finished = true;
        result.won = true;
        result.next_color = Color::Red;

        let events = result.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], GameEvent::Finished { token: TokenRef::new(Color::Red, 1) });
        assert_eq!(events[2], GameEvent::Won { color: Color::Red });
    }

    #[test]
    fn test_bonus_and_forfeit_events() {
        let mut bonus = base();
        bonus.die = 6;
        bonus.bonus_roll = true;
        bonus.next_color = Color::Red;
        assert_eq!(bonus.events().last(), Some(&GameEvent::BonusRoll { color: Color::Red }));

        let mut forfeit = base();
        forfeit.die = 6;
        forfeit.forfeited = true;
        assert_eq!(
            forfeit.events().last(),
            Some(&GameEvent::TurnForfeited {
                color: Color::Red,
                next: Color::Blue,
            })
        );
    }

    #[test]
    fn test_move_result_serialization() {
        let result = base();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: MoveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
