//! Game history records.
//!
//! Every roll, move and skip is appended to the engine's history with the
//! turn it happened in and its order within that turn. Used for replay,
//! debugging and for UIs that show a move log.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::token::Location;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// The die was rolled.
    Roll { value: u8 },
    /// A token moved.
    Move { token: usize, from: Location, to: Location },
    /// No legal move existed and the turn passed.
    Skip,
}

/// A recorded step with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number when the step was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,

    /// The color that acted.
    pub color: Color,

    /// The step itself.
    pub kind: RecordKind,
}

impl MoveRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(turn: u32, sequence: u32, color: Color, kind: RecordKind) -> Self {
        Self {
            turn,
            sequence,
            color,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = MoveRecord::new(3, 1, Color::Blue, RecordKind::Skip);

        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 1);
        assert_eq!(record.color, Color::Blue);
        assert_eq!(record.kind, RecordKind::Skip);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(
            2,
            1,
            Color::Red,
            RecordKind::Move {
                token: 0,
                from: Location::AtHome,
                to: Location::OnTrack(0),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
