//! Token movement, legality and capture.

use smallvec::SmallVec;

use crate::core::{Board, Color, Location, RuleSet, TokenRef};

/// Indices of a color's movable tokens, in index order.
pub type LegalMoves = SmallVec<[usize; 4]>;

/// Move a token that is already in play by `steps`.
///
/// Returns the new location, or `None` when the move is not possible:
/// the token would overshoot the end of its home stretch, or it is at
/// home or finished (neither of which can advance).
///
/// A token on the track enters its stretch once its travel from the start
/// cell passes the home-entry cell. Landing exactly on the entry cell keeps
/// it on the track. Finishing needs the exact count; there is no bounce.
///
/// ```
/// use ludo_engine::{advance, Color, Location, RuleSet};
///
/// let rules = RuleSet::default();
///
/// // 48 + 6 is 4 past red's entry at 50
/// assert_eq!(
///     advance(&rules, Color::Red, Location::OnTrack(48), 6),
///     Some(Location::HomeStretch(4))
/// );
///
/// // offset 5 of 5: one step finishes, two overshoot
/// assert_eq!(advance(&rules, Color::Red, Location::HomeStretch(5), 1), Some(Location::Finished));
/// assert_eq!(advance(&rules, Color::Red, Location::HomeStretch(5), 2), None);
/// ```
#[must_use]
pub fn advance(rules: &RuleSet, color: Color, location: Location, steps: u8) -> Option<Location> {
    match location {
        Location::AtHome | Location::Finished => None,
        Location::HomeStretch(offset) => stretch_location(rules, u16::from(offset) + u16::from(steps)),
        Location::OnTrack(cell) => {
            let target = rules.progress(color, cell) + u16::from(steps);
            let entry = rules.entry_progress(color);

            if target > entry {
                stretch_location(rules, target - entry)
            } else {
                let next = (u16::from(cell) + u16::from(steps)) % u16::from(rules.track_len);
                u8::try_from(next).ok().map(Location::OnTrack)
            }
        }
    }
}

/// Map a distance past the entry cell to a stretch offset or finish.
fn stretch_location(rules: &RuleSet, offset: u16) -> Option<Location> {
    if offset <= u16::from(rules.stretch_len) {
        u8::try_from(offset).ok().map(Location::HomeStretch)
    } else if offset == rules.finish_distance() {
        Some(Location::Finished)
    } else {
        None
    }
}

/// Where a token would end up with this roll, if it can move at all.
///
/// Leaving the yard takes the whole roll: the token is placed on its start
/// cell and moves no further. A value that is not a face of the die moves
/// nothing.
#[must_use]
pub fn destination(rules: &RuleSet, color: Color, location: Location, die: u8) -> Option<Location> {
    if !(1..=rules.die_faces).contains(&die) {
        return None;
    }
    match location {
        Location::AtHome if die == rules.exit_roll => Some(Location::OnTrack(rules.start_cells[color])),
        Location::AtHome => None,
        _ => advance(rules, color, location, die),
    }
}

/// Whether a token at `location` can move with this roll.
#[must_use]
pub fn is_movable(rules: &RuleSet, color: Color, location: Location, die: u8) -> bool {
    destination(rules, color, location, die).is_some()
}

/// Tokens of `color` that can legally move with `die`.
///
/// An empty result means the turn has to be skipped.
#[must_use]
pub fn legal_moves(rules: &RuleSet, board: &Board, color: Color, die: u8) -> LegalMoves {
    let moves: LegalMoves = board
        .tokens(color)
        .iter()
        .enumerate()
        .filter(|(_, loc)| is_movable(rules, color, **loc, die))
        .map(|(index, _)| index)
        .collect();

    tracing::trace!(%color, die, ?moves, "legal moves");
    moves
}

/// Opposing tokens sent home when a `mover` token lands on `landing`.
///
/// Only track landings capture, and never on a safe cell. Every opposing
/// token on the cell is taken, however many are stacked there. Tokens of
/// the mover's own color are never captured.
#[must_use]
pub fn capture_targets(
    rules: &RuleSet,
    board: &Board,
    mover: Color,
    landing: Location,
) -> SmallVec<[TokenRef; 4]> {
    match landing.track_cell() {
        Some(cell) if !rules.is_safe(cell) => board
            .occupants(cell)
            .filter(|token| token.color != mover)
            .collect(),
        _ => SmallVec::new(),
    }
}
