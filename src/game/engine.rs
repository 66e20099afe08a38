//! The Ludo game engine.
//!
//! ## Turn flow
//!
//! 1. `roll_die` (or `roll_die_with` for an externally produced value)
//! 2. `legal_moves_for_pending` to find which tokens may move
//! 3. `apply_move` with one of them, or `skip_turn` if there are none
//!
//! A roll of `bonus_roll` (six) lets the same color roll again, unless it
//! was the `max_bonus_streak`-th in a row, in which case the turn passes.

use im::Vector;
use tracing::{debug, info};

use super::error::{LudoError, LudoResult};
use super::outcome::{MoveResult, SkipResult};
use crate::core::{
    Board, Color, ConfigError, DiceRng, Location, MoveRecord, RecordKind, RuleSet,
};
use crate::rules::{self, LegalMoves};

/// A single game of Ludo.
///
/// Owns every token. Every mutating operation validates first and either
/// applies all of its effects or returns an error without touching state.
#[derive(Clone, Debug)]
pub struct LudoGame {
    rules: RuleSet,
    board: Board,

    /// Color to act.
    current: Color,

    /// Rolled value waiting to be used by a move or skip.
    pending_die: Option<u8>,

    /// Whether `current` may roll now.
    can_roll: bool,

    /// Consecutive bonus rolls by `current` this turn.
    six_streak: u8,

    winner: Option<Color>,

    /// Turn number (starts at 1, incremented whenever the turn passes).
    turn_number: u32,

    /// Step counter within the turn.
    action_sequence: u32,

    history: Vector<MoveRecord>,
    rng: DiceRng,
}

impl Default for LudoGame {
    fn default() -> Self {
        Self::new()
    }
}

impl LudoGame {
    /// Create a game with the reference rules and an entropy-seeded die.
    #[must_use]
    pub fn new() -> Self {
        let rules = RuleSet::default();
        let board = Board::new(rules.tokens_per_color);
        Self::assemble(rules, board, Color::ALL[0], DiceRng::from_entropy())
    }

    /// Create a game with the reference rules and a seeded die.
    ///
    /// Two games with the same seed roll the same sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let rules = RuleSet::default();
        let board = Board::new(rules.tokens_per_color);
        Self::assemble(rules, board, Color::ALL[0], DiceRng::new(seed))
    }

    /// Create a game with custom rules and a seeded die.
    pub fn with_rules(rules: RuleSet, seed: u64) -> LudoResult<Self> {
        rules.validate()?;
        let board = Board::new(rules.tokens_per_color);
        Ok(Self::assemble(rules, board, Color::ALL[0], DiceRng::new(seed)))
    }

    /// Start from an arbitrary position with `to_move` about to roll.
    ///
    /// The board must match the rules: the right number of tokens per color,
    /// track cells on the track and not past the color's home entry, stretch
    /// offsets inside the stretch, and at most one color fully finished. A
    /// board on which a color has already finished every token starts as a
    /// won game.
    pub fn from_board(rules: RuleSet, board: Board, to_move: Color, seed: u64) -> LudoResult<Self> {
        rules.validate()?;
        validate_board(&rules, &board)?;

        let mut game = Self::assemble(rules, board, to_move, DiceRng::new(seed));
        game.winner = Color::ALL.into_iter().find(|&c| game.board.all_finished(c));
        if game.winner.is_some() {
            game.can_roll = false;
        }
        Ok(game)
    }

    fn assemble(rules: RuleSet, board: Board, current: Color, rng: DiceRng) -> Self {
        Self {
            rules,
            board,
            current,
            pending_die: None,
            can_roll: true,
            six_streak: 0,
            winner: None,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            rng,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Die value rolled but not yet used.
    #[must_use]
    pub fn pending_die(&self) -> Option<u8> {
        self.pending_die
    }

    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.can_roll
    }

    #[must_use]
    pub fn six_streak(&self) -> u8 {
        self.six_streak
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every roll, move and skip since the game (or last reset) began.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn token_location(&self, color: Color, token: usize) -> Option<Location> {
        self.board.location(color, token)
    }

    /// Tokens of `color` that could move with `die`.
    #[must_use]
    pub fn legal_moves(&self, color: Color, die: u8) -> LegalMoves {
        rules::legal_moves(&self.rules, &self.board, color, die)
    }

    /// Tokens the current color can move with the pending roll.
    ///
    /// Empty when nothing has been rolled or the game is over.
    #[must_use]
    pub fn legal_moves_for_pending(&self) -> LegalMoves {
        match (self.winner, self.pending_die) {
            (None, Some(die)) => self.legal_moves(self.current, die),
            _ => LegalMoves::new(),
        }
    }

    // === Operations ===

    /// Roll the die for the current color.
    pub fn roll_die(&mut self) -> LudoResult<u8> {
        self.ensure_can_roll()?;
        let value = self.rng.roll(self.rules.die_faces);
        self.accept_roll(value);
        Ok(value)
    }

    /// Use a die value produced elsewhere (a UI's own animation, a replay).
    ///
    /// Same preconditions as `roll_die`, and the value must be on the die.
    pub fn roll_die_with(&mut self, value: u8) -> LudoResult<u8> {
        self.ensure_can_roll()?;
        if !(1..=self.rules.die_faces).contains(&value) {
            return Err(LudoError::InvalidDieValue {
                value,
                faces: self.rules.die_faces,
            });
        }
        self.accept_roll(value);
        Ok(value)
    }

    /// Move one of `color`'s tokens by the pending roll.
    ///
    /// In order: the token moves (or leaves the yard), opposing tokens on a
    /// non-safe landing cell are sent home, the win is checked, and the turn
    /// is resolved.
    pub fn apply_move(&mut self, color: Color, token: usize) -> LudoResult<MoveResult> {
        self.ensure_not_won()?;
        self.ensure_current(color)?;
        let die = self.pending_die.ok_or(LudoError::NoPendingRoll)?;
        let from = self
            .board
            .location(color, token)
            .ok_or(LudoError::TokenOutOfRange { token })?;
        let to = rules::destination(&self.rules, color, from, die)
            .ok_or(LudoError::IllegalMove { color, token, die })?;

        // Validated; nothing below can fail.
        let captured = rules::capture_targets(&self.rules, &self.board, color, to);
        self.board.set(color, token, to);
        debug!(%color, token, die, %from, %to, "token moved");

        for &victim in &captured {
            self.board.send_home(victim);
            debug!(%color, token, %victim, "captured");
        }

        self.record(color, RecordKind::Move { token, from, to });
        self.pending_die = None;

        let finished = to.is_finished();

        if self.board.all_finished(color) {
            self.winner = Some(color);
            self.can_roll = false;
            info!(%color, turn = self.turn_number, "game won");

            return Ok(MoveResult {
                color,
                token,
                die,
                from,
                to,
                captured,
                finished,
                won: true,
                next_color: color,
                bonus_roll: false,
                forfeited: false,
            });
        }

        let mut bonus_roll = false;
        let mut forfeited = false;

        if die == self.rules.bonus_roll {
            self.six_streak += 1;
            if self.six_streak >= self.rules.max_bonus_streak {
                debug!(%color, streak = self.six_streak, "bonus streak limit, turn forfeited");
                forfeited = true;
                self.end_turn();
            } else {
                debug!(%color, streak = self.six_streak, "bonus roll");
                bonus_roll = true;
                self.can_roll = true;
            }
        } else {
            self.end_turn();
        }

        Ok(MoveResult {
            color,
            token,
            die,
            from,
            to,
            captured,
            finished,
            won: false,
            next_color: self.current,
            bonus_roll,
            forfeited,
        })
    }

    /// Pass the turn when the pending roll allows no move.
    pub fn skip_turn(&mut self, color: Color) -> LudoResult<SkipResult> {
        self.ensure_not_won()?;
        self.ensure_current(color)?;
        let die = self.pending_die.ok_or(LudoError::NoPendingRoll)?;

        let moves = self.legal_moves(color, die);
        if !moves.is_empty() {
            return Err(LudoError::MovesAvailable { count: moves.len() });
        }

        self.record(color, RecordKind::Skip);
        self.end_turn();

        Ok(SkipResult {
            color,
            next_color: self.current,
        })
    }

    /// Return to the start position: all tokens home, first color to roll.
    ///
    /// Rules are kept and the die keeps its sequence.
    pub fn reset_game(&mut self) {
        self.board = Board::new(self.rules.tokens_per_color);
        self.current = Color::ALL[0];
        self.pending_die = None;
        self.can_roll = true;
        self.six_streak = 0;
        self.winner = None;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.history = Vector::new();
        info!("game reset");
    }

    // === Internals ===

    fn ensure_not_won(&self) -> LudoResult<()> {
        match self.winner {
            Some(winner) => Err(LudoError::GameAlreadyWon { winner }),
            None => Ok(()),
        }
    }

    fn ensure_current(&self, color: Color) -> LudoResult<()> {
        if color != self.current {
            return Err(LudoError::NotCurrentPlayer {
                expected: self.current,
                actual: color,
            });
        }
        Ok(())
    }

    fn ensure_can_roll(&self) -> LudoResult<()> {
        self.ensure_not_won()?;
        if !self.can_roll {
            return Err(LudoError::RollNotPermitted);
        }
        Ok(())
    }

    fn accept_roll(&mut self, value: u8) {
        self.pending_die = Some(value);
        self.can_roll = false;
        self.record(self.current, RecordKind::Roll { value });
        debug!(color = %self.current, value, "die rolled");
    }

    /// Pass the turn to the next color.
    fn end_turn(&mut self) {
        let from = self.current;
        self.current = from.next();
        self.pending_die = None;
        self.can_roll = true;
        self.six_streak = 0;
        self.turn_number += 1;
        self.action_sequence = 0;
        debug!(%from, to = %self.current, turn = self.turn_number, "turn changed");
    }

    fn record(&mut self, color: Color, kind: RecordKind) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(MoveRecord::new(self.turn_number, sequence, color, kind));
    }
}

/// Check that every token location is reachable under the rules.
fn validate_board(rules: &RuleSet, board: &Board) -> Result<(), ConfigError> {
    if board.tokens_per_color() != rules.tokens_per_color {
        return Err(ConfigError::Validation(format!(
            "board has {} tokens per color, rules expect {}",
            board.tokens_per_color(),
            rules.tokens_per_color
        )));
    }

    for color in Color::ALL {
        for (index, loc) in board.tokens(color).iter().enumerate() {
            let valid = match *loc {
                Location::OnTrack(cell) => {
                    cell < rules.track_len
                        && rules.progress(color, cell) <= rules.entry_progress(color)
                }
                Location::HomeStretch(offset) => (1..=rules.stretch_len).contains(&offset),
                Location::AtHome | Location::Finished => true,
            };
            if !valid {
                return Err(ConfigError::Validation(format!(
                    "{} token {} has impossible location {}",
                    color, index, loc
                )));
            }
        }
    }

    if Color::ALL.into_iter().all(|c| board.all_finished(c)) {
        return Err(ConfigError::Validation("every color has already finished".into()));
    }

    Ok(())
}
