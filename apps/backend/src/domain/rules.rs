use serde::{Deserialize, Serialize};

use crate::domain::bitboard::Bitboard;
use crate::errors::domain::{DomainError, InvalidInputKind};

/// Tic-tac-toe winning lines as 9-bit masks over one player plane:
/// three rows, three columns, two diagonals.
const TIC_TAC_TOE_WIN_MASKS: [u64; 8] = [
    0b111_000_000,
    0b000_111_000,
    0b000_000_111,
    0b100_100_100,
    0b010_010_010,
    0b001_001_001,
    0b100_010_001,
    0b001_010_100,
];

/// Fewer than five marks on the board cannot yet complete a line of three,
/// whichever side they belong to. Guarding on popcount instead of probing the
/// masks keeps sparse boards from scoring early under rulesets whose winning
/// lines are shorter than the mark count suggests.
const TIC_TAC_TOE_MIN_MARKS: u32 = 5;

/// A named rule configuration: board size, player count, win masks and
/// per-turn transition limit. Each variant carries its own constant data, so
/// the enum doubles as the ruleset dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    TicTacToe,
}

impl RuleKind {
    /// Board size in tiles; each player plane is this many bits wide.
    pub const fn tiles(self) -> u32 {
        match self {
            Self::TicTacToe => 9,
        }
    }

    /// Number of occupying sides the board encodes.
    pub const fn players(self) -> u32 {
        match self {
            Self::TicTacToe => 2,
        }
    }

    /// Most marks a single turn may add over the previous board, where the
    /// ruleset bounds it. `None` disables the transition check.
    pub const fn max_new_bits_per_turn(self) -> Option<u32> {
        match self {
            Self::TicTacToe => Some(1),
        }
    }

    const fn win_masks(self) -> &'static [u64] {
        match self {
            Self::TicTacToe => &TIC_TAC_TOE_WIN_MASKS,
        }
    }

    const fn min_marks(self) -> u32 {
        match self {
            Self::TicTacToe => TIC_TAC_TOE_MIN_MARKS,
        }
    }

    /// Structural legality of a single board state. The accepted domain is
    /// the `tiles * players` low bits; anything above encodes no tile.
    pub fn validate(self, board: Bitboard) -> Result<(), DomainError> {
        if board.is_empty() {
            return Err(DomainError::invalid_input(
                InvalidInputKind::UnsetBitboardState,
                "bitboard has no bit set",
            ));
        }
        if board.state() >> (self.tiles() * self.players()) != 0 {
            return Err(DomainError::invalid_input(
                InvalidInputKind::ExcessiveBits,
                format!(
                    "bits set beyond the {}-bit board encoding",
                    self.tiles() * self.players()
                ),
            ));
        }
        if board.count_ones() > self.tiles() {
            return Err(DomainError::invalid_input(
                InvalidInputKind::ExcessiveBits,
                format!(
                    "{} bits set, at most {} tiles playable",
                    board.count_ones(),
                    self.tiles()
                ),
            ));
        }
        if board.home_plane(self.tiles()) & board.away_plane(self.tiles()) != 0 {
            return Err(DomainError::invalid_input(
                InvalidInputKind::OverlappingTile,
                "both players occupy the same tile",
            ));
        }
        Ok(())
    }

    /// Legality of `current` as the successor of `previous`. The first turn
    /// of a game passes [`Bitboard::EMPTY`] as `previous`. The board is
    /// append-only, so a shrinking popcount is rejected along with one that
    /// grows past the per-turn limit.
    pub fn validate_transition(
        self,
        previous: Bitboard,
        current: Bitboard,
    ) -> Result<(), DomainError> {
        let Some(limit) = self.max_new_bits_per_turn() else {
            return Ok(());
        };
        let delta = i64::from(current.count_ones()) - i64::from(previous.count_ones());
        if delta < 0 || delta > i64::from(limit) {
            return Err(DomainError::invalid_input(
                InvalidInputKind::ExcessiveBitsPerRound,
                format!("board grew by {delta} bits, at most {limit} new marks per turn"),
            ));
        }
        Ok(())
    }

    /// End condition of a structurally valid board. Total over its input:
    /// `NOT_OVER` is a normal value, not an error.
    pub fn result_of(self, board: Bitboard) -> GameResult {
        if board.count_ones() < self.min_marks() {
            return GameResult::NotOver;
        }
        let tiles = self.tiles();
        for &mask in self.win_masks() {
            if mask == mask & board.home_plane(tiles) {
                return GameResult::Home;
            }
            if mask == mask & board.away_plane(tiles) {
                return GameResult::Away;
            }
        }
        if board.count_ones() == tiles {
            GameResult::Tie
        } else {
            GameResult::NotOver
        }
    }
}

/// Outcome of evaluating a board under a ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    /// Home player has won.
    Home,
    /// Away player has won.
    Away,
    /// Board is full with no winning line on either side.
    Tie,
    /// The board can still evolve.
    NotOver,
}

impl GameResult {
    /// Whether this outcome ends the game. A tie does.
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::NotOver)
    }

    /// A decisive result names a winner; a tie does not.
    pub const fn is_decisive(self) -> bool {
        matches!(self, Self::Home | Self::Away)
    }
}
