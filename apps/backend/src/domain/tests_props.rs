//! Property-based tests for the bitboard rule engine.

use proptest::prelude::*;

use crate::domain::bitboard::Bitboard;
use crate::domain::rules::{GameResult, RuleKind};

const KIND: RuleKind = RuleKind::TicTacToe;

/// Any state the two 9-bit player planes can encode.
fn any_board_state() -> impl Strategy<Value = u64> {
    0u64..(1 << 18)
}

/// A structurally valid board, built per tile so the planes are disjoint by
/// construction: each tile is empty, home-held, or away-held.
fn valid_board() -> impl Strategy<Value = Bitboard> {
    proptest::collection::vec(0u8..3, 9)
        .prop_filter("at least one mark", |cells| cells.iter().any(|&c| c != 0))
        .prop_map(|cells| {
            let mut state = 0u64;
            for (tile, cell) in cells.into_iter().enumerate() {
                match cell {
                    1 => state |= 1 << (9 + tile),
                    2 => state |= 1 << tile,
                    _ => {}
                }
            }
            Bitboard::new(state)
        })
}

proptest! {
    /// validate succeeds exactly when the board has between one and `tiles`
    /// marks and the player planes are disjoint.
    #[test]
    fn prop_validate_iff_in_range_and_disjoint(state in any_board_state()) {
        let board = Bitboard::new(state);
        let popcount = board.count_ones();
        let disjoint = board.home_plane(9) & board.away_plane(9) == 0;
        let expected = (1..=9).contains(&popcount) && disjoint;
        prop_assert_eq!(KIND.validate(board).is_ok(), expected);
    }

    /// result_of is total over valid boards and agrees with the popcount
    /// guard: fewer than five marks can never end the game.
    #[test]
    fn prop_result_total_with_popcount_guard(board in valid_board()) {
        let result = KIND.result_of(board);
        if board.count_ones() < 5 {
            prop_assert_eq!(result, GameResult::NotOver);
        }
        // A full board never reports NOT_OVER.
        if board.count_ones() == 9 {
            prop_assert!(result.is_over());
        }
    }

    /// A reported winner actually holds a complete line on its own plane.
    #[test]
    fn prop_winner_holds_a_line(board in valid_board()) {
        let masks: [u64; 8] = [
            0b111_000_000, 0b000_111_000, 0b000_000_111,
            0b100_100_100, 0b010_010_010, 0b001_001_001,
            0b100_010_001, 0b001_010_100,
        ];
        let plane = match KIND.result_of(board) {
            GameResult::Home => board.home_plane(9),
            GameResult::Away => board.away_plane(9),
            GameResult::Tie | GameResult::NotOver => return Ok(()),
        };
        prop_assert!(masks.iter().any(|&m| m & plane == m));
    }

    /// Adding exactly one mark to a board always passes the transition
    /// check; adding two or more never does.
    #[test]
    fn prop_transition_accepts_single_mark_only(
        board in valid_board(),
        first in 0u32..18,
        second in 0u32..18,
    ) {
        let one_more = Bitboard::new(board.state() | (1 << first));
        if one_more.count_ones() == board.count_ones() + 1 {
            prop_assert!(KIND.validate_transition(board, one_more).is_ok());
        }

        let two_more = Bitboard::new(board.state() | (1 << first) | (1 << second));
        if two_more.count_ones() == board.count_ones() + 2 {
            prop_assert!(KIND.validate_transition(board, two_more).is_err());
        }
    }
}
