// Property-based tests for move legality, turn order and win detection.

use proptest::prelude::*;

use crate::error::GameError;
use crate::game::{Cell, GameState, GameStatus, Player};

/// Board dimensions from the 4x4 minimum up to a little past the standard size
fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (4usize..=9, 4usize..=8)
}

/// Column choices, some deliberately out of range
fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..11, 0..90)
}

/// Within every column the filled cells form one block resting on the bottom
fn assert_gravity(state: &GameState) -> Result<(), TestCaseError> {
    let board = state.board();
    for col in 0..board.width() {
        let filled = board.column_height(col);
        for row in 0..board.height() {
            let expect_filled = row >= board.height() - filled;
            prop_assert_eq!(
                board.get(row, col) != Cell::Empty,
                expect_filled,
                "gap in column {} at row {}",
                col,
                row
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the local four-line scan agrees with the exhaustive scan after
    /// every accepted move, and a failed move never changes the state.
    #[test]
    fn prop_win_detection_matches_full_scan(
        (width, height) in dimensions(),
        columns in moves(),
    ) {
        let mut state = GameState::new(width, height).unwrap();

        for col in columns {
            let before = state.clone();
            match state.drop_piece(col) {
                Ok(placement) => {
                    let mover = placement.player;
                    prop_assert_eq!(mover, before.active_player());

                    let full_scan = state.board().has_four_in_a_row(mover.to_cell());
                    prop_assert_eq!(
                        placement.status == GameStatus::Win(mover),
                        full_scan
                    );
                    prop_assert_eq!(state.check_win(placement.position), full_scan);
                    prop_assert!(!state.board().has_four_in_a_row(mover.other().to_cell()));

                    if placement.status == GameStatus::InProgress {
                        prop_assert_eq!(state.active_player(), mover.other());
                    } else {
                        prop_assert_eq!(state.active_player(), mover);
                    }
                }
                Err(err) => {
                    prop_assert_eq!(&state, &before);
                    let expected = if before.is_terminal() {
                        GameError::GameAlreadyOver
                    } else if col >= width {
                        GameError::ColumnOutOfRange { column: col, width }
                    } else {
                        GameError::ColumnFull(col)
                    };
                    prop_assert_eq!(err, expected);
                }
            }

            assert_gravity(&state)?;

            let ones = state.board().count(Cell::One);
            let twos = state.board().count(Cell::Two);
            prop_assert_eq!(ones + twos, state.move_count());
            prop_assert!(ones == twos || ones == twos + 1);
        }

        prop_assert_eq!(state.check_tie(), state.status() == GameStatus::Tie);
    }

    /// Property: a column with k empty cells takes exactly k pieces, bottom-up
    #[test]
    fn prop_column_fills_then_rejects(
        (width, height) in dimensions(),
        col_seed in any::<usize>(),
    ) {
        let col = col_seed % width;
        let mut state = GameState::new(width, height).unwrap();

        for i in 0..height {
            let placement = state.drop_piece(col).unwrap();
            prop_assert_eq!(placement.position.row, height - 1 - i);
            prop_assert_eq!(placement.status, GameStatus::InProgress);
        }
        prop_assert_eq!(state.drop_piece(col), Err(GameError::ColumnFull(col)));
    }

    /// Property: mirroring every move left-to-right gives the same result
    #[test]
    fn prop_outcome_symmetric_under_reflection(
        (width, height) in dimensions(),
        columns in prop::collection::vec(0usize..9, 0..90),
    ) {
        let mut state = GameState::new(width, height).unwrap();
        let mut mirrored = GameState::new(width, height).unwrap();

        for col in columns.into_iter().map(|c| c % width) {
            let a = state.drop_piece(col);
            let b = mirrored.drop_piece(width - 1 - col);
            prop_assert_eq!(a.is_ok(), b.is_ok());
            prop_assert_eq!(state.status(), mirrored.status());
        }
    }

    /// Property: reset after any sequence of moves equals a fresh game
    #[test]
    fn prop_reset_matches_new_game(
        (width, height) in dimensions(),
        columns in moves(),
    ) {
        let mut state = GameState::new(width, height).unwrap();
        for col in columns {
            let _ = state.drop_piece(col);
        }

        state.reset();
        prop_assert_eq!(&state, &GameState::new(width, height).unwrap());
        prop_assert_eq!(state.active_player(), Player::One);
        prop_assert_eq!(state.legal_columns().len(), width);
    }
}
