//! Tests for outcome evaluation over raw board snapshots.

use tictactoe_core::{Board, Outcome, Player, Position, Square, evaluate};

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(index, player) in marks {
        board.set(pos(index), Square::Occupied(player));
    }
    board
}

/// The eight winning index triples, in evaluation order.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[test]
fn test_every_line_wins_for_both_players() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let board = board_with(&line.map(|index| (index, player)));
            assert_eq!(
                evaluate(&board),
                Outcome::Win {
                    player,
                    line: line.map(pos),
                },
                "line {line:?} for {player} not detected"
            );
        }
    }
}

#[test]
fn test_empty_board_is_ongoing() {
    assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
}

#[test]
fn test_partial_board_is_ongoing() {
    let board = board_with(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
    assert_eq!(evaluate(&board), Outcome::Ongoing);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X X O / O O X / X O X
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::O),
        (3, Player::O),
        (4, Player::O),
        (5, Player::X),
        (6, Player::X),
        (7, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_evaluation_does_not_mutate_board() {
    let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
    let snapshot = board.clone();
    let _ = evaluate(&board);
    let _ = evaluate(&board);
    assert_eq!(board, snapshot);
}

#[test]
fn test_double_line_reports_first_in_scan_order() {
    // Not reachable through alternating play; the evaluator is still
    // total and deterministic over it.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::X),
        (3, Player::X),
        (4, Player::X),
        (5, Player::X),
    ]);
    assert_eq!(
        evaluate(&board).winning_line(),
        Some([pos(0), pos(1), pos(2)])
    );
}

#[test]
fn test_win_with_one_empty_square_is_not_ongoing() {
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::X),
        (3, Player::O),
        (4, Player::O),
    ]);
    assert_eq!(evaluate(&board).winner(), Some(Player::X));
}
