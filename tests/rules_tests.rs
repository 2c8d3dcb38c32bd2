//! Win detection tests

use tui_games::core::rules::{announce, check_for_winner, outcome, win_lines};
use tui_games::core::Board;
use tui_games::types::{CellIndex, Outcome, Player};

fn fill(board: &mut Board, cells: &[(usize, usize)], player: Player) {
    for &(x, y) in cells {
        board[CellIndex::new(x, y)] = Some(player);
    }
}

#[test]
fn test_line_count_and_length() {
    for n in 2..=9 {
        let lines = win_lines(n);
        assert_eq!(lines.len(), 2 * n + 2);
        assert!(lines.iter().all(|line| line.len() == n));
    }
}

#[test]
fn test_every_line_wins_for_both_players() {
    let n = 4;
    for line in win_lines(n) {
        for player in [Player::Crosses, Player::Noughts] {
            let mut board = Board::new(n);
            for &idx in &line {
                board[idx] = Some(player);
            }
            assert_eq!(check_for_winner(&board), Some(player));
            assert_eq!(outcome(&board), Outcome::Winner(player));
        }
    }
}

#[test]
fn test_incomplete_line_is_not_a_win() {
    let mut board = Board::new(3);
    fill(&mut board, &[(0, 0), (1, 0)], Player::Crosses);
    fill(&mut board, &[(2, 0)], Player::Noughts);
    assert_eq!(check_for_winner(&board), None);
    assert_eq!(outcome(&board), Outcome::Ongoing);
}

#[test]
fn test_full_board_with_winner_is_not_a_draw() {
    let mut board = Board::new(3);
    fill(&mut board, &[(0, 0), (1, 0), (2, 0), (0, 2), (2, 1)], Player::Crosses);
    fill(&mut board, &[(0, 1), (1, 1), (1, 2), (2, 2)], Player::Noughts);
    assert!(board.is_full());
    assert_eq!(outcome(&board), Outcome::Winner(Player::Crosses));
}

#[test]
fn test_announce_messages() {
    let cases = [
        (Outcome::Winner(Player::Crosses), "Crosses have won!\n"),
        (Outcome::Winner(Player::Noughts), "Noughts have won!\n"),
        (Outcome::Draw, "This is a draw!\n"),
    ];
    for (result, expected) in cases {
        let mut out = Vec::new();
        assert!(announce(result, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    let mut out = Vec::new();
    assert!(!announce(Outcome::Ongoing, &mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn test_two_by_two_board() {
    let mut board = Board::new(2);
    fill(&mut board, &[(0, 0), (1, 1)], Player::Noughts);
    assert_eq!(outcome(&board), Outcome::Winner(Player::Noughts));
}
