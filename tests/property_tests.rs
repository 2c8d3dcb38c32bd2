//! Properties of the rules over random legal and illegal play.
//!
//! Games are generated with the deterministic `SimpleRng`, so every run
//! checks the same sequences.

use tui_games::core::coords::{cell_center, cell_hovered_by};
use tui_games::core::rules::win_lines;
use tui_games::core::{outcome, try_to_play, Board, SimpleRng};
use tui_games::types::{CellIndex, Outcome, Player, Vec2, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

const GAMES_PER_SIZE: u32 = 50;

/// A pointer position on a 1/64 grid covering `[-1.5, 1.5)²`.
fn random_point(rng: &mut SimpleRng) -> Vec2 {
    let coord = |rng: &mut SimpleRng| rng.next_range(193) as f32 / 64.0 - 1.5;
    let x = coord(rng);
    Vec2::new(x, coord(rng))
}

fn line_owner(board: &Board) -> Option<Player> {
    win_lines(board.size()).into_iter().find_map(|line| {
        let first = board[line[0]]?;
        line.iter().all(|idx| board[*idx] == Some(first)).then_some(first)
    })
}

#[test]
fn test_coordinate_round_trip() {
    for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for y in 0..n {
            for x in 0..n {
                let idx = CellIndex::new(x, y);
                assert_eq!(cell_hovered_by(cell_center(idx, n), n), Some(idx));
            }
        }
    }
}

#[test]
fn test_hover_defined_iff_inside() {
    let mut rng = SimpleRng::new(11);
    for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for _ in 0..500 {
            let p = random_point(&mut rng);
            let inside = (-1.0..1.0).contains(&p.x) && (-1.0..1.0).contains(&p.y);
            assert_eq!(cell_hovered_by(p, n).is_some(), inside, "{:?} on {n}x{n}", p);
        }
    }
}

#[test]
fn test_moves_never_overwrite_and_turns_alternate() {
    let mut rng = SimpleRng::new(2024);
    for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for _ in 0..GAMES_PER_SIZE {
            let mut board = Board::new(n);
            let mut player = Player::FIRST;
            let mut history: Vec<(CellIndex, Player)> = Vec::new();

            for _ in 0..4 * n * n {
                let p = random_point(&mut rng);
                let before = board.clone();
                let mover = player;
                let target = cell_hovered_by(p, n);

                let played = try_to_play(p, &mut board, &mut player);

                let legal = target.is_some_and(|idx| before[idx].is_none());
                assert_eq!(played, legal);
                if played {
                    let idx = target.unwrap();
                    assert_eq!(player, mover.other());
                    assert_eq!(board[idx], Some(mover));
                    history.push((idx, mover));
                } else {
                    assert_eq!(player, mover);
                    assert_eq!(board, before);
                }
            }

            // Every occupied cell was written by exactly one move.
            assert_eq!(board.occupied_count(), history.len());
            for (idx, who) in &history {
                assert_eq!(board[*idx], Some(*who));
            }
        }
    }
}

#[test]
fn test_winner_iff_full_line_and_draw_exclusive() {
    let mut rng = SimpleRng::new(7);
    for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for _ in 0..GAMES_PER_SIZE {
            // Arbitrary positions, not necessarily reachable in play.
            let mut board = Board::new(n);
            for y in 0..n {
                for x in 0..n {
                    board[CellIndex::new(x, y)] = match rng.next_range(3) {
                        0 => None,
                        1 => Some(Player::Crosses),
                        _ => Some(Player::Noughts),
                    };
                }
            }

            let result = outcome(&board);
            match line_owner(&board) {
                Some(_) => assert!(matches!(result, Outcome::Winner(_))),
                None if board.is_full() => assert_eq!(result, Outcome::Draw),
                None => assert_eq!(result, Outcome::Ongoing),
            }
            if let Outcome::Winner(p) = result {
                let owned = win_lines(n)
                    .iter()
                    .any(|line| line.iter().all(|idx| board[*idx] == Some(p)));
                assert!(owned);
            }
        }
    }
}

#[test]
fn test_random_games_end_within_n_squared_moves() {
    let mut rng = SimpleRng::new(99);
    for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for _ in 0..GAMES_PER_SIZE {
            let mut board = Board::new(n);
            let mut player = Player::FIRST;
            let mut moves = 0;
            while outcome(&board) == Outcome::Ongoing {
                let empty: Vec<_> = board.empty_cells().collect();
                let idx = *rng.choose(&empty).unwrap();
                assert!(try_to_play(cell_center(idx, n), &mut board, &mut player));
                moves += 1;
                assert!(moves <= n * n);
            }
            assert!(outcome(&board).is_terminal());
        }
    }
}
