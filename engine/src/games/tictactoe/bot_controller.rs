use crate::games::SessionRng;

use super::bot_type::BotType;
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Position};
use super::win_detector::Line;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

/// Picks a move for `player`. Returns `None` only when no cell is free.
pub fn calculate_move(
    bot_type: BotType,
    state: &TicTacToeGameState,
    player: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Random => calculate_random_move(state, rng),
        BotType::WinningMove => calculate_winning_move(state, player, rng),
        BotType::WinBlockLose => calculate_win_block_move(state, player, rng),
        BotType::Minimax => calculate_minimax_move(state, player),
    }
}

pub fn calculate_random_move(state: &TicTacToeGameState, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = state.legal_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Completes the first line holding two of `player`'s marks and one gap,
/// otherwise plays randomly.
pub fn calculate_winning_move(
    state: &TicTacToeGameState,
    player: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    state
        .lines()
        .iter()
        .find_map(|line| {
            let counts = LineCounts::scan(state, line, player);
            counts.completes(counts.own)
        })
        .or_else(|| calculate_random_move(state, rng))
}

/// Like [`calculate_winning_move`], but a line where the opponent is one
/// mark short of winning is blocked. Within a line the win is preferred.
pub fn calculate_win_block_move(
    state: &TicTacToeGameState,
    player: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    state
        .lines()
        .iter()
        .find_map(|line| {
            let counts = LineCounts::scan(state, line, player);
            counts
                .completes(counts.own)
                .or_else(|| counts.completes(counts.opposing))
        })
        .or_else(|| calculate_random_move(state, rng))
}

/// Exhaustive minimax over the rest of the game.
///
/// Works on a private copy of `state` with apply/undo pairs. The first move
/// with the strictly best score wins ties.
pub fn calculate_minimax_move(state: &TicTacToeGameState, player: Mark) -> Option<Position> {
    let opponent = TicTacToeGameState::opponent(player);
    let mut scratch = state.clone();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in state.legal_moves() {
        scratch.apply_move(pos.x, pos.y, player);
        let score = minimax(&mut scratch, opponent, player);
        scratch.undo_move(pos.x, pos.y);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(state: &mut TicTacToeGameState, to_move: Mark, bot_mark: Mark) -> i32 {
    if state.is_over() {
        return match state.winner() {
            Some(winner) if winner == bot_mark => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => DRAW_SCORE,
        };
    }

    let next = TicTacToeGameState::opponent(to_move);
    let is_maximizing = to_move == bot_mark;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in state.legal_moves() {
        state.apply_move(pos.x, pos.y, to_move);
        let eval = minimax(state, next, bot_mark);
        state.undo_move(pos.x, pos.y);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}

struct LineCounts {
    own: usize,
    opposing: usize,
    empty: usize,
    last_empty: Option<Position>,
}

impl LineCounts {
    fn scan(state: &TicTacToeGameState, line: &Line, player: Mark) -> Self {
        let opponent = TicTacToeGameState::opponent(player);
        let mut counts = LineCounts {
            own: 0,
            opposing: 0,
            empty: 0,
            last_empty: None,
        };
        for &pos in line {
            match state.board()[pos.x][pos.y] {
                Mark::Empty => {
                    counts.empty += 1;
                    counts.last_empty = Some(pos);
                }
                mark if mark == player => counts.own += 1,
                mark if mark == opponent => counts.opposing += 1,
                _ => {}
            }
        }
        counts
    }

    fn completes(&self, marks: usize) -> Option<Position> {
        if marks == 2 && self.empty == 1 {
            self.last_empty
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SessionRng {
        SessionRng::new(42)
    }

    #[test]
    fn test_random_move_is_legal() {
        let state = TicTacToeGameState::from_marks(&[(0, 0, Mark::X), (1, 1, Mark::O)]);
        let mut rng = rng();
        for _ in 0..50 {
            let pos = calculate_random_move(&state, &mut rng).unwrap();
            assert_eq!(state.mark_at(pos.x, pos.y), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_random_move_covers_every_free_cell() {
        let state = TicTacToeGameState::from_marks(&[(2, 2, Mark::X)]);
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(calculate_random_move(&state, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_winning_move_completes_line() {
        let state = TicTacToeGameState::from_marks(&[
            (0, 0, Mark::X),
            (2, 2, Mark::O),
            (0, 1, Mark::X),
        ]);
        assert_eq!(
            calculate_winning_move(&state, Mark::X, &mut rng()),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_winning_move_ignores_opponent_threat() {
        let state = TicTacToeGameState::from_marks(&[
            (1, 0, Mark::O),
            (1, 1, Mark::O),
            (2, 2, Mark::X),
        ]);
        let mut rng = rng();
        // Without a winning line the choice is random; it must still be legal.
        let pos = calculate_winning_move(&state, Mark::X, &mut rng).unwrap();
        assert_eq!(state.mark_at(pos.x, pos.y), Some(Mark::Empty));
    }

    #[test]
    fn test_win_block_blocks_opponent() {
        let state = TicTacToeGameState::from_marks(&[
            (0, 0, Mark::X),
            (1, 0, Mark::O),
            (2, 2, Mark::X),
            (1, 1, Mark::O),
        ]);
        assert_eq!(state.turn_to_move(), Mark::X);
        // X has (0,0) and (2,2) with (1,1) taken, so there is nothing to win.
        assert_eq!(
            calculate_win_block_move(&state, Mark::X, &mut rng()),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_win_block_prefers_earlier_line() {
        // Column 0 lets O block X, column 2 lets O win. Column 0 comes first.
        let state = TicTacToeGameState::from_marks(&[
            (0, 0, Mark::X),
            (2, 0, Mark::O),
            (0, 1, Mark::X),
            (2, 1, Mark::O),
            (1, 2, Mark::X),
        ]);
        assert_eq!(
            calculate_win_block_move(&state, Mark::O, &mut rng()),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_win_block_takes_win_before_later_block() {
        // Column 0 wins for X, column 1 would only block O.
        let state = TicTacToeGameState::from_marks(&[
            (0, 0, Mark::X),
            (1, 0, Mark::O),
            (0, 1, Mark::X),
            (1, 1, Mark::O),
        ]);
        assert_eq!(
            calculate_win_block_move(&state, Mark::X, &mut rng()),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let state = TicTacToeGameState::from_marks(&[
            (2, 0, Mark::X),
            (1, 0, Mark::O),
            (2, 1, Mark::X),
            (1, 1, Mark::O),
        ]);
        // (1,2) only blocks; (2,2) wins.
        assert_eq!(
            calculate_minimax_move(&state, Mark::X),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_minimax_blocks_forced_loss() {
        let state = TicTacToeGameState::from_marks(&[
            (2, 0, Mark::X),
            (1, 1, Mark::O),
            (2, 1, Mark::X),
        ]);
        assert_eq!(
            calculate_minimax_move(&state, Mark::O),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn test_minimax_answers_centre_with_corner() {
        let state = TicTacToeGameState::from_marks(&[(1, 1, Mark::X)]);
        assert_eq!(
            calculate_minimax_move(&state, Mark::O),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_minimax_leaves_caller_state_untouched() {
        let state = TicTacToeGameState::from_marks(&[(1, 1, Mark::X)]);
        let before = state.clone();
        assert!(calculate_minimax_move(&state, Mark::O).is_some());
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut state = TicTacToeGameState::new();
        for (i, pos) in TicTacToeGameState::new().legal_moves().into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            state.apply_move(pos.x, pos.y, mark);
        }
        let mut rng = rng();
        for bot in BotType::ALL {
            assert_eq!(calculate_move(bot, &state, Mark::X, &mut rng), None);
        }
    }
}
