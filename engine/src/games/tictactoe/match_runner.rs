use crate::games::SessionRng;

use super::bot_controller::calculate_move;
use super::bot_type::BotType;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Mark};

/// Plays a full game between two bots from an empty board and returns the
/// final position.
pub fn play_match(x_bot: BotType, o_bot: BotType, rng: &mut SessionRng) -> TicTacToeGameState {
    let mut state = TicTacToeGameState::new();

    while !state.is_over() {
        let player = state.turn_to_move();
        let bot = match player {
            Mark::X => x_bot,
            _ => o_bot,
        };
        let Some(pos) = calculate_move(bot, &state, player, rng) else {
            break;
        };
        state.apply_move(pos.x, pos.y, player);
    }

    state
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Unfinished games are not counted.
    pub fn record(&mut self, state: &TicTacToeGameState) {
        match state.status() {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }
}
