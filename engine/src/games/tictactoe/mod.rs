mod board;
mod bot_controller;
mod bot_type;
mod game_state;
mod match_runner;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves};
pub use bot_controller::{
    calculate_minimax_move, calculate_move, calculate_random_move, calculate_win_block_move,
    calculate_winning_move,
};
pub use bot_type::BotType;
pub use game_state::TicTacToeGameState;
pub use match_runner::{MatchTally, play_match};
pub use types::{GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, Line, check_win, check_win_with_line};
