use std::fmt;

use super::board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves};
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{LINES, Line, check_win, check_win_with_line};

/// A 3x3 game. `Clone` is a deep copy: the board is stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    turn_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn_count: 0,
        }
    }

    /// Builds a state from `(x, y, mark)` placements, ignoring any that
    /// target an occupied cell.
    pub fn from_marks(marks: &[(usize, usize, Mark)]) -> Self {
        let mut state = Self::new();
        for &(x, y, mark) in marks {
            state.apply_move(x, y, mark);
        }
        state
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lines(&self) -> &'static [Line] {
        &LINES
    }

    pub fn mark_at(&self, x: usize, y: usize) -> Option<Mark> {
        self.board.get(x)?.get(y).copied()
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        get_available_moves(&self.board)
    }

    /// Places `player` at `(x, y)`. A move onto an occupied or out-of-range
    /// cell, or with `Mark::Empty` as the player, is dropped without a trace.
    pub fn apply_move(&mut self, x: usize, y: usize, player: Mark) {
        if !player.is_player() {
            return;
        }
        if let Some(cell) = self.cell_mut(x, y)
            && *cell == Mark::Empty
        {
            *cell = player;
            self.turn_count += 1;
        }
    }

    /// Like [`apply_move`](Self::apply_move) but reports why a move was
    /// refused. Also refuses moves once the game is over.
    pub fn try_apply_move(&mut self, x: usize, y: usize, player: Mark) -> Result<(), String> {
        if !player.is_player() {
            return Err("An empty mark cannot be played".to_string());
        }
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        match self.mark_at(x, y) {
            None => Err(format!(
                "Position ({}, {}) is out of bounds, both coordinates must be below {}",
                x, y, BOARD_SIZE
            )),
            Some(Mark::Empty) => {
                self.apply_move(x, y, player);
                Ok(())
            }
            Some(_) => Err(format!("Cell ({}, {}) is already marked", x, y)),
        }
    }

    /// Clears `(x, y)` during search backtracking. Clearing an empty cell
    /// does nothing, so the turn count always matches the marks on the board.
    pub fn undo_move(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cell_mut(x, y)
            && *cell != Mark::Empty
        {
            *cell = Mark::Empty;
            self.turn_count -= 1;
        }
    }

    pub fn opponent(player: Mark) -> Mark {
        match player {
            Mark::O => Mark::X,
            _ => Mark::O,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_full(&self) -> bool {
        self.turn_count == CELL_COUNT
    }

    pub fn is_over(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    pub fn turn_to_move(&self) -> Mark {
        if self.turn_count % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            _ if self.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Mark> {
        self.board.get_mut(x)?.get_mut(y)
    }
}

impl fmt::Display for TicTacToeGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn Count: {}", self.turn_count)?;
        for column in &self.board {
            writeln!(f)?;
            let cells: Vec<String> = column.iter().map(|mark| mark.to_string()).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
