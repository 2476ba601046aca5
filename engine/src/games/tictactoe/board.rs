use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Indexed as `board[x][y]`.
pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// Empty cells with `x` as the outer loop and `y` as the inner one.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (x, column) in board.iter().enumerate() {
        for (y, &cell) in column.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(x, y));
            }
        }
    }
    moves
}
