use super::board::Board;
use super::types::{Mark, Position, WinningLine};

pub type Line = [Position; 3];

const fn column(x: usize) -> Line {
    [Position::new(x, 0), Position::new(x, 1), Position::new(x, 2)]
}

const fn row(y: usize) -> Line {
    [Position::new(0, y), Position::new(1, y), Position::new(2, y)]
}

/// Every winning triple. The order is the tie-break order for win
/// detection and for the line-scanning bots.
pub const LINES: [Line; 8] = [
    column(0),
    column(1),
    column(2),
    row(0),
    row(1),
    row(2),
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|pos| board[pos.x][pos.y]);
        (a != Mark::Empty && a == b && b == c).then(|| WinningLine::new(a, *line))
    })
}
