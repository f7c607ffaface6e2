use super::board::Board;
use super::types::{GameOutcome, Line, Mark, WinningLine};

// rows, columns, diagonals
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            mark.player().map(|player| WinningLine::new(player, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(line) = check_win_with_line(board) {
        return GameOutcome::Won(line.player);
    }

    if board.is_full() {
        GameOutcome::Tied
    } else {
        GameOutcome::InProgress
    }
}
