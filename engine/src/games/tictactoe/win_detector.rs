use super::board::is_board_full;
use super::types::{Board, GameStatus, Mark, Sides, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line, in `WINNING_LINES` order, fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&cell| board[cell] == mark))
        .map(|&cells| WinningLine::new(mark, cells))
}

/// Human win is checked before bot win, and both before the full-board draw.
pub fn evaluate_status(board: &Board, sides: Sides) -> GameStatus {
    if let Some(line) = check_win(board, sides.human) {
        return GameStatus::HumanWon(line);
    }
    if let Some(line) = check_win(board, sides.bot) {
        return GameStatus::BotWon(line);
    }
    if is_board_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
