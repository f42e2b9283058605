use super::board::is_board_full;
use super::types::{Board, Mark, Sides, WinChances};
use super::win_detector::WINNING_LINES;

const TWO_IN_LINE_BONUS: u32 = 50;
const ONE_IN_LINE_BONUS: u32 = 25;
const MAX_CHANCE: u32 = 100;

/// Additive display-only estimate for `mark`. Open lines with two of `mark` add 50,
/// open lines with one add 25. The sum is not capped and may exceed 100.
pub fn win_chance(board: &Board, mark: Mark) -> u32 {
    if mark == Mark::Empty || is_board_full(board) {
        return 0;
    }

    WINNING_LINES
        .iter()
        .map(|line| {
            let own = line.iter().filter(|&&cell| board[cell] == mark).count();
            let empty = line.iter().filter(|&&cell| board[cell] == Mark::Empty).count();
            match (own, empty) {
                (2, 1) => TWO_IN_LINE_BONUS,
                (1, 2) => ONE_IN_LINE_BONUS,
                _ => 0,
            }
        })
        .sum()
}

pub fn estimate_win_chances(board: &Board, sides: Sides, clamp: bool) -> WinChances {
    let limit = |chance: u32| if clamp { chance.min(MAX_CHANCE) } else { chance };
    WinChances {
        human: limit(win_chance(board, sides.human)),
        bot: limit(win_chance(board, sides.bot)),
    }
}
