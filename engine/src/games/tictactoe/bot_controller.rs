use super::board::get_available_moves;
use super::game_state::TicTacToeGameState;
use super::types::{Board, Mark, SearchResult, Sides};
use super::win_detector::{check_win, evaluate_status};

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const BOT_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub sides: Sides,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            sides: state.sides,
        }
    }
}

/// Picks the bot reply. `None` when the position is already decided.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    if evaluate_status(&input.board, input.sides).is_over() {
        return None;
    }
    minimax(&input.board, input.sides.bot, input.sides).position
}

/// Full-depth search with `mark` to move. The bot maximizes, the human minimizes,
/// and ties go to the lowest cell index. Scores are not discounted by depth.
///
/// The caller's board is never touched: the search runs on a private copy.
pub fn minimax(board: &Board, mark: Mark, sides: Sides) -> SearchResult {
    if mark != sides.human && mark != sides.bot {
        return SearchResult::terminal(DRAW_SCORE);
    }

    let mut scratch = *board;
    search(&mut scratch, mark, sides)
}

fn search(board: &mut Board, mark: Mark, sides: Sides) -> SearchResult {
    // Human win is checked first, so a board holding both lines scores -10.
    if check_win(board, sides.human).is_some() {
        return SearchResult::terminal(HUMAN_WIN_SCORE);
    }
    if check_win(board, sides.bot).is_some() {
        return SearchResult::terminal(BOT_WIN_SCORE);
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return SearchResult::terminal(DRAW_SCORE);
    }

    let is_maximizing = mark == sides.bot;
    let next_mark = if is_maximizing { sides.human } else { sides.bot };

    let mut best = SearchResult::terminal(if is_maximizing { i32::MIN } else { i32::MAX });

    for position in moves {
        board[position] = mark;
        let score = search(board, next_mark, sides).score;
        board[position] = Mark::Empty;

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                position: Some(position),
                score,
            };
        }
    }

    best
}
