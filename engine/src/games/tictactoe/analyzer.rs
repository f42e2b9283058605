use std::fmt;

use super::board::{empty_board, get_available_moves};
use super::bot_controller::minimax;
use super::types::{Board, Move, Sides};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveAnalysis {
    BetterMove(usize),
    NoBetterMove,
}

impl fmt::Display for MoveAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveAnalysis::BetterMove(position) => {
                write!(f, "The best move you could have made was position {}.", position)
            }
            MoveAnalysis::NoBetterMove => write!(f, "No possible move could have changed the result."),
        }
    }
}

/// How one human decision compares with the best option available at that point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceReview {
    pub turn: usize,
    pub played: usize,
    pub played_score: i32,
    pub best: usize,
    pub best_score: i32,
}

impl ChoiceReview {
    pub fn is_optimal(&self) -> bool {
        self.played_score == self.best_score
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostGameAnalysis {
    pub suggestion: MoveAnalysis,
    pub review: Vec<ChoiceReview>,
}

/// Scores each empty cell as a human placement followed by a bot search.
/// Lower is better for the human.
fn score_human_options(board: &Board, sides: Sides) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    get_available_moves(board)
        .into_iter()
        .map(|position| {
            scratch[position] = sides.human;
            let score = minimax(&scratch, sides.bot, sides).score;
            scratch[position] = board[position];
            (position, score)
        })
        .collect()
}

fn best_for_human(options: &[(usize, i32)]) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;
    for &(position, score) in options {
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((position, score));
        }
    }
    best
}

pub fn analyze_best_move(final_board: &Board, sides: Sides) -> MoveAnalysis {
    match best_for_human(&score_human_options(final_board, sides)) {
        Some((position, _)) => MoveAnalysis::BetterMove(position),
        None => MoveAnalysis::NoBetterMove,
    }
}

/// Replays `history` from an empty board and reviews every human choice point.
pub fn review_choices(history: &[Move], sides: Sides) -> Vec<ChoiceReview> {
    let mut board = empty_board();
    let mut reviews = Vec::new();

    for (turn, mv) in history.iter().enumerate() {
        if mv.mark == sides.human {
            let options = score_human_options(&board, sides);
            let played_score = options
                .iter()
                .find(|&&(position, _)| position == mv.position)
                .map(|&(_, score)| score);

            if let (Some(played_score), Some((best, best_score))) =
                (played_score, best_for_human(&options))
            {
                reviews.push(ChoiceReview {
                    turn,
                    played: mv.position,
                    played_score,
                    best,
                    best_score,
                });
            }
        }
        board[mv.position] = mv.mark;
    }

    reviews
}
