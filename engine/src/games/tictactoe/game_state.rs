use super::board::{empty_board, is_valid_move};
use super::types::{BOARD_SIZE, Board, GameStatus, Mark, Move, Sides};
use super::win_detector::evaluate_status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub sides: Sides,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub history: Vec<Move>,
}

impl TicTacToeGameState {
    /// Fresh empty board with the human to move.
    pub fn new(sides: Sides) -> Self {
        Self {
            board: empty_board(),
            sides,
            current_mark: sides.human,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::with_capacity(BOARD_SIZE),
        }
    }

    pub fn place_mark(&mut self, mark: Mark, position: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {:?}'s turn", mark));
        }

        if position >= BOARD_SIZE {
            return Err(format!("Position {} out of bounds", position));
        }

        if !is_valid_move(&self.board, position) {
            return Err(format!("Cell {} is already marked", position));
        }

        let placed = Move::new(position, mark);
        self.board[position] = mark;
        self.last_move = Some(placed);
        self.history.push(placed);

        self.status = evaluate_status(&self.board, self.sides);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.sides.human {
            self.sides.bot
        } else {
            self.sides.human
        };
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.sides.human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::occupied_count;

    #[test]
    fn test_new_state_is_empty_with_human_to_move() {
        let state = TicTacToeGameState::new(Sides::default());
        assert_eq!(state.board, empty_board());
        assert!(state.is_human_turn());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = TicTacToeGameState::new(Sides::default());
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.place_mark(Mark::X, 0), Err("Not X's turn".to_string()));
        state.place_mark(Mark::O, 0).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(Move::new(0, Mark::O)));
        assert_eq!(occupied_count(&state.board), 2);
    }

    #[test]
    fn test_place_mark_rejects_occupied_and_out_of_bounds() {
        let mut state = TicTacToeGameState::new(Sides::default());
        state.place_mark(Mark::X, 4).unwrap();
        let before = state.clone();

        assert_eq!(state.place_mark(Mark::O, 4), Err("Cell 4 is already marked".to_string()));
        assert_eq!(state.place_mark(Mark::O, 9), Err("Position 9 out of bounds".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(Sides::default());
        for (mark, position) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            state.place_mark(mark, position).unwrap();
        }
        assert_eq!(state.status.winning_line().unwrap().cells, [0, 1, 2]);
        assert!(matches!(state.status, GameStatus::HumanWon(_)));
        assert!(state.place_mark(Mark::O, 5).is_err());
        assert_eq!(state.history.len(), 5);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = TicTacToeGameState::new(Sides::default());
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        for (turn, position) in moves.into_iter().enumerate() {
            let mark = if turn % 2 == 0 { Mark::X } else { Mark::O };
            state.place_mark(mark, position).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
    }
}
