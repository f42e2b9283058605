mod analyzer;
mod board;
mod bot_controller;
mod game_state;
mod heuristic;
mod session;
mod settings;
mod types;
mod win_detector;

pub use analyzer::{ChoiceReview, MoveAnalysis, PostGameAnalysis, analyze_best_move, review_choices};
pub use board::{
    empty_board, get_available_moves, is_board_full, is_valid_move, occupied_count, parse_board,
    render_board,
};
pub use bot_controller::{
    BOT_WIN_SCORE, BotInput, DRAW_SCORE, HUMAN_WIN_SCORE, calculate_minimax_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use heuristic::{estimate_win_chances, win_chance};
pub use session::{GameEngine, TurnResult};
pub use settings::{CONFIG_FILE, TicTacToeSettings, get_config_manager};
pub use types::{
    BOARD_SIZE, Board, GameStatus, Mark, Move, Scoreboard, SearchResult, Sides, WinChances,
    WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, evaluate_status};
