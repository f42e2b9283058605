use crate::log;

use super::analyzer::{PostGameAnalysis, analyze_best_move, review_choices};
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::game_state::TicTacToeGameState;
use super::heuristic::estimate_win_chances;
use super::settings::TicTacToeSettings;
use super::types::{GameStatus, Move, Scoreboard, Sides, WinChances};

/// Everything the presentation layer needs after one human move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The human move, followed by the bot reply when one was made.
    pub placed: Vec<Move>,
    pub status: GameStatus,
    /// Present when the game was still running after the human move.
    pub win_chances: Option<WinChances>,
    /// Present once the game has ended.
    pub analysis: Option<PostGameAnalysis>,
}

/// Owns the board for one player against the minimax bot, game after game.
pub struct GameEngine {
    settings: TicTacToeSettings,
    state: TicTacToeGameState,
    scoreboard: Scoreboard,
}

impl GameEngine {
    pub fn new(settings: TicTacToeSettings) -> Result<Self, String> {
        let sides = settings.sides()?;
        log!("New game, human plays {:?}", sides.human);
        Ok(Self {
            settings,
            state: TicTacToeGameState::new(sides),
            scoreboard: Scoreboard::default(),
        })
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn sides(&self) -> Sides {
        self.state.sides
    }

    /// Clears the board and history. The scoreboard is kept.
    pub fn new_game(&mut self) {
        self.state = TicTacToeGameState::new(self.state.sides);
        log!("New game, human plays {:?}", self.state.sides.human);
    }

    /// Applies a human move and, if the game goes on, the bot reply.
    /// A rejected move leaves the state untouched.
    pub fn submit_move(&mut self, position: usize) -> Result<TurnResult, String> {
        let sides = self.state.sides;

        if let Err(e) = self.state.place_mark(sides.human, position) {
            log!("Rejected move at {}: {}", position, e);
            return Err(e);
        }

        let mut placed = vec![Move::new(position, sides.human)];
        let mut win_chances = None;

        if self.state.status == GameStatus::InProgress {
            let chances =
                estimate_win_chances(&self.state.board, sides, self.settings.clamp_win_chance);
            win_chances = Some(chances);
            placed.extend(self.play_bot_turn()?);
        }

        let analysis = if self.state.status.is_over() {
            Some(self.finish_game())
        } else {
            None
        };

        Ok(TurnResult {
            placed,
            status: self.state.status,
            win_chances,
            analysis,
        })
    }

    fn play_bot_turn(&mut self) -> Result<Option<Move>, String> {
        let input = BotInput::from_game_state(&self.state);
        let Some(position) = calculate_minimax_move(&input) else {
            return Ok(None);
        };

        let bot = self.state.sides.bot;
        self.state.place_mark(bot, position)?;
        log!("Bot plays {}", position);
        Ok(Some(Move::new(position, bot)))
    }

    fn finish_game(&mut self) -> PostGameAnalysis {
        let status = self.state.status;
        self.scoreboard.record(&status);
        log!(
            "Game over: {} (human {}, bot {}, draws {})",
            status,
            self.scoreboard.human_wins,
            self.scoreboard.bot_wins,
            self.scoreboard.draws
        );

        let sides = self.state.sides;
        let suggestion = analyze_best_move(&self.state.board, sides);
        let review = if self.settings.analyze_history {
            review_choices(&self.state.history, sides)
        } else {
            Vec::new()
        };
        log!("{}", suggestion);

        PostGameAnalysis { suggestion, review }
    }
}
