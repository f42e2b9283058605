use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;

pub type Board = [Mark; BOARD_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Which mark plays the human role and which the bot role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sides {
    pub human: Mark,
    pub bot: Mark,
}

impl Sides {
    pub fn with_human(human: Mark) -> Result<Self, String> {
        let bot = human
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;
        Ok(Self { human, bot })
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self {
            human: Mark::X,
            bot: Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(position: usize, mark: Mark) -> Self {
        Self { position, mark }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon(WinningLine),
    BotWon(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::HumanWon(line) | GameStatus::BotWon(line) => Some(*line),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::HumanWon(line) => write!(f, "you won on {:?}", line.cells),
            GameStatus::BotWon(line) => write!(f, "you lost, bot won on {:?}", line.cells),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Result of a search: the chosen cell (absent at terminal positions) and its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinChances {
    pub human: u32,
    pub bot: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::HumanWon(_) => self.human_wins += 1,
            GameStatus::BotWon(_) => self.bot_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}
