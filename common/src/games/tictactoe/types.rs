use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
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

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_active(&self) -> bool {
        *self == GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Who controls the O mark. X is always the first human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    TwoHuman,
    HumanVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerRole {
    Player1,
    Player2,
    Bot,
}

impl PlayerRole {
    pub fn for_mark(mark: Mark, mode: GameMode) -> Option<PlayerRole> {
        match (mark, mode) {
            (Mark::X, _) => Some(PlayerRole::Player1),
            (Mark::O, GameMode::TwoHuman) => Some(PlayerRole::Player2),
            (Mark::O, GameMode::HumanVsBot) => Some(PlayerRole::Bot),
            (Mark::Empty, _) => None,
        }
    }

    pub fn controller(&self) -> Controller {
        match self {
            PlayerRole::Player1 | PlayerRole::Player2 => Controller::Human,
            PlayerRole::Bot => Controller::Bot,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Bot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    TurnPassed { next: Mark },
    Won(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds(usize),
    CellOccupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}
