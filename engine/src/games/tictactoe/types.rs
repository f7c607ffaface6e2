use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mark().symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Tied,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

pub type Line = [usize; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: Line,
}

impl WinningLine {
    pub fn new(player: Player, cells: Line) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    GameOver,
    NotHumanTurn,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfRange => "position out of bounds",
            InvalidMoveReason::Occupied => "cell is already marked",
            InvalidMoveReason::GameOver => "game is already over",
            InvalidMoveReason::NotHumanTurn => "computer is still thinking",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },
    NoMoveAvailable,
}

impl MoveError {
    pub fn invalid(index: usize, reason: InvalidMoveReason) -> Self {
        MoveError::InvalidMove { index, reason }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at {}: {}", index, reason)
            }
            MoveError::NoMoveAvailable => f.write_str("No empty cell left to play"),
        }
    }
}

impl std::error::Error for MoveError {}
