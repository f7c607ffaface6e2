mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, MEDIUM_OPTIMAL_PROBABILITY, calculate_minimax_move, calculate_random_move, score,
    select_move,
};
pub use game_state::{COMPUTER_PLAYER, ComputerMove, GameSession, TurnPhase};
pub use session::{ComputerTurnScheduler, SharedSession};
pub use settings::{MAX_THINK_DELAY_MS, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, GameMode, GameOutcome, InvalidMoveReason, Line, Mark,
    MoveError, Player, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win_with_line, evaluate};
