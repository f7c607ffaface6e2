use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, select_move};
use super::types::{
    Difficulty, GameMode, GameOutcome, InvalidMoveReason, MoveError, Player, WinningLine,
};
use super::win_detector::{check_win_with_line, evaluate};

pub const COMPUTER_PLAYER: Player = Player::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(GameOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerMove {
    pub epoch: u64,
    pub index: usize,
    pub outcome: GameOutcome,
}

pub struct GameSession {
    board: Board,
    mode: GameMode,
    difficulty: Difficulty,
    current_player: Player,
    phase: TurnPhase,
    last_move: Option<usize>,
    epoch: u64,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: SessionRng) -> Self {
        log!(
            "New {:?} game, difficulty {:?}, seed {}",
            mode,
            difficulty,
            rng.seed()
        );
        Self {
            board: Board::new(),
            mode,
            difficulty,
            current_player: Player::X,
            phase: TurnPhase::AwaitingHuman,
            last_move: None,
            epoch: 0,
            rng,
        }
    }

    pub fn new_game(&mut self, mode: GameMode, difficulty: Difficulty) -> u64 {
        self.board = Board::new();
        self.mode = mode;
        self.difficulty = difficulty;
        self.current_player = Player::X;
        self.phase = TurnPhase::AwaitingHuman;
        self.last_move = None;
        self.epoch += 1;

        log!(
            "New {:?} game, difficulty {:?}, epoch {}",
            mode,
            difficulty,
            self.epoch
        );
        self.epoch
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        match self.phase {
            TurnPhase::AwaitingHuman => {}
            TurnPhase::AwaitingComputer => {
                return Err(MoveError::invalid(index, InvalidMoveReason::NotHumanTurn));
            }
            TurnPhase::GameOver(_) => {
                return Err(MoveError::invalid(index, InvalidMoveReason::GameOver));
            }
        }

        self.apply_move(index).inspect_err(|e| {
            log!("Player {} move rejected: {}", self.current_player, e);
        })
    }

    pub fn play_computer_turn(&mut self, epoch: u64) -> Result<Option<ComputerMove>, MoveError> {
        if epoch != self.epoch {
            log!(
                "Ignoring computer turn for stale epoch {} (current {})",
                epoch,
                self.epoch
            );
            return Ok(None);
        }
        if self.phase != TurnPhase::AwaitingComputer {
            return Ok(None);
        }

        let input = BotInput::new(self.board, self.current_player);
        let index = select_move(self.difficulty, &input, &mut self.rng)?;
        let outcome = self.apply_move(index)?;

        log!(
            "Computer ({:?}) played {} -> {:?}",
            self.difficulty,
            index,
            outcome
        );
        Ok(Some(ComputerMove {
            epoch,
            index,
            outcome,
        }))
    }

    pub fn pending_computer_turn(&self) -> Option<u64> {
        (self.phase == TurnPhase::AwaitingComputer).then_some(self.epoch)
    }

    fn apply_move(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        self.board.place(index, self.current_player)?;
        self.last_move = Some(index);

        let outcome = evaluate(&self.board);
        if outcome.is_over() {
            self.phase = TurnPhase::GameOver(outcome);
            return Ok(outcome);
        }

        self.current_player = self.current_player.opponent();
        self.phase = if self.is_computer(self.current_player) {
            TurnPhase::AwaitingComputer
        } else {
            TurnPhase::AwaitingHuman
        };
        Ok(outcome)
    }

    pub fn is_computer(&self, player: Player) -> bool {
        self.mode == GameMode::VsComputer && player == COMPUTER_PLAYER
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            TurnPhase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            GameOutcome::Won(player) => format!("Winner Player - {}", player),
            GameOutcome::Tied => "Game Tied !".to_string(),
            GameOutcome::InProgress => format!("Current Player - {}", self.current_player),
        }
    }
}
