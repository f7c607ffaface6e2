use crate::games::SessionRng;
use super::board::Board;
use super::types::{Difficulty, GameOutcome, MoveError, Player};
use super::win_detector::evaluate;

pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.7;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot: Player,
}

impl BotInput {
    pub fn new(board: Board, bot: Player) -> Self {
        Self { board, bot }
    }
}

pub fn select_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_OPTIMAL_PROBABILITY) {
                calculate_minimax_move(input)
            } else {
                calculate_random_move(input, rng)
            }
        }
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let available_moves = input.board.empty_indices();
    rng.choose(&available_moves)
        .copied()
        .ok_or(MoveError::NoMoveAvailable)
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, MoveError> {
    let bot = input.bot;
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.empty_indices() {
        board.set(index, bot);
        let score = minimax(&mut board, 0, false, bot);
        board.clear(index);

        // strict comparison keeps the lowest index on ties
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(MoveError::NoMoveAvailable)
}

// win: 10 - depth, loss: depth - 10, tie: 0
pub fn score(board: &Board, depth: i32, is_computer_turn: bool, computer: Player) -> i32 {
    let mut scratch = *board;
    minimax(&mut scratch, depth, is_computer_turn, computer)
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot: Player) -> i32 {
    match evaluate(board) {
        GameOutcome::Won(winner) if winner == bot => return WIN_SCORE - depth,
        GameOutcome::Won(_) => return depth - WIN_SCORE,
        GameOutcome::Tied => return 0,
        GameOutcome::InProgress => {}
    }

    let available_moves = board.empty_indices();
    if available_moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in available_moves {
            board.set(index, bot);
            let eval = minimax(board, depth + 1, false, bot);
            board.clear(index);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent = bot.opponent();
        let mut min_eval = i32::MAX;
        for index in available_moves {
            board.set(index, opponent);
            let eval = minimax(board, depth + 1, true, bot);
            board.clear(index);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
