use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::SessionRng;
use super::game_state::GameSession;
use super::types::{Difficulty, GameMode};

pub const MAX_THINK_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub think_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    pub fn create_session(&self) -> GameSession {
        GameSession::new(self.mode, self.difficulty, SessionRng::from_seed(self.seed))
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Medium,
            think_delay_ms: 500,
            seed: None,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms ({}) must not exceed {}",
                self.think_delay_ms, MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}
