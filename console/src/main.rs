mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{Difficulty, GameMode, TicTacToeSessionSettings};
use tictactoe_engine::{log, logger};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Two,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Two => GameMode::TwoPlayer,
            ModeArg::Computer => GameMode::VsComputer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    #[arg(long)]
    think_delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, mut settings: TicTacToeSessionSettings) -> TicTacToeSessionSettings {
        if let Some(mode) = self.mode {
            settings.mode = mode.into();
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty.into();
        }
        if let Some(think_delay_ms) = self.think_delay_ms {
            settings.think_delay_ms = think_delay_ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::get_config_manager(args.config.clone()).get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let settings = args.apply_overrides(config.game);
    settings.validate()?;

    log!(
        "Starting {:?} game, difficulty {:?}, think delay {} ms",
        settings.mode,
        settings.difficulty,
        settings.think_delay_ms
    );

    runner::run(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "tictactoe_console",
            "--mode",
            "two",
            "--difficulty",
            "easy",
            "--seed",
            "12",
        ]);

        let settings = args.apply_overrides(TicTacToeSessionSettings::default());

        assert_eq!(settings.mode, GameMode::TwoPlayer);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(
            settings.think_delay_ms,
            TicTacToeSessionSettings::default().think_delay_ms
        );
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["tictactoe_console"]);
        let configured = TicTacToeSessionSettings {
            mode: GameMode::VsComputer,
            difficulty: Difficulty::Hard,
            think_delay_ms: 42,
            seed: Some(5),
        };

        assert_eq!(args.apply_overrides(configured), configured);
    }
}
