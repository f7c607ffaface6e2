use tictactoe_engine::games::tictactoe::{CELL_COUNT, Difficulty, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place { index: usize },
    NewGame,
    SetMode(GameMode),
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (cells numbered left to right, top to bottom)
  new                 start a new game
  mode two|computer   switch mode and start a new game
  level easy|medium|hard
                      switch difficulty and start a new game
  help                show this text
  quit                leave";

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Empty command".to_string());
    };
    let argument = words.next();

    if let Ok(cell) = head.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&cell) {
            return Ok(ConsoleCommand::Place { index: cell - 1 });
        }
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    match head.to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(ConsoleCommand::NewGame),
        "help" | "h" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
        "mode" => parse_mode(argument).map(ConsoleCommand::SetMode),
        "level" | "difficulty" => parse_difficulty(argument).map(ConsoleCommand::SetDifficulty),
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

fn parse_mode(argument: Option<&str>) -> Result<GameMode, String> {
    match argument.map(str::to_ascii_lowercase).as_deref() {
        Some("two" | "2p" | "pvp") => Ok(GameMode::TwoPlayer),
        Some("computer" | "cpu" | "ai") => Ok(GameMode::VsComputer),
        _ => Err("Usage: mode two|computer".to_string()),
    }
}

fn parse_difficulty(argument: Option<&str>) -> Result<Difficulty, String> {
    match argument.map(str::to_ascii_lowercase).as_deref() {
        Some("easy") => Ok(Difficulty::Easy),
        Some("medium") => Ok(Difficulty::Medium),
        Some("hard") => Ok(Difficulty::Hard),
        _ => Err("Usage: level easy|medium|hard".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(ConsoleCommand::Place { index: 0 }));
        assert_eq!(parse_command(" 9 "), Ok(ConsoleCommand::Place { index: 8 }));
    }

    #[test]
    fn test_cell_out_of_range() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("NEW"), Ok(ConsoleCommand::NewGame));
        assert_eq!(parse_command("q"), Ok(ConsoleCommand::Quit));
        assert_eq!(
            parse_command("mode two"),
            Ok(ConsoleCommand::SetMode(GameMode::TwoPlayer))
        );
        assert_eq!(
            parse_command("level Hard"),
            Ok(ConsoleCommand::SetDifficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn test_bad_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("mode").is_err());
        assert!(parse_command("level impossible").is_err());
        assert!(parse_command("jump").is_err());
    }
}
