use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};

use tictactoe_engine::games::tictactoe::{
    ComputerMove, ComputerTurnScheduler, Difficulty, GameMode, GameSession, MoveError,
    SharedSession, TicTacToeSessionSettings,
};
use tictactoe_engine::log;

use crate::command::{ConsoleCommand, HELP_TEXT, parse_command};
use crate::render::render_session;

pub struct CommandResult {
    pub output: String,
    pub quit: bool,
}

impl CommandResult {
    fn output(output: String) -> Self {
        Self { output, quit: false }
    }

    fn quit() -> Self {
        Self {
            output: "Bye!".to_string(),
            quit: true,
        }
    }
}

pub struct ConsoleApp {
    session: SharedSession,
    scheduler: ComputerTurnScheduler,
}

impl ConsoleApp {
    pub fn new(
        settings: &TicTacToeSessionSettings,
    ) -> (Self, mpsc::UnboundedReceiver<ComputerMove>) {
        let session = Arc::new(Mutex::new(settings.create_session()));
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = ComputerTurnScheduler::new(session.clone(), settings.think_delay(), tx);
        (Self { session, scheduler }, rx)
    }

    pub async fn render(&self) -> String {
        render_session(&*self.session.lock().await)
    }

    pub async fn handle_command(&mut self, command: ConsoleCommand) -> CommandResult {
        let mut session = self.session.lock().await;

        match command {
            ConsoleCommand::Place { index } => match session.apply_human_move(index) {
                Ok(_) => {
                    let mut output = render_session(&session);
                    if let Some(epoch) = session.pending_computer_turn() {
                        self.scheduler.schedule(epoch);
                        output.push_str("\nComputer is thinking...");
                    }
                    CommandResult::output(output)
                }
                Err(MoveError::InvalidMove { reason, .. }) => {
                    CommandResult::output(format!("Cell {} rejected: {}", index + 1, reason))
                }
                Err(e) => CommandResult::output(e.to_string()),
            },
            ConsoleCommand::NewGame => {
                let (mode, difficulty) = (session.mode(), session.difficulty());
                restart(&mut self.scheduler, &mut session, mode, difficulty)
            }
            ConsoleCommand::SetMode(mode) => {
                let difficulty = session.difficulty();
                restart(&mut self.scheduler, &mut session, mode, difficulty)
            }
            ConsoleCommand::SetDifficulty(difficulty) => {
                let mode = session.mode();
                restart(&mut self.scheduler, &mut session, mode, difficulty)
            }
            ConsoleCommand::Help => CommandResult::output(HELP_TEXT.to_string()),
            ConsoleCommand::Quit => {
                self.scheduler.cancel();
                CommandResult::quit()
            }
        }
    }

    pub async fn handle_computer_move(&self, computer_move: ComputerMove) -> Option<String> {
        let session = self.session.lock().await;
        if computer_move.epoch != session.epoch() {
            return None;
        }
        Some(format!(
            "Computer played {}\n\n{}",
            computer_move.index + 1,
            render_session(&session)
        ))
    }
}

fn restart(
    scheduler: &mut ComputerTurnScheduler,
    session: &mut GameSession,
    mode: GameMode,
    difficulty: Difficulty,
) -> CommandResult {
    scheduler.cancel();
    session.new_game(mode, difficulty);
    CommandResult::output(render_session(session))
}

pub async fn run(settings: TicTacToeSessionSettings) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, mut computer_moves) = ConsoleApp::new(&settings);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP_TEXT);
    println!("{}", app.render().await);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(command) => {
                        let result = app.handle_command(command).await;
                        println!("{}", result.output);
                        if result.quit {
                            break;
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Some(computer_move) = computer_moves.recv() => {
                if let Some(output) = app.handle_computer_move(computer_move).await {
                    println!("{}", output);
                }
            }
        }
    }

    Ok(())
}
