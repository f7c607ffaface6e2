use tictactoe_engine::games::tictactoe::{BOARD_SIZE, GameMode, GameSession, Mark};

// empty cells show their 1-based number, winning cells are bracketed and the
// last move is parenthesized
pub fn render_board(session: &GameSession) -> String {
    let winning_line = session.winning_line();
    let last_move = session.last_move();
    let cells = session.board().cells();

    let rows: Vec<String> = cells
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match mark {
                        Mark::Empty => (index + 1).to_string(),
                        _ => mark.symbol().to_string(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else if last_move == Some(index) {
                        format!("({})", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn render_session(session: &GameSession) -> String {
    let mode = match session.mode() {
        GameMode::TwoPlayer => "two players".to_string(),
        GameMode::VsComputer => format!("vs computer ({:?})", session.difficulty()),
    };
    format!(
        "{}\n\n{}\n\n{}",
        mode,
        render_board(session),
        session.status_text()
    )
}
