//! Interactive terminal front-end for the gomoku engine.
//!
//! Thin glue over the library: it renders snapshots, routes between the
//! menu, a game in progress and the history view, and owns no game logic.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gomoku::{
    load_board_size, reconstruct, save_board_size, BoardView, FileStorage, GameSession,
    GameStatus, GameStore, LeaveOutcome, ReplayBoard, Stone, StoreError,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = std::env::var("GOMOKU_DATA").unwrap_or_else(|_| ".gomoku".to_string());
    let storage = FileStorage::new(data_dir)?;
    let store = GameStore::new(storage.clone());

    println!("gomoku - five in a row");
    println!("commands: play | size <n> | history | replay <game> [move] | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("play") => run_game(&storage, &store)?,
            Some("size") => match words.next().and_then(|w| w.parse::<usize>().ok()) {
                Some(size) => match save_board_size(&storage, size) {
                    Ok(()) => println!("board size set to {}", size),
                    Err(err) => println!("{}", err),
                },
                None => println!("usage: size <5..20>"),
            },
            Some("history") => {
                let records = store.list_all()?;
                if records.is_empty() {
                    println!("no games recorded yet");
                }
                for (index, record) in records.iter().enumerate() {
                    println!("{}  (replay {})", record.summary(index + 1), record.game_number());
                }
            }
            Some("replay") => {
                let Some(game_number) = words.next().and_then(|w| w.parse::<i64>().ok()) else {
                    println!("usage: replay <game> [move]");
                    continue;
                };
                let upto = words.next().and_then(|w| w.parse::<usize>().ok());
                let records = store.list_all()?;
                // The heading ordinal is the record's position in the
                // history listing, not a fixed label.
                match records
                    .iter()
                    .position(|r| *r.game_number() == game_number)
                {
                    Some(index) => match reconstruct(&records[index], upto) {
                        Ok(board) => {
                            println!("{}", records[index].summary(index + 1));
                            render_replay(&board);
                        }
                        Err(err) => println!("{}", err),
                    },
                    None => println!("{}", StoreError::RecordNotFound { game_number }),
                }
            }
            Some("quit") => break,
            Some(other) => println!("unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}

/// Runs one game session from first stone to leave.
fn run_game<S: gomoku::KeyValueStorage>(
    storage: &S,
    store: &GameStore<S>,
) -> Result<()> {
    let size = load_board_size(storage)?;
    let mut session = GameSession::new(size)?;
    println!("new game on a {0}x{0} board", size);
    println!("enter: <row> <col> | reset | leave");
    render_view(&session.view());

    let stdin = io::stdin();
    loop {
        print!("game> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            Some("reset") => {
                session.reset();
                render_view(&session.view());
            }
            Some("leave") => {
                match session.leave(store)? {
                    LeaveOutcome::Saved { game_number } => {
                        println!("game saved as {}", game_number)
                    }
                    LeaveOutcome::Abandoned => println!("game discarded"),
                }
                return Ok(());
            }
            Some(first) => {
                let coords = first
                    .parse::<usize>()
                    .ok()
                    .zip(words.next().and_then(|w| w.parse::<usize>().ok()));
                let Some((row, col)) = coords else {
                    println!("enter: <row> <col> | reset | leave");
                    continue;
                };
                match session.play(row, col) {
                    Ok(view) => render_view(&view),
                    Err(err) => println!("{}", err),
                }
            }
            None => {}
        }
    }

    Ok(())
}

/// Prints the live board with the turn or outcome line.
fn render_view(view: &BoardView) {
    match view.status() {
        GameStatus::InProgress => println!("Turn: {}", view.active_player()),
        GameStatus::Won(player) => println!("{} wins!", player),
        GameStatus::Draw => println!("It's a draw!"),
    }
    let size = *view.size();
    for row in 0..size {
        let line: String = (0..size)
            .map(|col| stone_char(view.cells()[row * size + col]))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }
}

/// Prints a reconstructed board with 1-based move numbers.
fn render_replay(board: &ReplayBoard) {
    for row in 0..board.size() {
        let line: String = (0..board.size())
            .map(|col| match board.label(row, col) {
                Some(number) => format!(
                    "{}{:02}",
                    stone_char(board.get(row, col).unwrap_or(Stone::Empty)),
                    number
                ),
                None => " . ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }
}

fn stone_char(stone: Stone) -> String {
    match stone {
        Stone::Empty => ".".to_string(),
        Stone::Occupied(player) => player.label()[..1].to_string(),
    }
}
