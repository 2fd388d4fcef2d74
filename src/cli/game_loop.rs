//! Interactive terminal game
//!
//! Reads commands from stdin line by line. On an AI turn the loop awaits the
//! AI task instead of reading input.

use std::io::Write;

use anyhow::Result;
use chess_engine::Color;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

use super::commands::{parse_promotion_choice, InputCommand, HELP};
use super::render::{legal_move_list, prompt, render_board, status_line};
use crate::core::GameSettings;
use crate::game::ai::{play_ai_turn, AIStatistics};
use crate::game::{ClickOutcome, GameError, Session};

type InputLines = Lines<BufReader<Stdin>>;

/// Play one terminal session until the player quits or stdin closes
pub async fn run_game(settings: GameSettings) -> Result<()> {
    let mut session = Session::new(settings.ai_config());
    let delay = settings.ai_delay();
    let mut stats = AIStatistics::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(
        "[GAME] Starting {:?} game | AI: {:?} | {}",
        settings.mode,
        session.ai_config().mode.ai_color(),
        settings.difficulty
    );
    println!("Type 'help' for commands.\n");
    show(&session);

    loop {
        if session.is_ai_turn() {
            println!("{} is thinking...", session.side_to_move());
            match play_ai_turn(&mut session, delay, &mut stats).await {
                Ok(_) => {
                    announce_last_move(&session);
                    show(&session);
                }
                Err(e) => {
                    error!("[AI] {}", e);
                    println!("AI failed: {e}");
                    return Err(e.into());
                }
            }
            continue;
        }

        let Some(line) = read_line(&mut lines, &prompt(session.side_to_move())).await? else {
            break;
        };

        let command = match line.parse::<InputCommand>() {
            Ok(command) => command,
            Err(super::commands::ParseCommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            InputCommand::Quit => break,
            InputCommand::Help => println!("{HELP}"),
            InputCommand::Board => show(&session),
            InputCommand::Moves => println!("{}", legal_move_list(&session).join(" ")),
            InputCommand::History => print_history(&session),
            InputCommand::New => {
                session.reset();
                show(&session);
            }
            InputCommand::Undo => match undo_turn(&mut session) {
                Ok(count) => {
                    println!("Took back {count} move(s).");
                    show(&session);
                }
                Err(e) => println!("{e}"),
            },
            InputCommand::Select(square) => {
                if session.select_square(square) {
                    show(&session);
                } else {
                    println!("Nothing of yours to select on {square}.");
                }
            }
            InputCommand::Click(square) => match session.click_square(square) {
                Ok(ClickOutcome::Moved(_)) => {
                    announce_last_move(&session);
                    show(&session);
                }
                Ok(ClickOutcome::Cleared) => println!("Selection cleared."),
                Ok(_) => show(&session),
                Err(e) => println!("{e}"),
            },
            InputCommand::Move {
                from,
                to,
                mut promotion,
            } => {
                if promotion.is_none() && session.needs_promotion(from, to) {
                    let Some(answer) =
                        read_line(&mut lines, "Promote to (q/r/b/n, default q)? ").await?
                    else {
                        break;
                    };
                    match parse_promotion_choice(&answer) {
                        Ok(kind) => promotion = Some(kind),
                        Err(e) => {
                            println!("{e}");
                            continue;
                        }
                    }
                }

                match session.move_piece(from, to, promotion) {
                    Ok(_) => {
                        announce_last_move(&session);
                        show(&session);
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    if stats.moves_played > 0 {
        info!(
            "[AI] Played {} moves | last: depth {} | {} nodes | {:.2}s",
            stats.moves_played, stats.last_depth, stats.last_nodes, stats.thinking_time
        );
    }
    println!("Goodbye.");
    Ok(())
}

/// Undo the last move, and the one before it when that hands the turn back to
/// the AI, so the human is on move afterwards
fn undo_turn(session: &mut Session) -> Result<usize, GameError> {
    session.undo()?;
    let mut count = 1;
    if session.is_ai_turn() && session.history().can_undo() {
        session.undo()?;
        count += 1;
    }
    Ok(count)
}

async fn read_line(lines: &mut InputLines, prompt_text: &str) -> Result<Option<String>> {
    print!("{prompt_text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

fn show(session: &Session) {
    println!("{}\n{}\n", render_board(session), status_line(session));
}

fn announce_last_move(session: &Session) {
    if let Some(record) = session.history().last_move() {
        let mover: Color = session.side_to_move().opponent();
        println!("{mover} played {}", record.notation);
    }
}

fn print_history(session: &Session) {
    let lines = session.history().numbered_lines();
    if lines.is_empty() {
        println!("No moves yet.");
    } else {
        println!("{}", lines.join("\n"));
    }
}
