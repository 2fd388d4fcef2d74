//! In-game command parsing
//!
//! | Input        | Command                               |
//! |--------------|---------------------------------------|
//! | `e2e4`       | Move from e2 to e4                    |
//! | `e7e8q`      | Move with promotion (q, r, b or n)    |
//! | `select e2`  | Select a piece and show its moves     |
//! | `e2`         | Board click on e2                     |
//! | `undo`       | Take back the last move (or turn)     |
//! | `new`        | Start a new game                      |
//! | `moves`      | List legal moves                      |
//! | `history`    | Show the move list                    |
//! | `board`      | Redraw the board                      |
//! | `help`       | Show this table                       |
//! | `quit`       | Leave                                 |

use std::str::FromStr;

use chess_engine::{ChessEngineError, PieceKind, Square};
use thiserror::Error;

/// Help text printed by the `help` command
pub const HELP: &str = "\
Commands:
  e2e4        move a piece (add q/r/b/n to promote, e.g. e7e8n)
  e2          click a square: select, move the selection there, or clear
  select e2   select a piece and show where it can go
  undo        take back the last move (your move and the AI reply in AI games)
  new         start a new game
  moves       list every legal move
  history     show the move list
  board       redraw the board
  help        show this help
  quit        leave the game";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?}, type 'help' for a list")]
    Unknown(String),

    #[error("{0}")]
    Square(#[from] ChessEngineError),

    #[error("cannot promote to {0:?}, use q, r, b or n")]
    Promotion(char),
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Click(Square),
    Select(Square),
    Undo,
    New,
    Moves,
    History,
    Board,
    Help,
    Quit,
}

/// Parse coordinate notation: `e2e4` or `e7e8q`
pub fn parse_coordinate_move(
    text: &str,
) -> Result<(Square, Square, Option<PieceKind>), ParseCommandError> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ParseCommandError::Unknown(text.to_string()));
    }

    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(letter) => Some(parse_promotion(letter)?),
    };

    Ok((from, to, promotion))
}

fn parse_promotion(letter: char) -> Result<PieceKind, ParseCommandError> {
    match PieceKind::from_letter(letter) {
        Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
            Ok(kind)
        }
        _ => Err(ParseCommandError::Promotion(letter)),
    }
}

/// Parse a promotion answer such as `q` or `knight`; empty means queen
pub fn parse_promotion_choice(text: &str) -> Result<PieceKind, ParseCommandError> {
    let text = text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Ok(PieceKind::Queen);
    }
    if text == "knight" {
        return Ok(PieceKind::Knight);
    }
    match text.chars().next() {
        Some(letter) => parse_promotion(letter),
        None => Ok(PieceKind::Queen),
    }
}

impl FromStr for InputCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let mut words = text.split_whitespace();
        let Some(first) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match first {
            "undo" | "u" => InputCommand::Undo,
            "new" | "reset" => InputCommand::New,
            "moves" => InputCommand::Moves,
            "history" => InputCommand::History,
            "board" => InputCommand::Board,
            "help" | "?" => InputCommand::Help,
            "quit" | "exit" | "q" => InputCommand::Quit,
            "select" => {
                let name = words
                    .next()
                    .ok_or_else(|| ParseCommandError::Unknown(text.clone()))?;
                InputCommand::Select(name.parse()?)
            }
            square if square.len() == 2 => InputCommand::Click(square.parse()?),
            other => {
                let (from, to, promotion) = parse_coordinate_move(other)?;
                InputCommand::Move {
                    from,
                    to,
                    promotion,
                }
            }
        };

        if words.next().is_some() {
            return Err(ParseCommandError::Unknown(text));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::parse_algebraic;

    fn sq(name: &str) -> Square {
        parse_algebraic(name).unwrap()
    }

    #[test]
    fn test_parse_move() {
        //! Four characters are a plain move
        assert_eq!(
            "e2e4".parse::<InputCommand>().unwrap(),
            InputCommand::Move {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None
            }
        );
    }

    #[test]
    fn test_parse_promotion_move() {
        //! A fifth letter picks the promotion piece, case-insensitive
        assert_eq!(
            "E7E8N".parse::<InputCommand>().unwrap(),
            InputCommand::Move {
                from: sq("e7"),
                to: sq("e8"),
                promotion: Some(PieceKind::Knight)
            }
        );
        assert_eq!(
            "e7e8k".parse::<InputCommand>(),
            Err(ParseCommandError::Promotion('k'))
        );
    }

    #[test]
    fn test_parse_keywords() {
        //! Keywords and their short forms
        assert_eq!("undo".parse::<InputCommand>().unwrap(), InputCommand::Undo);
        assert_eq!(" new ".parse::<InputCommand>().unwrap(), InputCommand::New);
        assert_eq!("q".parse::<InputCommand>().unwrap(), InputCommand::Quit);
        assert_eq!(
            "select g1".parse::<InputCommand>().unwrap(),
            InputCommand::Select(sq("g1"))
        );
        assert_eq!("d4".parse::<InputCommand>().unwrap(), InputCommand::Click(sq("d4")));
    }

    #[test]
    fn test_parse_errors() {
        //! Blank, unknown and off-board input are rejected
        assert_eq!("   ".parse::<InputCommand>(), Err(ParseCommandError::Empty));
        assert!(matches!(
            "castle".parse::<InputCommand>(),
            Err(ParseCommandError::Unknown(_))
        ));
        assert!(matches!(
            "e9e4".parse::<InputCommand>(),
            Err(ParseCommandError::Square(_))
        ));
        assert!(matches!(
            "select".parse::<InputCommand>(),
            Err(ParseCommandError::Unknown(_))
        ));
    }

    #[test]
    fn test_promotion_choice() {
        //! Empty answer means queen
        assert_eq!(parse_promotion_choice(""), Ok(PieceKind::Queen));
        assert_eq!(parse_promotion_choice("r"), Ok(PieceKind::Rook));
        assert_eq!(parse_promotion_choice("Knight"), Ok(PieceKind::Knight));
        assert_eq!(parse_promotion_choice("p"), Err(ParseCommandError::Promotion('p')));
    }
}
