//! Move history tracking
//!
//! Keeps a chronological record of every move made in the game. Each entry
//! stores the board as it was before the move, which is what undo restores.
//!
//! # Architecture
//!
//! MoveHistory stores a `Vec<MoveRecord>` where each record contains:
//! - The engine's move record (squares, capture, promotion, check flags)
//! - The move in short algebraic notation
//! - The board before the move
//!
//! # Integration
//!
//! Appended by [`crate::game::session::Session::move_piece`] and popped by
//! [`crate::game::session::Session::undo`]. Read by the terminal front end for
//! the `history` command.

use chess_engine::{Board, Move};

/// One played move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Short algebraic notation, e.g. `Nf3` or `Qxf7#`
    pub notation: String,
    /// Position the move was played from
    pub board_before: Board,
}

/// Complete move history for the current game
///
/// # Examples
///
/// ```rust,ignore
/// history.add_move(MoveRecord { mv, notation: "e4".into(), board_before });
/// assert_eq!(history.last_move().map(|r| r.notation.as_str()), Some("e4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    /// Chronological list of all moves made in the game
    ///
    /// Index 0 = Move 1 (White's first move)
    /// Index 1 = Move 1 (Black's response)
    /// Index 2 = Move 2 (White's move)
    /// etc.
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Append a move after it has been applied
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Most recent move, `None` before the first move
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves paired into numbered lines: `["1. e4 e5", "2. Nf3"]`
    pub fn numbered_lines(&self) -> Vec<String> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| {
                let mut line = format!("{}. {}", index + 1, pair[0].notation);
                if let Some(reply) = pair.get(1) {
                    line.push(' ');
                    line.push_str(&reply.notation);
                }
                line
            })
            .collect()
    }
}
