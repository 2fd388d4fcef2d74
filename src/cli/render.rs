//! Text rendering of the board and game status

use chess_engine::constants::{BOARD_SIZE, FILES};
use chess_engine::{all_legal_moves, Color, GameStatus, Square};

use crate::game::Session;

/// Draw the board from White's side
///
/// Pieces use their letters (uppercase White, lowercase Black) and empty
/// squares a dot. The selected piece is wrapped in brackets and its cached
/// destinations are marked with `*` (parentheses around a capturable piece).
/// The last move's destination is marked with `<`.
pub fn render_board(session: &Session) -> String {
    let board = session.board();
    let selection = session.selection();
    let last_to = session.last_move().map(|mv| mv.to);
    let mut out = String::new();

    for square in Square::all() {
        if square.col() == 0 {
            out.push_str(&format!("{} ", BOARD_SIZE as u8 - square.row()));
        }

        let symbol = board.get(square).map_or('.', |piece| piece.symbol());
        let cell = if selection.square == Some(square) {
            format!("[{symbol}]")
        } else if selection.can_move_to(square) {
            if board.is_empty(square) {
                " * ".to_string()
            } else {
                format!("({symbol})")
            }
        } else if last_to == Some(square) {
            format!(" {symbol}<")
        } else {
            format!(" {symbol} ")
        };
        out.push_str(&cell);

        if square.col() as usize == BOARD_SIZE - 1 {
            out.push('\n');
        }
    }

    out.push_str("  ");
    for file in FILES {
        out.push_str(&format!(" {file} "));
    }
    out
}

/// One line describing whose turn it is or how the game ended
pub fn status_line(session: &Session) -> String {
    let side = session.side_to_move();
    match session.status() {
        GameStatus::Ongoing => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move - check!"),
        GameStatus::Checkmate => format!("Checkmate - {} wins", side.opponent()),
        GameStatus::Draw => "Stalemate - draw".to_string(),
    }
}

/// Every legal move for the side to move in coordinate notation
pub fn legal_move_list(session: &Session) -> Vec<String> {
    all_legal_moves(session.board(), session.side_to_move())
        .into_iter()
        .map(|(from, to)| format!("{from}{to}"))
        .collect()
}

/// Prompt shown before reading a command
pub fn prompt(side: Color) -> String {
    format!("{side}> ")
}
