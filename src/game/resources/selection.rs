//! Selection resource for tracking the selected piece

use chess_engine::Square;

/// The currently selected square and its cached legal destinations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub square: Option<Square>,
    pub legal_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, legal_moves: Vec<Square>) {
        self.square = Some(square);
        self.legal_moves = legal_moves;
    }

    pub fn clear(&mut self) {
        self.square = None;
        self.legal_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.square.is_some()
    }

    /// Is `square` one of the cached destinations?
    pub fn can_move_to(&self, square: Square) -> bool {
        self.legal_moves.contains(&square)
    }
}
