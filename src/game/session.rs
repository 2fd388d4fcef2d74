//! Game session state machine
//!
//! A [`Session`] owns the one authoritative board for a game, together with
//! whose turn it is, the current selection, the move history and the game
//! status. Rules come from `chess_engine`; the session only decides when to
//! call them and what to record.
//!
//! # Status transitions
//!
//! ```text
//! Ongoing <-> Check
//!    |          |
//!    v          v
//!  Draw     Checkmate      (terminal until reset)
//! ```
//!
//! Status only changes when a move is applied, undone, or the session is
//! reset. After a move it is computed for the side about to move, with
//! priority Checkmate > Check > Draw > Ongoing.

use chess_engine::{
    game_status, get_valid_moves, make_move, move_notation, Board, Color, GameStatus, Move,
    PieceKind, Square,
};
use tracing::{debug, info};

use crate::game::ai::{compute_ai_move, AIMove, ChessAIResource};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{MoveHistory, MoveRecord, Selection};

/// What a board click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece is now selected
    Selected(Square),
    /// The selected piece was clicked again
    Deselected,
    /// The selected piece moved to the clicked square
    Moved(Move),
    /// The click matched nothing and any selection was dropped
    Cleared,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    side_to_move: Color,
    selection: Selection,
    history: MoveHistory,
    status: GameStatus,
    last_move: Option<Move>,
    ai_config: ChessAIResource,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(ChessAIResource::default())
    }
}

impl Session {
    /// New game from the standard position, White to move
    pub fn new(ai_config: ChessAIResource) -> Self {
        Session {
            board: Board::initial(),
            side_to_move: Color::White,
            selection: Selection::default(),
            history: MoveHistory::default(),
            status: GameStatus::Ongoing,
            last_move: None,
            ai_config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn ai_config(&self) -> ChessAIResource {
        self.ai_config
    }

    /// Change mode or difficulty; takes effect on the next AI turn
    pub fn set_ai_config(&mut self, ai_config: ChessAIResource) {
        self.ai_config = ai_config;
    }

    /// Checkmate or stalemate reached
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The side that won by checkmate, if any
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.side_to_move.opponent()),
            _ => None,
        }
    }

    /// Legal destinations for the piece on `square`, empty unless it belongs
    /// to the side to move
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        get_valid_moves(&self.board, square, self.side_to_move)
    }

    /// Select the piece on `square`
    ///
    /// Only a piece of the side to move can be selected. Selecting the
    /// selected square again, or any other square, clears the selection.
    ///
    /// # Returns
    ///
    /// `true` if a piece is selected afterwards.
    pub fn select_square(&mut self, square: Square) -> bool {
        if self.is_over() || self.selection.square == Some(square) {
            self.selection.clear();
            return false;
        }

        match self.board.get(square) {
            Some(piece) if piece.color == self.side_to_move => {
                let moves = self.legal_moves_from(square);
                debug!(
                    "[SESSION] Selected {} on {} with {} moves",
                    piece.kind.letter(),
                    square,
                    moves.len()
                );
                self.selection.select(square, moves);
                true
            }
            _ => {
                self.selection.clear();
                false
            }
        }
    }

    /// Board click: select own pieces, move the selection to a cached
    /// destination, clear on anything else
    ///
    /// Promotions made through a click always become queens.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended.
    pub fn click_square(&mut self, square: Square) -> GameResult<ClickOutcome> {
        if self.is_over() {
            self.selection.clear();
            return Err(GameError::GameOver {
                status: self.status,
            });
        }

        let own_piece = self
            .board
            .get(square)
            .is_some_and(|piece| piece.color == self.side_to_move);

        if own_piece {
            return Ok(if self.select_square(square) {
                ClickOutcome::Selected(square)
            } else {
                ClickOutcome::Deselected
            });
        }

        match self.selection.square {
            Some(from) if self.selection.can_move_to(square) => {
                let mv = self.move_piece(from, square, None)?;
                Ok(ClickOutcome::Moved(mv))
            }
            _ => {
                self.selection.clear();
                Ok(ClickOutcome::Cleared)
            }
        }
    }

    /// Would moving `from` to `to` promote a pawn?
    ///
    /// Lets a front end ask for the promotion piece before calling
    /// [`Session::move_piece`]. False for illegal moves.
    pub fn needs_promotion(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.board.get(from) else {
            return false;
        };

        piece.kind == PieceKind::Pawn
            && piece.color == self.side_to_move
            && to.row() == piece.color.promotion_row()
            && self.legal_moves_from(from).contains(&to)
    }

    /// Apply a move for the side to move
    ///
    /// # Arguments
    ///
    /// * `from` - Source square
    /// * `to` - Destination square
    /// * `promotion` - Promotion piece; Queen if `None` and the move promotes
    ///
    /// # Returns
    ///
    /// The move record with check and checkmate flags set.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] after checkmate or stalemate
    /// - [`GameError::InvalidMove`] for an empty source or a pawn/king promotion
    /// - [`GameError::NotYourTurn`] for the other side's piece
    /// - [`GameError::IllegalMove`] when the rules forbid it
    pub fn move_piece(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> GameResult<Move> {
        if self.is_over() {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }

        let piece = self.board.get(from).ok_or_else(|| GameError::InvalidMove {
            message: format!("no piece on {from}"),
        })?;

        if piece.color != self.side_to_move {
            return Err(GameError::NotYourTurn {
                expected: self.side_to_move,
            });
        }

        if matches!(promotion, Some(PieceKind::Pawn | PieceKind::King)) {
            return Err(GameError::InvalidMove {
                message: "pawns promote to a queen, rook, bishop or knight".to_string(),
            });
        }

        if !self.legal_moves_from(from).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let mover = self.side_to_move;
        let board_before = self.board;
        let (board, mut mv) = make_move(&board_before, from, to, promotion)?;

        let status = game_status(&board, mover.opponent());
        mv.is_check = matches!(status, GameStatus::Check | GameStatus::Checkmate);
        mv.is_checkmate = status == GameStatus::Checkmate;
        let notation = move_notation(&mv, &board_before, mv.is_check, mv.is_checkmate);

        info!("[SESSION] {} plays {}", mover, notation);
        if status != GameStatus::Ongoing {
            info!("[SESSION] Status for {}: {:?}", mover.opponent(), status);
        }

        self.history.add_move(MoveRecord {
            mv,
            notation,
            board_before,
        });
        self.board = board;
        self.side_to_move = mover.opponent();
        self.status = status;
        self.selection.clear();
        self.last_move = Some(mv);

        Ok(mv)
    }

    /// Take back the most recent move
    ///
    /// Restores the board from before that move, hands the turn back and
    /// recomputes the status from the restored position.
    ///
    /// # Errors
    ///
    /// [`GameError::NothingToUndo`] before the first move.
    pub fn undo(&mut self) -> GameResult<MoveRecord> {
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;

        self.board = record.board_before;
        self.side_to_move = self.side_to_move.opponent();
        self.last_move = self.history.last_move().map(|previous| previous.mv);
        self.status = game_status(&self.board, self.side_to_move);
        self.selection.clear();

        info!("[SESSION] Undid {}", record.notation);
        Ok(record)
    }

    /// Start over from the initial position, keeping mode and difficulty
    pub fn reset(&mut self) {
        *self = Session::new(self.ai_config);
        info!("[SESSION] New game");
    }

    /// Is the AI to move in a game that is still running?
    ///
    /// The AI also moves when it is in check; only checkmate and stalemate
    /// stop it.
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.ai_config.mode.ai_color() == Some(self.side_to_move)
    }

    /// The move the AI would play now, without applying it
    ///
    /// `None` unless [`Session::is_ai_turn`].
    pub fn ai_move(&self) -> Option<AIMove> {
        if !self.is_ai_turn() {
            return None;
        }
        compute_ai_move(&self.board, self.side_to_move, self.ai_config.difficulty)
    }

    /// Search and apply the AI's move on the calling thread
    ///
    /// # Returns
    ///
    /// The applied move, or `None` when it isn't the AI's turn.
    pub fn play_ai_move(&mut self) -> GameResult<Option<Move>> {
        match self.ai_move() {
            Some(ai_move) => self.apply_ai_move(&ai_move).map(Some),
            None => Ok(None),
        }
    }

    /// Apply a move chosen by the search through the normal move path
    pub fn apply_ai_move(&mut self, ai_move: &AIMove) -> GameResult<Move> {
        let mv = ai_move.mv;
        self.move_piece(mv.from, mv.to, mv.promotion)
    }
}
