//! Rules Integration Tests
//!
//! Whole-game properties checked through the public engine API:
//! - Every generated destination is on the board and never self-checks
//! - Opening move counts
//! - Checkmate, stalemate and promotion
//! - Search picks up free material

use chess_engine::{
    all_legal_moves, find_best_move, game_status, get_valid_moves, is_checkmate, is_draw,
    is_king_in_check, make_move, move_notation, parse_algebraic, Board, Color, GameStatus,
    Piece, PieceKind, Square,
};

fn sq(name: &str) -> Square {
    parse_algebraic(name).unwrap()
}

/// Play coordinate moves from `board`, alternating colors starting with White
fn play(board: Board, moves: &[(&str, &str)]) -> Board {
    moves.iter().fold(board, |board, (from, to)| {
        make_move(&board, sq(from), sq(to), None).unwrap().0
    })
}

// ============================================================================
// Legality Properties
// ============================================================================

/// Positions reached by short, fixed move sequences
fn sample_positions() -> Vec<(Board, Color)> {
    vec![
        (Board::initial(), Color::White),
        (play(Board::initial(), &[("e2", "e4")]), Color::Black),
        (
            play(
                Board::initial(),
                &[("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("b8", "c6")],
            ),
            Color::White,
        ),
        (
            play(
                Board::initial(),
                &[("d2", "d4"), ("d7", "d5"), ("c1", "g5"), ("g8", "f6"), ("g5", "f6")],
            ),
            Color::Black,
        ),
    ]
}

#[test]
fn test_destinations_never_self_check() {
    //! No legal move leaves the mover's own king attacked
    for (board, color) in sample_positions() {
        for (from, to) in all_legal_moves(&board, color) {
            let (next, _) = make_move(&board, from, to, None).unwrap();
            assert!(
                !is_king_in_check(&next, color),
                "{from}{to} leaves {color} in check"
            );
        }
    }
}

#[test]
fn test_destinations_belong_to_mover() {
    //! Only the side to move's pieces produce moves, and never onto own pieces
    for (board, color) in sample_positions() {
        for square in Square::all() {
            let moves = get_valid_moves(&board, square, color);
            match board.get(square) {
                Some(piece) if piece.color == color => {
                    for to in moves {
                        assert_ne!(board.get(to).map(|p| p.color), Some(color));
                    }
                }
                _ => assert!(moves.is_empty(), "{square} should have no moves"),
            }
        }
    }
}

#[test]
fn test_checkmate_false_while_moves_exist() {
    //! Any side with a legal move is not mated
    for (board, color) in sample_positions() {
        if !all_legal_moves(&board, color).is_empty() {
            assert!(!is_checkmate(&board, color));
            assert!(!is_draw(&board, color));
        }
    }
}

#[test]
fn test_twenty_opening_moves() {
    //! Both sides start with 20 moves
    let board = Board::initial();
    assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
    assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
}

// ============================================================================
// Game End Tests
// ============================================================================

#[test]
fn test_scholars_mate() {
    //! 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# mates Black
    let before_mate = play(
        Board::initial(),
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
        ],
    );
    let (board, mv) = make_move(&before_mate, sq("h5"), sq("f7"), None).unwrap();

    assert_eq!(mv.captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
    assert!(is_king_in_check(&board, Color::Black));
    assert!(is_checkmate(&board, Color::Black));
    assert_eq!(game_status(&board, Color::Black), GameStatus::Checkmate);
    assert_eq!(move_notation(&mv, &before_mate, true, true), "Qxf7#");
}

#[test]
fn test_stalemate_is_draw() {
    //! Black king on h8, White queen on g6, nothing else for Black
    let board = Board::from_pieces(&[
        (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        (sq("g6"), Piece::new(PieceKind::Queen, Color::White)),
        (sq("a1"), Piece::new(PieceKind::King, Color::White)),
    ]);
    assert!(!is_king_in_check(&board, Color::Black));
    assert!(is_draw(&board, Color::Black));
    assert_eq!(game_status(&board, Color::Black), GameStatus::Draw);
    assert_eq!(find_best_move(&board, Color::Black, 2), None);
}

#[test]
fn test_default_promotion_is_queen() {
    //! A pawn pushed to the last row becomes a queen
    let board = Board::from_pieces(&[
        (sq("b7"), Piece::new(PieceKind::Pawn, Color::White)),
        (sq("e1"), Piece::new(PieceKind::King, Color::White)),
        (sq("h6"), Piece::new(PieceKind::King, Color::Black)),
    ]);
    let (next, mv) = make_move(&board, sq("b7"), sq("b8"), None).unwrap();
    assert_eq!(next.get(sq("b8")), Some(Piece::new(PieceKind::Queen, Color::White)));
    assert_eq!(move_notation(&mv, &board, false, false), "b8=Q");
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_depth_one_takes_free_capture() {
    //! The AI grabs an undefended queen
    let board = Board::from_pieces(&[
        (sq("e1"), Piece::new(PieceKind::King, Color::White)),
        (sq("d2"), Piece::new(PieceKind::Knight, Color::White)),
        (sq("e4"), Piece::new(PieceKind::Queen, Color::Black)),
        (sq("e8"), Piece::new(PieceKind::King, Color::Black)),
    ]);
    let mv = find_best_move(&board, Color::White, 1).unwrap();
    assert_eq!((mv.from, mv.to), (sq("d2"), sq("e4")));
}

#[test]
fn test_search_finds_mate_in_one() {
    //! At two plies the queen's first capture on its ray is the mate on f7
    let board = play(
        Board::initial(),
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
        ],
    );
    let mv = find_best_move(&board, Color::White, 2).unwrap();
    assert_eq!((mv.from, mv.to), (sq("h5"), sq("f7")));
    let (next, _) = make_move(&board, mv.from, mv.to, None).unwrap();
    assert!(is_checkmate(&next, Color::Black));
}
