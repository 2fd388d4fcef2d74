//! Applying relay messages to a local session
//!
//! There is no transport here: a front end reads messages from wherever it
//! likes and hands them to [`handle_relay_message`]. Moves go through
//! [`Session::move_piece`] exactly like local ones.

use tracing::{info, warn};

use super::error::RelayResult;
use super::protocol::RelayMessage;
use crate::game::Session;

/// Handle one incoming message
///
/// # Returns
///
/// - `SubmitMove`: the `MoveMade` broadcast for the applied move
/// - `MoveMade`: `None` after applying the move locally
/// - `Resign` / `Chat`: `None`, logged only
///
/// # Errors
///
/// [`super::RelayError::Game`] if the session rejects the move.
pub fn handle_relay_message(
    session: &mut Session,
    message: &RelayMessage,
) -> RelayResult<Option<RelayMessage>> {
    match message {
        RelayMessage::SubmitMove {
            from,
            to,
            promotion,
        } => {
            let mv = session.move_piece(*from, *to, *promotion)?;
            info!("[NETWORK] Accepted move {} -> {}", from, to);
            Ok(Some(RelayMessage::MoveMade { mv }))
        }
        RelayMessage::MoveMade { mv } => {
            session.move_piece(mv.from, mv.to, mv.promotion)?;
            info!("[NETWORK] Applied remote move {} -> {}", mv.from, mv.to);
            Ok(None)
        }
        RelayMessage::Resign => {
            warn!("[NETWORK] {} resigned", session.side_to_move());
            Ok(None)
        }
        RelayMessage::Chat { sender, content } => {
            info!("[NETWORK] <{}> {}", sender, content);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::ChessAIResource;
    use crate::game::GameError;
    use crate::networking::RelayError;
    use chess_engine::{parse_algebraic, Color, Square};

    fn sq(name: &str) -> Square {
        parse_algebraic(name).unwrap()
    }

    #[test]
    fn test_submit_move_broadcasts_result() {
        //! An accepted submission is echoed as MoveMade with check flags set
        let mut session = Session::new(ChessAIResource::vs_human());
        let reply = handle_relay_message(
            &mut session,
            &RelayMessage::SubmitMove {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None,
            },
        )
        .unwrap();

        let Some(RelayMessage::MoveMade { mv }) = reply.clone() else {
            panic!("expected MoveMade, got {reply:?}");
        };
        assert_eq!((mv.from, mv.to), (sq("e2"), sq("e4")));
        assert_eq!(session.side_to_move(), Color::Black);
    }

    #[test]
    fn test_remote_move_made_mirrors_board() {
        //! Replaying a broadcast keeps two sessions in step
        let mut host = Session::new(ChessAIResource::vs_human());
        let mut guest = Session::new(ChessAIResource::vs_human());

        let broadcast = handle_relay_message(
            &mut host,
            &RelayMessage::SubmitMove {
                from: sq("g1"),
                to: sq("f3"),
                promotion: None,
            },
        )
        .unwrap()
        .unwrap();

        let wire = broadcast.encode().unwrap();
        let received = RelayMessage::decode(&wire).unwrap();
        assert_eq!(handle_relay_message(&mut guest, &received).unwrap(), None);
        assert_eq!(host.board(), guest.board());
    }

    #[test]
    fn test_illegal_submission_rejected() {
        //! The session's rules apply to remote moves too
        let mut session = Session::new(ChessAIResource::vs_human());
        let result = handle_relay_message(
            &mut session,
            &RelayMessage::SubmitMove {
                from: sq("e7"),
                to: sq("e5"),
                promotion: None,
            },
        );
        assert!(matches!(
            result,
            Err(RelayError::Game(GameError::NotYourTurn { .. }))
        ));
    }
}
