//! Relay message protocol
//!
//! Messages exchanged between two players' sessions, encoded as JSON text.
//! Squares travel as `[row, col]` pairs and are validated on decode.

use chess_engine::{Move, PieceKind, Square};
use serde::{Deserialize, Serialize};

use super::error::RelayResult;

/// In-game messages
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayMessage {
    // Client → Relay
    SubmitMove {
        from: Square,
        to: Square,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        promotion: Option<PieceKind>,
    },
    Resign,

    // Bidirectional chat
    Chat {
        sender: String,
        content: String,
    },

    // Relay → Clients (broadcast)
    MoveMade {
        mv: Move,
    },
}

impl RelayMessage {
    /// Encode as a single line of JSON
    pub fn encode(&self) -> RelayResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode one JSON message
    pub fn decode(text: &str) -> RelayResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networking::error::RelayError;
    use chess_engine::parse_algebraic;

    fn sq(name: &str) -> Square {
        parse_algebraic(name).unwrap()
    }

    #[test]
    fn test_submit_move_wire_format() {
        //! Squares are [row, col] and an absent promotion is omitted
        let msg = RelayMessage::SubmitMove {
            from: sq("e2"),
            to: sq("e4"),
            promotion: None,
        };
        assert_eq!(
            msg.encode().unwrap(),
            r#"{"type":"submit_move","from":[6,4],"to":[4,4]}"#
        );
    }

    #[test]
    fn test_decode_promotion() {
        //! A promotion piece survives the trip
        let msg = RelayMessage::decode(
            r#"{"type":"submit_move","from":[1,0],"to":[0,0],"promotion":"knight"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            RelayMessage::SubmitMove {
                from: sq("a7"),
                to: sq("a8"),
                promotion: Some(PieceKind::Knight),
            }
        );
    }

    #[test]
    fn test_decode_rejects_off_board_square() {
        //! Coordinates outside the board fail to decode
        let result = RelayMessage::decode(r#"{"type":"submit_move","from":[9,0],"to":[0,0]}"#);
        assert!(matches!(result, Err(RelayError::Codec(_))));
    }

    #[test]
    fn test_unit_and_chat_messages() {
        //! Resign has no payload; chat carries sender and text
        assert_eq!(RelayMessage::Resign.encode().unwrap(), r#"{"type":"resign"}"#);

        let chat = RelayMessage::Chat {
            sender: "Player1".to_string(),
            content: "Hello!".to_string(),
        };
        let decoded = RelayMessage::decode(&chat.encode().unwrap()).unwrap();
        assert_eq!(decoded, chat);
    }
}
