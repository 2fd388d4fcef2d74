//! Session state containers
//!
//! - [`Selection`] - Currently selected square and its legal destinations
//! - [`MoveHistory`] - Complete move record for undo and the move list

pub mod history;
pub mod selection;

pub use history::{MoveHistory, MoveRecord};
pub use selection::Selection;
