//! Position evaluation
//!
//! The engine scores positions on material alone. There are no positional,
//! mobility or king-safety terms.
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation

mod material;

pub use material::evaluate_board;
