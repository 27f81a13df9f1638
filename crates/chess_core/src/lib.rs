//! Chess rules as a capability the engine consumes.
//!
//! [`Rules`] is the seam between the engine and chess knowledge. [`Position`]
//! implements it on top of `cozy-chess`; tests can plug in synthetic
//! positions instead.

pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

pub use board::*;
pub use error::RulesError;
pub use perft::perft;
pub use rules::Rules;
pub use types::*;
pub use uci::*;
