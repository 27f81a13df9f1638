//! Classical Chess Engine
//!
//! Material evaluation and forcing-move ordering on top of any
//! [`chess_core::Rules`] implementation. Search itself lives elsewhere; this
//! crate scores positions and decides which moves a search should try first.

mod config;
mod eval;
mod ordering;

pub use config::{ConfigError, EngineConfig};
pub use eval::{evaluate, evaluate_absolute, Evaluator, PieceValues, Score};
pub use ordering::{order_moves, Buckets, MoveOrderer, PriorityBucket};
