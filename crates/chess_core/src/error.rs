use thiserror::Error;

/// Failures reported by the rules engine.
///
/// `IllegalMove` is a contract violation: moves handed to [`crate::Rules::apply`]
/// are expected to come from the same position's `legal_moves`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("move {mv} is not legal in position '{fen}'")]
    IllegalMove { mv: String, fen: String },

    #[error("'{0}' is not a legal UCI move in this position")]
    InvalidUciMove(String),

    #[error("position command has 'fen' but no FEN fields")]
    MissingFen,
}
