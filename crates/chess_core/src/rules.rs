//! The capabilities the engine consumes from a rules implementation.

use std::fmt::Debug;

use crate::{error::RulesError, types::*};

/// A chess position as seen by evaluation and move ordering.
///
/// Implementors own every piece of chess knowledge: move generation, move
/// application, check detection and the color-flip transform. Values are
/// treated as immutable; every transform returns a fresh position.
pub trait Rules: Sized {
    /// A move that is only meaningful for the position that produced it.
    type Move: Copy + Eq + Debug;

    fn side_to_move(&self) -> Color;

    /// Legal moves in the implementation's own enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns the position after `mv`. Fails if `mv` is not legal here.
    fn apply(&self, mv: Self::Move) -> Result<Self, RulesError>;

    /// Color-flipped copy: ranks mirrored, White and Black swapped,
    /// side to move swapped.
    fn mirror(&self) -> Self;

    /// True if the side to move is in check.
    fn is_check(&self) -> bool;

    /// True if the side to move is in check and has no legal move.
    fn is_checkmate(&self) -> bool;

    /// Every occupied square with the piece standing on it.
    fn piece_occupancy(&self) -> Vec<(u8, Piece)>;
}
