//! Move ordering for a downstream search.
//!
//! Forcing moves go first: moves that mate, then moves that give check,
//! then everything else. Only the check bucket gets a secondary sort.

use chess_core::{Rules, RulesError};
use tracing::{debug, trace};

use crate::eval::{Evaluator, PieceValues, Score};

/// Classification of a move by what it does to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityBucket {
    Checkmate,
    Check,
    Other,
}

/// Moves grouped by [`PriorityBucket`], each group in insertion order.
///
/// [`Buckets::join`] always yields checkmates, then checks, then the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets<M> {
    pub checkmate: Vec<M>,
    pub check: Vec<M>,
    pub other: Vec<M>,
}

impl<M> Default for Buckets<M> {
    fn default() -> Self {
        Self {
            checkmate: Vec::new(),
            check: Vec::new(),
            other: Vec::new(),
        }
    }
}

impl<M> Buckets<M> {
    pub fn push(&mut self, bucket: PriorityBucket, mv: M) {
        match bucket {
            PriorityBucket::Checkmate => self.checkmate.push(mv),
            PriorityBucket::Check => self.check.push(mv),
            PriorityBucket::Other => self.other.push(mv),
        }
    }

    pub fn len(&self) -> usize {
        self.checkmate.len() + self.check.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn join(self) -> Vec<M> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.checkmate);
        out.extend(self.check);
        out.extend(self.other);
        out
    }
}

/// Orders the legal moves of one position.
///
/// The legal moves are captured once in [`MoveOrderer::new`]; everything
/// after works on that snapshot.
pub struct MoveOrderer<'a, P: Rules> {
    position: &'a P,
    moves: Vec<P::Move>,
    values: PieceValues,
}

impl<'a, P: Rules> MoveOrderer<'a, P> {
    pub fn new(position: &'a P) -> Self {
        Self::with_values(position, PieceValues::DEFAULT)
    }

    pub fn with_values(position: &'a P, values: PieceValues) -> Self {
        Self {
            position,
            moves: position.legal_moves(),
            values,
        }
    }

    /// The legal-move snapshot, in the rules engine's order.
    pub fn moves(&self) -> &[P::Move] {
        &self.moves
    }

    /// Plays `mv` on a fresh copy of the position and classifies the result.
    pub fn classify(&self, mv: P::Move) -> Result<PriorityBucket, RulesError> {
        let scratch = self.position.apply(mv)?;
        let bucket = if scratch.is_checkmate() {
            PriorityBucket::Checkmate
        } else if scratch.is_check() {
            PriorityBucket::Check
        } else {
            PriorityBucket::Other
        };
        trace!(?mv, ?bucket, "classified move");
        Ok(bucket)
    }

    pub fn classify_all(&self) -> Result<Buckets<P::Move>, RulesError> {
        let mut buckets = Buckets::default();
        for &mv in &self.moves {
            buckets.push(self.classify(mv)?, mv);
        }
        Ok(buckets)
    }

    /// Evaluation of the position reached by `mv`, relative to the side to
    /// move there.
    pub fn score_after(&self, mv: P::Move) -> Result<Score, RulesError> {
        let after = self.position.apply(mv)?;
        Ok(Evaluator::with_values(&after, self.values).evaluate())
    }

    /// Sorts the check bucket by ascending [`MoveOrderer::score_after`].
    /// The sort is stable; the other buckets are left alone.
    pub fn sort(&self, mut buckets: Buckets<P::Move>) -> Result<Buckets<P::Move>, RulesError> {
        let mut keyed = buckets
            .check
            .iter()
            .map(|&mv| Ok((self.score_after(mv)?, mv)))
            .collect::<Result<Vec<(Score, P::Move)>, RulesError>>()?;
        keyed.sort_by_key(|&(score, _)| score);
        buckets.check = keyed.into_iter().map(|(_, mv)| mv).collect();
        Ok(buckets)
    }

    /// Classifies, sorts and joins. An empty move list gives an empty order.
    pub fn order(&self) -> Result<Vec<P::Move>, RulesError> {
        if self.moves.is_empty() {
            debug!("no legal moves to order");
            return Ok(Vec::new());
        }

        let buckets = self.sort(self.classify_all()?)?;
        debug!(
            checkmate = buckets.checkmate.len(),
            check = buckets.check.len(),
            other = buckets.other.len(),
            "ordered moves"
        );
        Ok(buckets.join())
    }
}

/// Legal moves of `pos`, most forcing first, using the default piece values.
///
/// Errors only if the rules engine rejects one of its own legal moves.
pub fn order_moves<P: Rules>(pos: &P) -> Result<Vec<P::Move>, RulesError> {
    MoveOrderer::new(pos).order()
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
