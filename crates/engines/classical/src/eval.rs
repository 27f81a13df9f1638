//! Material-based position evaluation.

use std::ops::RangeInclusive;

use chess_core::{Color, PieceKind, Rules};
use serde::Deserialize;

/// Centipawns.
pub type Score = i32;

/// Material values in centipawns. Kings are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieceValues {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
}

impl PieceValues {
    pub const DEFAULT: PieceValues = PieceValues {
        pawn: 100,
        knight: 300,
        bishop: 325,
        rook: 500,
        queen: 950,
    };

    /// Accepted weight for any one piece kind. Keeps material sums well
    /// inside `Score`.
    pub const RANGE: RangeInclusive<Score> = 1..=10_000;

    /// Returns the material value of a piece kind in centipawns.
    #[inline]
    pub fn value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0,
        }
    }

    /// Mutable slot for a piece kind; `None` for the king.
    pub fn value_mut(&mut self, kind: PieceKind) -> Option<&mut Score> {
        match kind {
            PieceKind::Pawn => Some(&mut self.pawn),
            PieceKind::Knight => Some(&mut self.knight),
            PieceKind::Bishop => Some(&mut self.bishop),
            PieceKind::Rook => Some(&mut self.rook),
            PieceKind::Queen => Some(&mut self.queen),
            PieceKind::King => None,
        }
    }

    /// Returns the first piece kind whose weight falls outside [`Self::RANGE`].
    pub fn first_out_of_range(&self) -> Option<(PieceKind, Score)> {
        PieceKind::ALL
            .into_iter()
            .filter(|&kind| kind != PieceKind::King)
            .map(|kind| (kind, self.value(kind)))
            .find(|(_, v)| !Self::RANGE.contains(v))
    }

    /// Signed material sum: White pieces count positive, Black negative.
    pub fn material<P: Rules>(&self, pos: &P) -> Score {
        pos.piece_occupancy()
            .into_iter()
            .map(|(_, pc)| {
                let v = self.value(pc.kind);
                if pc.color == Color::White {
                    v
                } else {
                    -v
                }
            })
            .sum()
    }

    /// Material belonging to one side only.
    pub fn side_material<P: Rules>(&self, pos: &P, color: Color) -> Score {
        pos.piece_occupancy()
            .into_iter()
            .filter(|(_, pc)| pc.color == color)
            .map(|(_, pc)| self.value(pc.kind))
            .sum()
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores one position.
///
/// Holds nothing but the position it was built for and the weights to use.
#[derive(Debug, Clone)]
pub struct Evaluator<'a, P> {
    position: &'a P,
    values: PieceValues,
}

impl<'a, P: Rules> Evaluator<'a, P> {
    pub fn new(position: &'a P) -> Self {
        Self::with_values(position, PieceValues::DEFAULT)
    }

    pub fn with_values(position: &'a P, values: PieceValues) -> Self {
        Self { position, values }
    }

    /// Material balance from White's point of view.
    pub fn evaluate_absolute(&self) -> Score {
        self.values.material(self.position)
    }

    /// Evaluates the position from the side-to-move's perspective.
    ///
    /// With Black to move the position is mirrored first, so both terms
    /// below are always computed for White to move. The score is White's
    /// terms on that position minus White's terms on its mirror, which is
    /// how much better the side to move stands than its mirrored opponent.
    ///
    /// Returns a score in centipawns:
    /// - Positive = good for side to move
    /// - Negative = bad for side to move
    /// - 0 = equal position
    pub fn evaluate(&self) -> Score {
        let normalized;
        let pos = match self.position.side_to_move() {
            Color::White => self.position,
            Color::Black => {
                normalized = self.position.mirror();
                &normalized
            }
        };

        let score1 = self.white_terms(pos);
        let score2 = self.white_terms(&pos.mirror());
        score1 - score2
    }

    // Every term added here must flip cleanly under `Rules::mirror`.
    fn white_terms(&self, pos: &P) -> Score {
        self.values.side_material(pos, Color::White)
    }
}

/// Side-to-move-relative evaluation with the default piece values.
pub fn evaluate<P: Rules>(pos: &P) -> Score {
    Evaluator::new(pos).evaluate()
}

/// White-relative material balance with the default piece values.
pub fn evaluate_absolute<P: Rules>(pos: &P) -> Score {
    Evaluator::new(pos).evaluate_absolute()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
