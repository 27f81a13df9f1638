//! `Position`: a [`Rules`] implementation backed by `cozy_chess::Board`.

use std::fmt;

use cozy_chess::{Board, BoardBuilder, Square};

use crate::{error::RulesError, rules::Rules, types::*};

pub use cozy_chess::Move;

impl From<cozy_chess::Color> for Color {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
}

impl Position {
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Parses a standard (non-Shredder) FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { board })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece on square `sq` (a1 = 0, h8 = 63); `None` when empty or off the board.
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        let square = Square::try_index(sq as usize)?;
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece::new(color.into(), kind.into()))
    }

    fn has_legal_move(&self) -> bool {
        self.board.generate_moves(|moves| !moves.is_empty())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Formats as FEN.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Rules for Position {
    type Move = Move;

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&self, mv: Move) -> Result<Self, RulesError> {
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove {
                mv: mv.to_string(),
                fen: self.to_string(),
            });
        }
        let mut board = self.board.clone();
        board.play_unchecked(mv);
        Ok(Self { board })
    }

    fn mirror(&self) -> Self {
        let mut builder = BoardBuilder::from_board(&self.board);
        let source = builder.board;
        builder.board = std::array::from_fn(|i| {
            source[Square::index(i).flip_rank() as usize].map(|(piece, color)| (piece, !color))
        });
        builder.side_to_move = !builder.side_to_move;
        builder.castle_rights.swap(0, 1);
        builder.en_passant = builder.en_passant.map(Square::flip_rank);

        // A color flip of a valid board is always a valid board.
        let board = builder
            .build()
            .expect("color-flipped copy of a valid board is valid");
        Self { board }
    }

    fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_move()
    }

    fn piece_occupancy(&self) -> Vec<(u8, Piece)> {
        self.board
            .occupied()
            .into_iter()
            .filter_map(|square| {
                let sq = square as u8;
                self.piece_at(sq).map(|piece| (sq, piece))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
