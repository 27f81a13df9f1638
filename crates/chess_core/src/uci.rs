use cozy_chess::{File, Piece, Square};

use crate::{board::{Move, Position}, error::RulesError, rules::Rules};

/// Formats a move in UCI long algebraic notation.
///
/// Castling is written as the king's two-square step (`e1g1`), not the
/// king-takes-rook form the board uses internally.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let mut mv = mv;
    let is_castle = board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == Some(board.side_to_move());
    if is_castle {
        let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            File::G
        } else {
            File::C
        };
        mv.to = Square::new(file, mv.from.rank());
    }
    mv.to_string()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, RulesError> {
    // Match against legal moves so castling and promotions resolve the same
    // way they print.
    let wanted = txt.trim().to_ascii_lowercase();
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == wanted)
        .ok_or_else(|| RulesError::InvalidUciMove(txt.to_string()))
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos [moves ...]` and `fen <fields> [moves ...]`. On error
/// `pos` is left untouched.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), RulesError> {
    let moves_at = args
        .iter()
        .position(|&a| a == "moves")
        .unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut next = match setup {
        [] | ["startpos", ..] => Position::startpos(),
        ["fen", fields @ ..] => {
            if fields.is_empty() {
                return Err(RulesError::MissingFen);
            }
            Position::from_fen(&fields.join(" "))?
        }
        // Anything else falls back to the start position.
        _ => Position::startpos(),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(&next, txt)?;
        next = next.apply(mv)?;
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
