use crate::{error::RulesError, rules::Rules};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, going
/// through the [`Rules`] capabilities only.
pub fn perft<P: Rules>(pos: &P, depth: u8) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = pos.legal_moves();
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        nodes += perft(&pos.apply(mv)?, depth - 1)?;
    }
    Ok(nodes)
}
