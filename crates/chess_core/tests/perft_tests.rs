//! Validates the `Position` adapter against published perft counts, and
//! checks that the color-flip transform preserves the game tree.

use std::time::Instant;

use rayon::prelude::*;

use chess_core::{perft, Position, Rules};

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const NODE_LIMIT: u64 = 1_000_000;

const CASES: &[(&str, &[(u8, u64)])] = &[
    (STARTPOS_FEN, &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)]),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486), (3, 62_379)],
    ),
];

#[test]
fn perft_known_positions() {
    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let pos = Position::from_fen(fen).expect("valid FEN");
        let case_start = Instant::now();
        let mut total_nodes = 0u64;

        for &(depth, expected) in depths.iter() {
            if expected > NODE_LIMIT {
                continue;
            }
            let got = perft(&pos, depth).expect("perft only plays legal moves");
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{}' at depth {}",
                fen, depth
            );
            total_nodes += got;
        }

        println!(
            "Case {:02} done: total nodes {}, elapsed {:.3?}",
            idx + 1,
            total_nodes,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_is_invariant_under_mirror() {
    CASES.par_iter().for_each(|(fen, _)| {
        let pos = Position::from_fen(fen).expect("valid FEN");
        let mirrored = pos.mirror();
        for depth in 1..=2 {
            assert_eq!(
                perft(&mirrored, depth).unwrap(),
                perft(&pos, depth).unwrap(),
                "mirror changed the tree of '{}' at depth {}",
                fen,
                depth
            );
        }
    });
}
