use super::*;
use chess_core::Position;

const QUEEN_UP_WHITE_TO_MOVE: &str = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const QUEEN_UP_BLACK_TO_MOVE: &str = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1";

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_balanced_for_both_sides() {
    assert_eq!(evaluate(&Position::startpos()), 0);
    assert_eq!(
        evaluate(&pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")),
        0
    );
    assert_eq!(evaluate_absolute(&Position::startpos()), 0);
}

#[test]
fn test_extra_queen_white_to_move() {
    let p = pos(QUEEN_UP_WHITE_TO_MOVE);
    assert_eq!(evaluate(&p), 950);
    assert_eq!(evaluate_absolute(&p), 950);
}

#[test]
fn test_extra_queen_black_to_move() {
    let p = pos(QUEEN_UP_BLACK_TO_MOVE);
    assert_eq!(evaluate(&p), -950);
    assert_eq!(evaluate_absolute(&p), 950);
}

#[test]
fn test_black_advantage_seen_by_black() {
    let p = pos("4k2r/8/8/8/8/8/8/4K3 b k - 0 1");
    assert_eq!(evaluate(&p), 500);
    assert_eq!(evaluate_absolute(&p), -500);
}

#[test]
fn test_kings_are_worth_nothing() {
    let p = pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&p), 0);
    assert_eq!(PieceValues::DEFAULT.value(PieceKind::King), 0);
}

#[test]
fn test_mixed_material() {
    // White: R + B + 2P = 1025. Black: N + Q = 1250.
    let p = pos("3qk3/8/8/2n5/8/8/PP6/2B1K2R w K - 0 1");
    assert_eq!(evaluate_absolute(&p), 1025 - 1250);
    assert_eq!(evaluate(&p), -225);
}

#[test]
fn test_material_symmetry_under_mirror() {
    for fen in [
        QUEEN_UP_WHITE_TO_MOVE,
        QUEEN_UP_BLACK_TO_MOVE,
        "3qk3/8/8/2n5/8/8/PP6/2B1K2R w K - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ] {
        let p = pos(fen);
        assert_eq!(evaluate_absolute(&p), -evaluate_absolute(&p.mirror()), "{fen}");
    }
}

#[test]
fn test_evaluate_is_idempotent_and_pure() {
    let p = pos(QUEEN_UP_BLACK_TO_MOVE);
    let fen_before = p.to_string();
    let occupancy_before = p.piece_occupancy();

    let first = evaluate(&p);
    let second = evaluate(&p);

    assert_eq!(first, second);
    assert_eq!(p.to_string(), fen_before);
    assert_eq!(p.piece_occupancy(), occupancy_before);
}

#[test]
fn test_custom_piece_values() {
    let values = PieceValues {
        queen: 900,
        ..PieceValues::DEFAULT
    };
    let p = pos(QUEEN_UP_WHITE_TO_MOVE);
    let evaluator = Evaluator::with_values(&p, values);
    assert_eq!(evaluator.evaluate(), 900);
    assert_eq!(evaluator.evaluate_absolute(), 900);
}

#[test]
fn test_value_mut_and_validation() {
    let mut values = PieceValues::DEFAULT;
    *values.value_mut(PieceKind::Rook).unwrap() = 480;
    assert_eq!(values.rook, 480);
    assert!(values.value_mut(PieceKind::King).is_none());
    assert_eq!(values.first_out_of_range(), None);

    values.pawn = -1;
    assert_eq!(values.first_out_of_range(), Some((PieceKind::Pawn, -1)));

    values.pawn = 1;
    values.queen = 10_001;
    assert_eq!(values.first_out_of_range(), Some((PieceKind::Queen, 10_001)));
}

#[test]
fn test_heaviest_weights_do_not_overflow() {
    let max = *PieceValues::RANGE.end();
    let values = PieceValues {
        pawn: max,
        knight: max,
        bishop: max,
        rook: max,
        queen: max,
    };
    let pos = Position::from_fen("3qk3/8/8/8/8/8/8/Q2QK3 w - - 0 1").unwrap();
    assert_eq!(Evaluator::with_values(&pos, values).evaluate(), max);
    assert_eq!(
        Evaluator::with_values(&pos.mirror(), values).evaluate_absolute(),
        -max
    );
}
