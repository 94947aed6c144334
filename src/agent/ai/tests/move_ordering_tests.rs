// Comprehensive tests for move ordering

use crate::agent::ai::move_ordering::{
    generate_ordered_captures, generate_ordered_moves, mvv_lva_score, order_moves,
};
use crate::game_repr::Position;

fn position(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_mvv_lva_scores() {
    let pos = position("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");

    // Pawn takes queen
    let pxq = pos.find_move("e4d5").unwrap();
    assert_eq!(mvv_lva_score(&pos, pxq), 800);

    // Quiet pawn push
    let push = pos.find_move("e4e5").unwrap();
    assert_eq!(mvv_lva_score(&pos, push), 0);
}

#[test]
fn test_losing_capture_scores_negative() {
    let pos = position("4k3/8/8/3p4/8/8/8/3QK3 w - - 0 1");
    let qxp = pos.find_move("d1d5").unwrap();
    assert_eq!(mvv_lva_score(&pos, qxp), -800);
}

#[test]
fn test_en_passant_scores_like_quiet_move() {
    let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let ep = pos.find_move("e5d6").unwrap();
    assert!(pos.is_en_passant(ep));
    assert_eq!(mvv_lva_score(&pos, ep), 0);
}

#[test]
fn test_captures_prioritized() {
    // Position with a free queen to capture
    let pos = position("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let moves = generate_ordered_moves(&pos);

    assert_eq!(moves[0].to_string(), "e4d5", "Queen capture should be top priority");
}

#[test]
fn test_losing_capture_ordered_last() {
    // Kxe2 risks the king for a pawn; every quiet move goes before it
    let pos = position("4k3/8/8/8/8/8/4p3/Q3K3 w - - 0 1");
    let moves = generate_ordered_moves(&pos);

    assert_eq!(moves.last().unwrap().to_string(), "e1e2");
}

#[test]
fn test_all_ordered_preserves_count() {
    let pos = position("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let ordered = generate_ordered_moves(&pos);
    let regular = pos.legal_moves();

    assert_eq!(ordered.len(), regular.len());
    for mv in &regular {
        assert!(ordered.contains(mv));
    }
}

#[test]
fn test_ordering_is_descending() {
    let pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let ordered = generate_ordered_moves(&pos);

    for pair in ordered.windows(2) {
        assert!(mvv_lva_score(&pos, pair[0]) >= mvv_lva_score(&pos, pair[1]));
    }
}

#[test]
fn test_quiet_moves_keep_generation_order() {
    let pos = Position::default();
    let mut moves = pos.legal_moves();
    let generated = moves.clone();
    order_moves(&pos, &mut moves);

    assert_eq!(moves, generated);
}

#[test]
fn test_ordered_captures_only_captures() {
    let pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let captures = generate_ordered_captures(&pos);

    assert!(!captures.is_empty());
    for mv in &captures {
        assert!(pos.is_capture(*mv), "{} is not a capture", mv);
    }
    let expected = pos.legal_moves().iter().filter(|mv| pos.is_capture(**mv)).count();
    assert_eq!(captures.len(), expected);
}
