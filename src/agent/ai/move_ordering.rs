// Move ordering: MVV-LVA (Most Valuable Victim - Least Valuable Attacker)
// Only affects how early cutoffs happen, never the search result

use super::piece_square_tables::piece_value;
use crate::game_repr::{Move, MoveList, Position};

/// Priority of a move: victim value minus attacker value, 0 for quiet moves
///
/// The victim is whatever stands on the destination square, so en passant
/// scores like a quiet move. Losing captures (queen takes pawn) go negative
/// and sort behind quiet moves.
#[inline]
pub fn mvv_lva_score(pos: &Position, mv: Move) -> i32 {
    let Some(victim) = pos.piece_on(mv.get_dest()) else {
        return 0;
    };
    let attacker = pos.piece_on(mv.get_source()).map_or(0, piece_value);

    piece_value(victim) - attacker
}

/// Sort moves by MVV-LVA priority, highest first
pub fn order_moves(pos: &Position, moves: &mut MoveList) {
    moves.sort_by_cached_key(|&mv| -mvv_lva_score(pos, mv));
}

/// Generate all legal moves in search order
pub fn generate_ordered_moves(pos: &Position) -> MoveList {
    let mut moves = pos.legal_moves();
    order_moves(pos, &mut moves);
    moves
}

/// Generate legal captures in search order (quiescence)
pub fn generate_ordered_captures(pos: &Position) -> MoveList {
    let mut captures = pos.legal_captures();
    order_moves(pos, &mut captures);
    captures
}
