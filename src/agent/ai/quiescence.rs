// Quiescence Search - Tactical Stability Extension
//
// Quiescence search addresses the "horizon effect" in chess search algorithms.
// When a regular search stops at a certain depth, it may evaluate positions in
// the middle of tactical exchanges, leading to wildly inaccurate evaluations.
//
// For example, if we stop searching after a queen capture but before the recapture,
// we'd think we're up a queen when actually the position is equal.
//
// Quiescence search extends the tree with captures only until the position
// is quiet. The side to move may always "stand pat" and decline to capture,
// so the static evaluation is a lower bound at every quiescence node.

use super::context::SearchContext;
use super::evaluation::evaluate;
use super::move_ordering::generate_ordered_captures;
use crate::game_repr::Position;

/// Quiescence search - search captures until the position is quiet
///
/// # Arguments
///
/// * `pos` - Current position (moves are applied and reverted in place)
/// * `mut alpha` - Lower bound (best score the side to move can guarantee)
/// * `beta` - Upper bound (best score opponent will allow)
/// * `ctx` - Search context; an aborted context yields a neutral 0
///
/// # Returns
///
/// Fail-hard score from the perspective of the side to move
pub fn quiescence(pos: &mut Position, mut alpha: i32, beta: i32, ctx: &mut SearchContext) -> i32 {
    if ctx.is_aborted() || ctx.visit() {
        return 0;
    }

    // Stand-pat: the option to "do nothing"
    let stand_pat = evaluate(pos);

    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    for mv in generate_ordered_captures(pos) {
        let score = {
            let mut child = pos.make_move(mv);
            -quiescence(&mut child, -beta, -alpha, ctx)
        };

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
