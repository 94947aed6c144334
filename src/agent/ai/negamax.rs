// Negamax Search with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that simplifies implementation
// by taking advantage of the zero-sum property of chess: max(a, b) = -min(-a, -b).
// Instead of separate maximizing and minimizing functions, we use one function
// that negates the score at each level.
//
// The search is fail-hard: scores are clamped to the [alpha, beta] window.
// At the horizon it hands off to quiescence search instead of trusting the
// static evaluation.

use super::context::SearchContext;
use super::move_ordering::order_moves;
use super::quiescence::quiescence;
use crate::game_repr::Position;

/// Checkmate score - far above any reachable material imbalance, with room
/// left for the ply offset
pub const MATE_SCORE: i32 = 100_000;

/// Bound of the root search window
pub const INF: i32 = 1_000_000;

/// Scores this close to MATE_SCORE are mates
const MATE_THRESHOLD: i32 = MATE_SCORE - 1000;

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (mutable for make/unmake moves)
/// * `depth` - Remaining search depth (0 = leaf node, call quiescence)
/// * `mut alpha` - Lower bound (best score the side to move can guarantee)
/// * `beta` - Upper bound (best score opponent will allow)
/// * `ply` - Distance from the search root, used to prefer shorter mates
/// * `ctx` - Search context (node counter, deadline, abort flag)
///
/// # Returns
///
/// Score from the perspective of the side to move. Once the context is
/// aborted the returned value is a neutral 0 and must not be trusted.
pub fn negamax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    ctx: &mut SearchContext,
) -> i32 {
    if ctx.is_aborted() || ctx.visit() {
        return 0;
    }

    let mut moves = pos.legal_moves();

    // Base case: reached the horizon, resolve captures first
    if depth == 0 {
        return quiescence(pos, alpha, beta, ctx);
    }

    // If no legal moves, it's either checkmate or stalemate
    if moves.is_empty() {
        return if pos.is_in_check() {
            -(MATE_SCORE - ply)
        } else {
            0
        };
    }

    order_moves(pos, &mut moves);

    for mv in moves {
        let score = {
            let mut child = pos.make_move(mv);
            -negamax(&mut child, depth - 1, -beta, -alpha, ply + 1, ctx)
        };

        // Beta cutoff - opponent won't allow this line
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Helper function to detect if a score represents a mate
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Get the number of moves until mate from a mate score
/// Returns None if not a mate score; negative when the side to move is mated
pub fn mate_distance(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }

    if score > 0 {
        // We're checkmating opponent
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        // We're getting checkmated
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(fen: &str, depth: u8) -> i32 {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.clone();
        let mut ctx = SearchContext::unbounded();
        let score = negamax(&mut pos, depth, -INF, INF, 0, &mut ctx);
        assert_eq!(pos, before, "search must restore the position");
        score
    }

    #[test]
    fn test_checkmated_side_scores_mate() {
        // Fool's mate, White to move and mated
        let score = search("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3", 1);
        assert_eq!(score, -MATE_SCORE);
        assert!(is_mate_score(score));
    }

    #[test]
    fn test_stalemate() {
        // Black king on h8, White king on f6, White queen on g6: Black to move, stalemate
        assert_eq!(search("7k/8/5KQ1/8/8/8/8/8 b - - 0 1", 1), 0);
        assert_eq!(search("7k/8/5KQ1/8/8/8/8/8 b - - 0 1", 3), 0);
    }

    #[test]
    fn test_mate_in_one_from_root() {
        // Back rank mate: Ra8#
        let score = search("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", 2);
        assert_eq!(score, MATE_SCORE - 1);
        assert_eq!(mate_distance(score), Some(1));
    }

    #[test]
    fn test_shorter_mate_preferred() {
        let ply1 = MATE_SCORE - 1;
        let ply3 = MATE_SCORE - 3;
        assert!(ply1 > ply3);
        assert_eq!(mate_distance(ply3), Some(2));
    }

    #[test]
    fn test_finds_free_queen() {
        // Rook takes the undefended queen
        let score = search("4k3/8/8/8/3q4/8/3R4/4K3 w - - 0 1", 3);
        assert!(score > 300, "Score should reflect winning the queen: {}", score);
    }

    #[test]
    fn test_depth_zero_uses_quiescence() {
        // Static eval says "even", quiescence sees Rxe4
        let fen = "4k3/8/8/8/4q3/8/8/4RK2 w - - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        let static_eval = super::super::evaluation::evaluate(&pos);
        let score = search(fen, 0);
        assert!(score > static_eval + 800, "{} vs static {}", score, static_eval);
    }

    #[test]
    fn test_narrow_window_fails_hard() {
        let mut pos = Position::default();
        let mut ctx = SearchContext::unbounded();
        let score = negamax(&mut pos, 2, -10, 10, 0, &mut ctx);
        assert!((-10..=10).contains(&score));
    }

    #[test]
    fn test_aborted_search_returns_neutral() {
        let mut pos = Position::default();
        let before = pos.clone();
        let mut ctx = SearchContext::unbounded();
        ctx.abort();

        assert_eq!(negamax(&mut pos, 4, -INF, INF, 0, &mut ctx), 0);
        assert_eq!(ctx.nodes(), 0);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_node_limit_aborts_mid_search() {
        let mut pos = Position::default();
        let before = pos.clone();
        let mut ctx = SearchContext::unbounded().with_node_limit(Some(500));

        negamax(&mut pos, 6, -INF, INF, 0, &mut ctx);

        assert!(ctx.is_aborted());
        assert_eq!(ctx.nodes(), 500);
        assert_eq!(pos, before, "aborted search must still unwind every move");
    }

    #[test]
    fn test_mate_distance_calculation() {
        assert_eq!(mate_distance(MATE_SCORE), Some(0));
        assert_eq!(mate_distance(MATE_SCORE - 1), Some(1));
        assert_eq!(mate_distance(MATE_SCORE - 2), Some(1));
        assert_eq!(mate_distance(-MATE_SCORE), Some(0));
        assert_eq!(mate_distance(-MATE_SCORE + 2), Some(-1));
        assert_eq!(mate_distance(100), None);
        assert_eq!(mate_distance(-100), None);
    }

    #[test]
    fn test_is_mate_score() {
        assert!(is_mate_score(MATE_SCORE));
        assert!(is_mate_score(-MATE_SCORE));
        assert!(is_mate_score(MATE_SCORE - 50));
        assert!(!is_mate_score(0));
        assert!(!is_mate_score(1000));
        assert!(!is_mate_score(-12_000));
    }
}
