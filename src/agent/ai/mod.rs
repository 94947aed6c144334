// AI Agent - Negamax with Alpha-Beta Pruning
//
// This module implements a classical chess AI using the Negamax algorithm
// with alpha-beta pruning and iterative deepening under a time budget.
//
// Key features:
// - Deterministic for a fixed node budget (same position gives same move)
// - Uses minimax-based tree search with alpha-beta pruning for efficiency
// - Quiescence search to avoid horizon effect
// - MVV-LVA move ordering for improved pruning
// - Cooperative time abort; an interrupted depth is never trusted

mod config;
mod context;
mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod piece_square_tables;
mod quiescence;
mod search;

#[cfg(test)]
mod tests;

pub use negamax_player::{select_move, NegamaxPlayer};

// Re-export useful types
pub use config::{SearchConfig, DEFAULT_CHECK_INTERVAL, DEFAULT_MAX_DEPTH, DEFAULT_SAFETY_FRACTION};
pub use context::SearchContext;
pub use evaluation::{evaluate, evaluate_white_relative};
pub use move_ordering::{generate_ordered_captures, generate_ordered_moves, mvv_lva_score, order_moves};
pub use negamax::{is_mate_score, mate_distance, negamax, INF, MATE_SCORE};
pub use piece_square_tables::{get_pst_value, piece_value, pst_index};
pub use quiescence::quiescence;
pub use search::{iterative_deepening_search, search_fixed_depth, SearchResult};
