// Iterative Deepening Search Orchestrator
//
// This module implements iterative deepening search for chess move selection.
// It searches depth 1, 2, 3, ... until the time budget runs out, and answers
// with the result of the deepest iteration that completed. An iteration that
// is interrupted by the deadline is thrown away as a whole.

use super::config::SearchConfig;
use super::context::{Instant, SearchContext};
use super::move_ordering::generate_ordered_moves;
use super::negamax::{negamax, INF, MATE_SCORE};
use crate::game_repr::{to_uci, Move, Position};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// None only when the position has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    /// Deepest fully completed iteration, 0 if none completed
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
    /// An iteration was cut short by the deadline or node budget
    pub timed_out: bool,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_ms: 0,
            timed_out: false,
        }
    }

    /// Best move in UCI notation, empty when there is none
    pub fn best_move_uci(&self) -> String {
        self.best_move.map(to_uci).unwrap_or_default()
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Current position; restored before returning
/// * `time_budget_ms` - Wall-clock budget of the caller in milliseconds
/// * `config` - Safety fraction, clock polling interval and depth cap
///
/// # Returns
/// SearchResult of the deepest completed iteration. When not even depth 1
/// completes, the first legal move in generation order with depth 0.
pub fn iterative_deepening_search(
    pos: &mut Position,
    time_budget_ms: u64,
    config: &SearchConfig,
) -> SearchResult {
    let start_time = Instant::now();
    let deadline = start_time + config.search_time(time_budget_ms);
    let mut ctx = SearchContext::with_deadline(deadline, config.check_interval)
        .with_node_limit(config.max_nodes);

    let mut best_result = SearchResult::new();

    // Fallback in case no iteration completes
    let Some(fallback) = pos.legal_moves().first().copied() else {
        best_result.score = terminal_score(pos);
        best_result.time_ms = elapsed_ms(&start_time);
        log::info!("no legal moves, score {}", best_result.score);
        return best_result;
    };
    best_result.best_move = Some(fallback);

    for depth in 1..=config.max_depth.max(1) {
        match search_root(pos, depth, &mut ctx) {
            Some((mv, score)) => {
                best_result.best_move = Some(mv);
                best_result.score = score;
                best_result.depth = depth;
                best_result.nodes_searched = ctx.nodes();
                best_result.time_ms = elapsed_ms(&start_time);
                print_search_info(&best_result);
            }
            None => {
                best_result.timed_out = true;
                break;
            }
        }
    }

    best_result.nodes_searched = ctx.nodes();
    best_result.time_ms = elapsed_ms(&start_time);

    log::info!(
        "bestmove {} depth {} score {} nodes {} time {}ms{}",
        best_result.best_move_uci(),
        best_result.depth,
        best_result.score,
        best_result.nodes_searched,
        best_result.time_ms,
        if best_result.timed_out { " (timed out)" } else { "" },
    );

    best_result
}

/// Search exactly `depth` plies without any time or node limit
pub fn search_fixed_depth(pos: &mut Position, depth: u8) -> SearchResult {
    let start_time = Instant::now();
    let mut ctx = SearchContext::unbounded();
    let mut result = SearchResult::new();

    if !pos.has_legal_moves() {
        result.score = terminal_score(pos);
        return result;
    }

    if let Some((mv, score)) = search_root(pos, depth.max(1), &mut ctx) {
        result.best_move = Some(mv);
        result.score = score;
        result.depth = depth.max(1);
    }
    result.nodes_searched = ctx.nodes();
    result.time_ms = elapsed_ms(&start_time);
    result
}

/// One iteration over the root moves
///
/// Every root move gets the full window. Returns None when the iteration
/// was interrupted; its scores are not trustworthy then.
fn search_root(pos: &mut Position, depth: u8, ctx: &mut SearchContext) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for mv in generate_ordered_moves(pos) {
        let score = {
            let mut child = pos.make_move(mv);
            -negamax(&mut child, depth - 1, -INF, INF, 1, ctx)
        };

        if ctx.is_aborted() || ctx.poll_deadline() {
            return None;
        }

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best
}

/// Score of a position without legal moves
fn terminal_score(pos: &Position) -> i32 {
    if pos.is_in_check() {
        -MATE_SCORE
    } else {
        0
    }
}

fn elapsed_ms(start_time: &Instant) -> u64 {
    start_time.elapsed().as_millis() as u64
}

/// Log search information for one completed depth
fn print_search_info(result: &SearchResult) {
    let nps = if result.time_ms > 0 {
        result.nodes_searched * 1000 / result.time_ms
    } else {
        0
    };

    log::debug!(
        "depth {} score {} nodes {} time {}ms nps {} bestmove {}",
        result.depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        nps,
        result.best_move_uci(),
    );
}
