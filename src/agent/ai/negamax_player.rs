//! NegamaxPlayer - Classical chess AI using Negamax with Alpha-Beta pruning
//!
//! This module is the entry point of the move selector. A [`NegamaxPlayer`]
//! holds a [`SearchConfig`] and delegates move selection to the search
//! module's `iterative_deepening_search`. This keeps the caller-facing
//! interface (FEN in, UCI move out) separate from the search algorithm.
//!
//! The search is:
//! - **Deterministic** for a fixed node budget: same position, same move
//! - **Time-budgeted**: the caller gives milliseconds, not a depth
//! - **Stateless** between calls: nothing is learned or cached
//!
//! # Examples
//!
//! ```
//! use chess_simulator::agent::ai::{NegamaxPlayer, SearchConfig};
//!
//! let player = NegamaxPlayer::new(SearchConfig::default().with_max_depth(2));
//! let mv = player
//!     .select_move("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 100)
//!     .unwrap();
//! assert_eq!(mv.len(), 4);
//! ```

use super::config::SearchConfig;
use super::search::{iterative_deepening_search, SearchResult};
use crate::error::EngineResult;
use crate::game_repr::Position;

/// AI Player that uses Negamax algorithm with alpha-beta pruning
#[derive(Debug, Clone, Default)]
pub struct NegamaxPlayer {
    config: SearchConfig,
}

impl NegamaxPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search `pos` for at most `time_budget_ms` milliseconds
    ///
    /// This is a **blocking operation**. The position is used as scratch space
    /// during the search and is restored before returning. Fails only when
    /// the configuration is invalid.
    pub fn get_move(&self, pos: &mut Position, time_budget_ms: u64) -> EngineResult<SearchResult> {
        self.config.validate()?;
        Ok(iterative_deepening_search(pos, time_budget_ms, &self.config))
    }

    /// Select a move for the position described by `fen`
    ///
    /// # Returns
    ///
    /// * `Ok(uci)` - The chosen move in coordinate notation
    /// * `Ok("")` - The side to move has no legal move (checkmate or stalemate)
    /// * `Err(_)` - The FEN was rejected or the configuration is invalid
    pub fn select_move(&self, fen: &str, time_budget_ms: u64) -> EngineResult<String> {
        self.config.validate()?;
        let mut pos = Position::from_fen(fen)?;

        let result = self.get_move(&mut pos, time_budget_ms)?;
        Ok(result.best_move_uci())
    }
}

/// Select a move for `fen` within `time_budget_ms` using the default configuration
pub fn select_move(fen: &str, time_budget_ms: u64) -> EngineResult<String> {
    NegamaxPlayer::default().select_move(fen, time_budget_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_invalid_fen_rejected() {
        let err = select_move("definitely not a fen", 10).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidFen { fen: "definitely not a fen".to_string() }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let player = NegamaxPlayer::new(SearchConfig::default().with_check_interval(0));
        let result = player.select_move("4k3/8/8/8/8/8/8/4K3 w - - 0 1", 10);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_no_moves_gives_empty_string() {
        let mv = select_move("7k/8/5KQ1/8/8/8/8/8 b - - 0 1", 50).unwrap();
        assert_eq!(mv, "");
    }

    #[test]
    fn test_only_move() {
        // Black king boxed in by the white king, b8 is the only square
        let mv = select_move("k7/8/1K6/8/8/8/8/7R b - - 0 1", 50).unwrap();
        assert_eq!(mv, "a8b8");
    }

    #[test]
    fn test_get_move_restores_position() {
        let player = NegamaxPlayer::new(SearchConfig::default().with_max_depth(2));
        let mut pos = Position::default();
        let before = pos.clone();

        let result = player.get_move(&mut pos, 1_000).unwrap();
        assert!(result.best_move.is_some());
        assert_eq!(pos, before);
    }

    #[test]
    fn test_get_move_rejects_bad_safety_fraction() {
        let mut pos = Position::default();
        let before = pos.clone();

        for fraction in [f64::NAN, -1.0] {
            let player = NegamaxPlayer::new(SearchConfig::default().with_safety_fraction(fraction));
            let result = player.get_move(&mut pos, 100);
            assert!(
                matches!(result, Err(EngineError::InvalidConfig { .. })),
                "fraction {} should be rejected",
                fraction
            );
            assert_eq!(pos, before);
        }
    }
}
