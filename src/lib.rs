//! Time-budgeted chess move selection
//!
//! Given a position in FEN and a wall-clock budget in milliseconds, pick a
//! move with negamax/alpha-beta search, quiescence and iterative deepening.
//! Board representation and move legality come from the `chess` crate.

pub mod agent;
pub mod error;
pub mod game_repr;

pub use agent::ai::{select_move, NegamaxPlayer, SearchConfig, SearchResult};
pub use error::{EngineError, EngineResult};
