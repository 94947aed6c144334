pub mod ai;
pub use ai::{select_move, NegamaxPlayer, SearchConfig, SearchResult};
