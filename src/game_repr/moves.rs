// Move types shared by the search and the rules engine adapter

use chess::ChessMove;
use smallvec::SmallVec;

/// A move as produced by the rules engine: from-square, to-square and
/// optional promotion piece.
pub type Move = ChessMove;

/// Legal moves of one node. Regenerated at every node because the position
/// mutates between calls; 64 inline slots cover almost every real position.
pub type MoveList = SmallVec<[Move; 64]>;

/// Serialize a move in coordinate notation (`e2e4`, `e7e8q`)
#[inline]
pub fn to_uci(mv: Move) -> String {
    mv.to_string()
}
