use super::moves::{Move, MoveList};
use crate::error::{EngineError, EngineResult};
use chess::{BitBoard, Board, ChessMove, Color, MoveGen, Piece, Square};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/*
 * THIN ADAPTER OVER THE RULES ENGINE
 * make_move/unmake_move keep strict stack discipline:
 * every applied move is reverted exactly once, newest first
 */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    current: Board,
    /// Boards that were current before each applied move, oldest first
    prev: Vec<Board>,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl Position {
    pub fn from_fen(fen_str: &str) -> EngineResult<Position> {
        let board = Board::from_str(fen_str).map_err(|_| EngineError::InvalidFen {
            fen: fen_str.to_string(),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Position {
        Self {
            current: board,
            prev: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn to_fen(&self) -> String {
        self.current.to_string()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.current.side_to_move()
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.current.checkers().popcnt() > 0
    }

    /// Number of moves currently applied on top of the root board
    #[inline]
    pub fn applied_moves(&self) -> usize {
        self.prev.len()
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.current.piece_on(square)
    }

    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.current.color_on(square)
    }

    /// All legal moves, in the rules engine's generation order
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.current).collect()
    }

    pub fn has_legal_moves(&self) -> bool {
        MoveGen::new_legal(&self.current).len() > 0
    }

    /// Legal captures only, en passant included
    pub fn legal_captures(&self) -> MoveList {
        let mut targets = *self.current.color_combined(!self.side_to_move());
        if let Some(ep) = self.en_passant_target() {
            targets = targets | BitBoard::from_square(ep);
        }

        let mut movegen = MoveGen::new_legal(&self.current);
        movegen.set_iterator_mask(targets);
        // The en passant square can also be reached by quiet moves
        movegen.filter(|&mv| self.is_capture(mv)).collect()
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        self.current.piece_on(mv.get_dest()).is_some() || self.is_en_passant(mv)
    }

    /// A pawn moving diagonally onto an empty square
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.current.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
            && self.current.piece_on(mv.get_dest()).is_none()
    }

    /// Square a pawn lands on when capturing en passant, if any
    fn en_passant_target(&self) -> Option<Square> {
        self.current
            .en_passant()
            .map(|pawn| pawn.uforward(self.side_to_move()))
    }

    /// Looks a move up by its coordinate notation among the legal moves
    pub fn find_move(&self, uci: &str) -> Option<Move> {
        MoveGen::new_legal(&self.current).find(|mv| mv.to_string() == uci)
    }

    /// Applies a move and returns a guard that reverts it when dropped
    ///
    /// The guard dereferences to the position, so the search recurses
    /// through it and the revert runs on every exit path, including early
    /// returns on beta cutoffs.
    pub fn make_move(&mut self, mv: ChessMove) -> MoveGuard<'_> {
        let next = self.current.make_move_new(mv);
        self.prev.push(std::mem::replace(&mut self.current, next));
        MoveGuard { pos: self }
    }

    fn unmake_move(&mut self) {
        if let Some(board) = self.prev.pop() {
            self.current = board;
        }
    }
}

/// Scoped application of one move; dropping it restores the previous board
#[must_use = "dropping the guard immediately reverts the move"]
pub struct MoveGuard<'a> {
    pos: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.pos.unmake_move();
    }
}
