// Material values and piece-square tables
// All values in centipawns (100 = 1 pawn)
// Tables are laid out as seen from White's side of the board:
// the first row is rank 8, the last row is rank 1

use crate::game_repr::{Color, Piece, Square};

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
/// Kings never leave the board, so both sides' king values cancel in the
/// evaluation; the value only matters for move ordering.
pub const KING_VALUE: i32 = 20000;

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 8
    -40,-20,  0,  0,  0,  0,-20,-40,  // Rank 7
    -30,  0, 10, 15, 15, 10,  0,-30,  // Rank 6
    -30,  5, 15, 20, 20, 15,  5,-30,  // Rank 5
    -30,  0, 15, 20, 20, 15,  0,-30,  // Rank 4
    -30,  5, 10, 15, 15, 10,  5,-30,  // Rank 3
    -40,-20,  0,  5,  5,  0,-20,-40,  // Rank 2
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 1
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 8
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -10,  0,  5, 10, 10,  5,  0,-10,  // Rank 6
    -10,  5,  5, 10, 10,  5,  5,-10,  // Rank 5
    -10,  0, 10, 10, 10, 10,  0,-10,  // Rank 4
    -10, 10, 10, 10, 10, 10, 10,-10,  // Rank 3
    -10,  5,  0,  0,  0,  0,  5,-10,  // Rank 2
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 1
];

// Rook position values - prefer 7th rank
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
     5, 10, 10, 10, 10, 10, 10,  5,  // Rank 7 (7th rank bonus)
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 6
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 5
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 4
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 3
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 2
     0,  0,  0,  5,  5,  0,  0,  0,  // Rank 1
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 8
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -10,  0,  5,  5,  5,  5,  0,-10,  // Rank 6
     -5,  0,  5,  5,  5,  5,  0, -5,  // Rank 5
      0,  0,  5,  5,  5,  5,  0, -5,  // Rank 4
    -10,  5,  5,  5,  5,  5,  0,-10,  // Rank 3
    -10,  0,  5,  0,  0,  0,  0,-10,  // Rank 2
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 1
];

// King position values - prefer safety on back rank
// No game phase detection: this table is used for the whole game
pub const KING_MIDDLEGAME_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 8
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 7
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 6
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 5
    -20,-30,-30,-40,-40,-30,-30,-20,  // Rank 4
    -10,-20,-20,-20,-20,-20,-20,-10,  // Rank 3
     20, 20,  0,  0,  0,  0, 20, 20,  // Rank 2
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
];

/// Get material value for a piece type
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

#[inline]
fn table_for(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_MIDDLEGAME_TABLE,
    }
}

/// Table index for a square
///
/// White flips the rank so the visual layout lines up with its ranks.
/// Black reads the table unmirrored, rank by rank from rank 1.
#[inline]
pub fn pst_index(square: Square, color: Color) -> usize {
    let rank = square.get_rank().to_index();
    let file = square.get_file().to_index();

    match color {
        Color::White => (7 - rank) * 8 + file,
        Color::Black => rank * 8 + file,
    }
}

/// Get piece-square table value for a piece of `color` on `square`
#[inline]
pub fn get_pst_value(piece: Piece, square: Square, color: Color) -> i32 {
    table_for(piece)[pst_index(square, color)]
}
