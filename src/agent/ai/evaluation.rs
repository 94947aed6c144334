// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use super::piece_square_tables::{get_pst_value, piece_value};
use crate::game_repr::{Color, Position};

/// Static evaluation: material plus piece-square bonus for every piece
///
/// White pieces add, Black pieces subtract, and the total is negated when
/// Black is to move so the score is always from the mover's perspective.
pub fn evaluate(pos: &Position) -> i32 {
    let score = evaluate_white_relative(pos);

    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Material and position balance from White's point of view
pub fn evaluate_white_relative(pos: &Position) -> i32 {
    let board = pos.board();
    let mut score = 0;

    for square in *board.combined() {
        let (Some(piece), Some(color)) = (board.piece_on(square), board.color_on(square)) else {
            continue;
        };

        let piece_score = piece_value(piece) + get_pst_value(piece, square, color);

        match color {
            Color::White => score += piece_score,
            Color::Black => score -= piece_score,
        }
    }

    score
}
