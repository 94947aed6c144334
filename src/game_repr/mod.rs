mod moves;
mod position;


pub use moves::*;
pub use position::*;

pub use chess::{Board, Color, Piece, Square};
