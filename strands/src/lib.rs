//! Solver for grid path puzzles: words are spelled by walking between
//! horizontally, vertically or diagonally adjacent cells of a letter grid,
//! using each cell at most once per word.

mod error;
mod grid;
mod search;

pub use error::*;
pub use grid::*;
pub use search::*;
