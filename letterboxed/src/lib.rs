//! Solver for letter-box chain puzzles: letters sit on the sides of a box,
//! consecutive letters of a word must come from different sides, and a
//! solution is a chain of words, each starting with the last letter of the
//! one before, that uses every letter of the box.

mod chain;
mod error;
mod letter_box;

pub use chain::*;
pub use error::*;
pub use letter_box::*;
