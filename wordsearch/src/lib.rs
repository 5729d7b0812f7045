//! Shared search engine for the word puzzle solvers: a prefix tree dictionary
//! index, a compact letter set, and the ceilings that keep searches bounded.

mod error;
mod letter_set;
mod limits;
mod prefix_tree;

pub use error::*;
pub use letter_set::*;
pub use limits::*;
pub use prefix_tree::*;
