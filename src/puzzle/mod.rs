use core::fmt;

mod number_line;
pub use number_line::*;

mod sudoku;
pub use sudoku::*;

mod word_ladder;
pub use word_ladder::*;

/// A full-information puzzle state.
///
/// States are immutable from the solver's point of view: a search only queries
/// them and chains the extensions it is handed.
pub trait Puzzle: Sized + Clone + fmt::Display {
    /// States reachable in exactly one legal move, in a stable order.
    fn extensions(&self) -> Vec<Self>;

    fn is_solved(&self) -> bool;

    /// True when this state can never lead to a solution.
    fn fail_fast(&self) -> bool {
        false
    }

    /// Canonical identity used for visited-tracking. Equal states must have
    /// equal signatures.
    fn signature(&self) -> String {
        self.to_string()
    }
}
