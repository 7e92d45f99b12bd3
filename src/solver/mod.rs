use crate::prelude::*;

use core::fmt;

mod bfs;
pub use bfs::*;

mod dfs;
pub use dfs::*;

pub trait Solver {
    /// Find a path from `puzzle` to a solved state. The first element is
    /// `puzzle` and every following element is an extension of the one
    /// before it.
    ///
    /// No state whose signature is in `seen` may appear in the path. The
    /// caller's set is never modified. An empty path means no solution.
    fn solve<P: Puzzle>(&self, puzzle: P, seen: Option<&Seen>) -> Vec<P>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, enum_iterator::Sequence)]
pub enum SolverKind {
    Dfs,
    Bfs,
}

impl SolverKind {
    pub fn all() -> impl Iterator<Item = SolverKind> {
        enum_iterator::all()
    }
}

impl Solver for SolverKind {
    fn solve<P: Puzzle>(&self, puzzle: P, seen: Option<&Seen>) -> Vec<P> {
        match self {
            SolverKind::Dfs => DfsSolver.solve(puzzle, seen),
            SolverKind::Bfs => BfsSolver.solve(puzzle, seen),
        }
    }
}

impl core::str::FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<SolverKind> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(SolverKind::Dfs),
            "bfs" | "breadth-first" => Ok(SolverKind::Bfs),
            _ => Err(anyhow::anyhow!("Unrecognized solver {}", s)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Dfs => write!(f, "dfs"),
            SolverKind::Bfs => write!(f, "bfs"),
        }
    }
}
