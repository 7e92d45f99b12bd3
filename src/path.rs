use crate::prelude::*;

use std::collections::HashSet;

/// Check that `path` is a solution starting at `start`: consecutive states are
/// one move apart, no state repeats and the last state is solved.
pub fn check<P: Puzzle>(start: &P, path: &[P]) -> anyhow::Result<()> {
    let first = match path.first() {
        Some(first) => first,
        None => anyhow::bail!("Empty path"),
    };
    if first.signature() != start.signature() {
        anyhow::bail!(
            "Path starts at {:?}, expected {:?}",
            first.signature(),
            start.signature()
        );
    }

    let mut visited = HashSet::new();
    visited.insert(first.signature());

    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);
        let signature = to.signature();

        if !from.extensions().iter().any(|e| e.signature() == signature) {
            anyhow::bail!("Step {} to {:?} is not a legal move", i + 1, signature);
        }
        if !visited.insert(signature.clone()) {
            anyhow::bail!("Step {} revisits {:?}", i + 1, signature);
        }
    }

    match path.last() {
        Some(last) if last.is_solved() => Ok(()),
        _ => Err(anyhow::anyhow!("Path does not end in a solved state")),
    }
}
