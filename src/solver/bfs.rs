use crate::prelude::*;

use std::collections::VecDeque;

/// Breadth-first search over candidate paths. Without fail_fast pruning the
/// returned path has the fewest moves among paths avoiding the given seen
/// states.
#[derive(Debug, Default, Clone, Copy)]
pub struct BfsSolver;

impl Solver for BfsSolver {
    fn solve<P: Puzzle>(&self, puzzle: P, seen: Option<&Seen>) -> Vec<P> {
        let signature = puzzle.signature();
        if puzzle.is_solved() && !seen.map_or(false, |s| s.contains(&signature)) {
            return vec![puzzle];
        }

        let mut seen = seen.cloned().unwrap_or_default();
        if seen.contains(&signature) {
            return Vec::new();
        }

        let mut queue: VecDeque<Vec<P>> = puzzle
            .extensions()
            .into_iter()
            .map(|extension| vec![puzzle.clone(), extension])
            .collect();
        seen.insert(signature);

        let mut expanded = 1;
        while let Some(path) = queue.pop_front() {
            let Some(last) = path.last() else {
                continue;
            };

            let signature = last.signature();
            if seen.contains(&signature) {
                continue;
            }

            if last.is_solved() {
                log::debug!(
                    "bfs: found {} move solution after expanding {} states",
                    path.len() - 1,
                    expanded
                );
                return path;
            }

            if last.fail_fast() {
                log::trace!("bfs: pruned {}", signature);
                seen.insert(signature);
                continue;
            }

            for extension in last.extensions() {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend(path.iter().cloned());
                next.push(extension);
                queue.push_back(next);
            }
            seen.insert(signature);
            expanded += 1;
        }

        log::debug!("bfs: exhausted after expanding {} states", expanded);
        Vec::new()
    }
}
