use crate::prelude::*;

/// Depth-first search. Extensions are tried in the order the puzzle lists
/// them and the first solution found is returned, which need not be the
/// shortest.
#[derive(Debug, Default, Clone, Copy)]
pub struct DfsSolver;

impl Solver for DfsSolver {
    fn solve<P: Puzzle>(&self, puzzle: P, seen: Option<&Seen>) -> Vec<P> {
        let signature = puzzle.signature();
        if puzzle.is_solved() && !seen.map_or(false, |s| s.contains(&signature)) {
            return vec![puzzle];
        }

        let mut seen = seen.cloned().unwrap_or_default();
        if seen.contains(&signature) {
            return Vec::new();
        }

        let extensions = puzzle.extensions();
        if extensions.is_empty() {
            log::trace!("dfs: dead end at {}", signature);
            return Vec::new();
        }
        seen.insert(signature);

        for extension in extensions {
            let signature = extension.signature();
            if seen.contains(&signature) {
                continue;
            }

            if extension.is_solved() {
                return vec![puzzle, extension];
            }

            if extension.fail_fast() {
                log::trace!("dfs: pruned {}", signature);
                seen.insert(signature);
                continue;
            }

            // Nested searches get a snapshot. Whatever they mark stays local
            // to them; only the failed extension itself is committed here.
            let rest = self.solve(extension, Some(&seen));
            if !rest.is_empty() {
                let mut path = Vec::with_capacity(rest.len() + 1);
                path.push(puzzle);
                path.extend(rest);
                return path;
            }

            seen.insert(signature);
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_number_line() {
        let path = DfsSolver.solve(NumberLine::new(3, 0), None);
        assert_eq!(signatures(&path), vec!["3", "2", "1", "0"]);
    }

    #[test]
    fn follows_first_branch_not_shortest() {
        // 0 -> 1 -> 2 -> 3 is found before the direct 0 -> 3.
        let graph = Graph::new(&[&[1, 3], &[2], &[3], &[]], &[3]);
        let path = DfsSolver.solve(graph.puzzle(0), None);
        assert_eq!(signatures(&path), vec!["n0", "n1", "n2", "n3"]);
    }

    #[test]
    fn backtracks_out_of_failed_branch() {
        let graph = Graph::new(&[&[1, 3], &[2], &[], &[4], &[]], &[4]);
        let path = DfsSolver.solve(graph.puzzle(0), None);
        assert_eq!(signatures(&path), vec!["n0", "n3", "n4"]);
    }

    #[test]
    fn does_not_recurse_into_fail_fast() {
        // n1 would reach the goal, but is marked dead.
        let graph = Graph::new(&[&[1, 2], &[3], &[4], &[], &[3]], &[3]).with_dead(&[1]);
        let path = DfsSolver.solve(graph.puzzle(0), None);
        assert_eq!(signatures(&path), vec!["n0", "n2", "n4", "n3"]);
    }

    #[test]
    fn solved_extension_wins_over_recursion() {
        let graph = Graph::new(&[&[1, 2], &[], &[]], &[1, 2]);
        let path = DfsSolver.solve(graph.puzzle(0), None);
        assert_eq!(signatures(&path), vec!["n0", "n1"]);
    }

    #[test]
    fn cycle_terminates() {
        let graph = Graph::new(&[&[1], &[2], &[0]], &[]);
        assert!(DfsSolver.solve(graph.puzzle(0), None).is_empty());
    }

    #[test]
    fn goal_outside_cycle_is_unreachable() {
        let graph = Graph::new(&[&[1], &[0], &[3], &[]], &[3]);
        assert!(DfsSolver.solve(graph.puzzle(0), None).is_empty());
    }
}
