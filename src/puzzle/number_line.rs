use crate::prelude::*;

use core::fmt;

const DEFAULT_BOUND: i64 = 1000;

/// Walk along the integers one step at a time until reaching `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLine {
    pub value: i64,
    pub target: i64,
    min: i64,
    max: i64,
}

impl NumberLine {
    pub fn new(value: i64, target: i64) -> NumberLine {
        NumberLine {
            value,
            target,
            min: value.min(target).min(-DEFAULT_BOUND),
            max: value.max(target).max(DEFAULT_BOUND),
        }
    }

    pub fn with_bounds(
        value: i64,
        target: i64,
        min: i64,
        max: i64,
    ) -> anyhow::Result<NumberLine> {
        if min > max {
            anyhow::bail!("Empty range {}..={}", min, max);
        }
        for (name, n) in [("Start", value), ("Target", target)] {
            if !(min..=max).contains(&n) {
                anyhow::bail!("{} {} outside of {}..={}", name, n, min, max);
            }
        }

        Ok(NumberLine {
            value,
            target,
            min,
            max,
        })
    }

    fn step(&self, value: i64) -> Option<NumberLine> {
        if (self.min..=self.max).contains(&value) {
            Some(NumberLine { value, ..*self })
        } else {
            None
        }
    }
}

impl fmt::Display for NumberLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Puzzle for NumberLine {
    fn extensions(&self) -> Vec<Self> {
        [self.value.checked_sub(1), self.value.checked_add(1)]
            .into_iter()
            .flatten()
            .filter_map(|v| self.step(v))
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.value == self.target
    }
}
