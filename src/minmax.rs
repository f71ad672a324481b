//! The `(min, max)` pair and the folds over it.

use std::fmt;

use crate::partition::Chunk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

impl MinMax {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn single(value: i32) -> Self {
        Self { min: value, max: value }
    }

    pub fn observe(&mut self, value: i32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for MinMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(min={}, max={})", self.min, self.max)
    }
}

/// Linear scan seeded from the first element. `None` for an empty slice.
pub fn scan(values: &[i32]) -> Option<MinMax> {
    let (&first, rest) = values.split_first()?;
    let mut acc = MinMax::single(first);
    for &value in rest {
        acc.observe(value);
    }
    Some(acc)
}

/// Local reduction over one worker's chunk.
pub fn scan_chunk(tab: &[i32], chunk: Chunk) -> Option<MinMax> {
    scan(&tab[chunk.range()])
}

/// Merge two optional partials; `None` is "no contribution".
pub fn merge_partial(acc: Option<MinMax>, next: Option<MinMax>) -> Option<MinMax> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(a.merge(b)),
        (a, b) => a.or(b),
    }
}

/// Global combine. Empty contributions are skipped; the fold order does not
/// affect the result.
pub fn combine<I>(partials: I) -> Option<MinMax>
where
    I: IntoIterator<Item = Option<MinMax>>,
{
    partials.into_iter().fold(None, merge_partial)
}
