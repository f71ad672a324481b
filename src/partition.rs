//! Splitting `[0, size)` into one contiguous chunk per worker.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Half-open index range `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Produce exactly `workers` chunks covering `[0, size)`.
///
/// Every chunk has `size / workers` elements except the last one, which
/// runs to `size` and picks up the remainder. With more workers than
/// elements the leading chunks are empty.
pub fn partition(size: usize, workers: NonZeroUsize) -> Vec<Chunk> {
    let workers = workers.get();
    let chunk_size = size / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == workers - 1 { size } else { start + chunk_size };
            Chunk::new(start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_even_split() {
        let chunks = partition(6, nz(2));
        assert_eq!(chunks, vec![Chunk::new(0, 3), Chunk::new(3, 6)]);
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let chunks = partition(6, nz(4));
        assert_eq!(
            chunks,
            vec![
                Chunk::new(0, 1),
                Chunk::new(1, 2),
                Chunk::new(2, 3),
                Chunk::new(3, 6),
            ]
        );
        assert_eq!(chunks[3].range().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_single_worker_takes_everything() {
        assert_eq!(partition(10, nz(1)), vec![Chunk::new(0, 10)]);
    }

    #[test]
    fn test_more_workers_than_elements() {
        let chunks = partition(3, nz(5));
        assert_eq!(chunks.len(), 5);
        assert!(chunks[..4].iter().all(Chunk::is_empty));
        assert_eq!(chunks[4], Chunk::new(0, 3));
    }

    #[test]
    fn test_chunk_len() {
        let chunk = Chunk::new(3, 6);
        assert_eq!(chunk.len(), 3);
        assert!(!chunk.is_empty());
        assert!(Chunk::new(2, 2).is_empty());
    }

    proptest! {
        #[test]
        fn prop_chunks_cover_exactly_once(size in 0usize..5_000, workers in 1usize..64) {
            let chunks = partition(size, nz(workers));
            prop_assert_eq!(chunks.len(), workers);

            let mut seen = vec![0u8; size];
            for chunk in &chunks {
                for i in chunk.range() {
                    seen[i] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
        }

        #[test]
        fn prop_chunks_are_contiguous(size in 0usize..5_000, workers in 1usize..64) {
            let chunks = partition(size, nz(workers));
            let non_empty: Vec<_> = chunks.iter().filter(|c| !c.is_empty()).collect();
            for pair in non_empty.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            prop_assert_eq!(chunks.last().map(|c| c.end), Some(size));
        }

        #[test]
        fn prop_only_last_chunk_is_larger(size in 0usize..5_000, workers in 1usize..64) {
            let chunks = partition(size, nz(workers));
            let base = size / workers;
            let (last, rest) = chunks.split_last().unwrap();
            prop_assert!(rest.iter().all(|c| c.len() == base));
            prop_assert!(last.len() >= base);
        }
    }
}
