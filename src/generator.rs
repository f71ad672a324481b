//! Array generation.
//!
//! The array is filled front to back, one draw per slot, so a seeded
//! [`StdRng`] always produces the same array.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::ReduceError;

/// Where the generator gets its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// Seeded from OS entropy; results differ between runs.
    Entropy,
    Seeded(u64),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seeded)
    }

    pub fn rng(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_entropy(),
            Self::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Overwrite every slot of `buf` with a value drawn from the full `i32` range.
pub fn fill<R: Rng + ?Sized>(buf: &mut [i32], rng: &mut R) {
    for slot in buf.iter_mut() {
        *slot = rng.gen();
    }
}

/// Allocate an array of `size` integers and fill it from `rng`.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Vec<i32>, ReduceError> {
    let mut tab: Vec<i32> = Vec::new();
    tab.try_reserve_exact(size)
        .map_err(|_| ReduceError::Allocation { size })?;
    tab.resize(size, 0);

    debug!(size, "filling array");
    fill(&mut tab, rng);
    Ok(tab)
}

/// Convenience wrapper building the rng from a [`RandomSource`].
pub fn generate_from(size: usize, source: RandomSource) -> Result<Vec<i32>, ReduceError> {
    debug!(?source, "random source selected");
    let mut rng = source.rng();
    generate(size, &mut rng)
}
