use std::io;

use thiserror::Error;

// =============================================================================
// Error types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("array size must be at least 1")]
    ZeroSize,

    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Everything that can stop a reduction before it produces a result.
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("failed to allocate an array of {size} integers")]
    Allocation { size: usize },

    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {worker} panicked before publishing its result")]
    WorkerPanicked { worker: usize },

    #[error("result table lock was poisoned")]
    ResultTablePoisoned,

    #[error("worker {worker} completed without publishing a result")]
    MissingPartial { worker: usize },

    #[error("cannot reduce an empty array")]
    EmptyInput,

    #[error("failed to build rayon pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ReduceError {
    pub fn spawn(worker: usize, source: io::Error) -> Self {
        Self::Spawn { worker, source }
    }
}
