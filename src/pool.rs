//! Same partition and combine as [`crate::aggregate`], but the workers run
//! on a dedicated rayon pool sized to the worker count.

use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::aggregate::{run_worker, Reduction, ResultTable, WorkerState};
use crate::error::{ConfigError, ReduceError};
use crate::minmax::combine;
use crate::partition::{partition, Chunk};

/// Run every chunk as one task on `pool` and publish into `table`.
///
/// A panicking task is caught and reported as that worker's failure instead
/// of unwinding through `install`.
fn run_on_pool(
    pool: &ThreadPool,
    tab: &[i32],
    chunks: &[Chunk],
    table: &ResultTable,
) -> Result<(), ReduceError> {
    for worker in 0..chunks.len() {
        trace!(worker, state = ?WorkerState::Spawned, "worker state");
    }

    pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .try_for_each(|(worker, &chunk)| {
                panic::catch_unwind(AssertUnwindSafe(|| run_worker(worker, chunk, tab, table)))
                    .unwrap_or(Err(ReduceError::WorkerPanicked { worker }))
            })
    })
}

pub fn rayon_min_max(tab: &[i32], workers: usize) -> Result<Reduction, ReduceError> {
    let workers = NonZeroUsize::new(workers).ok_or(ConfigError::ZeroWorkers)?;
    if tab.is_empty() {
        return Err(ReduceError::EmptyInput);
    }

    let chunks = partition(tab.len(), workers);
    let table = ResultTable::new(workers.get());
    let start = Instant::now();

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|index| format!("minmax-rayon-{index}"))
        .build()?;

    run_on_pool(&pool, tab, &chunks, &table)?;

    let min_max = combine(table.into_partials()?).ok_or(ReduceError::EmptyInput)?;
    let elapsed = start.elapsed();

    debug!(%min_max, ?elapsed, workers = workers.get(), "rayon reduction done");
    Ok(Reduction {
        min_max,
        workers: workers.get(),
        elapsed,
    })
}
