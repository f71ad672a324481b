//! Fork-join min/max over scoped OS threads.
//!
//! Each worker scans its own chunk of the borrowed array and publishes its
//! partial into a [`ResultTable`] guarded by a mutex. The controlling thread
//! joins every worker before it reads the table back and folds the partials.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::{ConfigError, ReduceError};
use crate::minmax::{combine, scan, scan_chunk, MinMax};
use crate::partition::{partition, Chunk};

/// Lifecycle of a single worker. There is no failure state: a worker that
/// dies takes the whole reduction down with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Spawned,
    Running,
    Completed,
}

/// One entry of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Pending,
    /// The worker's chunk was empty.
    Empty,
    Filled(MinMax),
}

impl From<Option<MinMax>> for Slot {
    fn from(partial: Option<MinMax>) -> Self {
        partial.map_or(Slot::Empty, Slot::Filled)
    }
}

/// Per-worker partial results, indexed by worker id.
///
/// Slots never alias, but every write still goes through the lock.
#[derive(Debug)]
pub struct ResultTable {
    slots: Mutex<Vec<Slot>>,
}

impl ResultTable {
    pub fn new(workers: usize) -> Self {
        Self {
            slots: Mutex::new(vec![Slot::Pending; workers]),
        }
    }

    pub fn publish(&self, worker: usize, partial: Option<MinMax>) -> Result<(), ReduceError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| ReduceError::ResultTablePoisoned)?;
        debug_assert_eq!(slots[worker], Slot::Pending, "slot {worker} written twice");
        slots[worker] = Slot::from(partial);
        Ok(())
    }

    /// Consume the table once every worker has been joined.
    pub fn into_partials(self) -> Result<Vec<Option<MinMax>>, ReduceError> {
        let slots = self
            .slots
            .into_inner()
            .map_err(|_| ReduceError::ResultTablePoisoned)?;

        slots
            .into_iter()
            .enumerate()
            .map(|(worker, slot)| match slot {
                Slot::Pending => Err(ReduceError::MissingPartial { worker }),
                Slot::Empty => Ok(None),
                Slot::Filled(min_max) => Ok(Some(min_max)),
            })
            .collect()
    }
}

/// Outcome of one reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    pub min_max: MinMax,
    pub workers: usize,
    pub elapsed: Duration,
}

/// Single pass over the whole array on the calling thread.
pub fn sequential_min_max(tab: &[i32]) -> Result<Reduction, ReduceError> {
    let start = Instant::now();
    let min_max = scan(tab).ok_or(ReduceError::EmptyInput)?;
    let elapsed = start.elapsed();

    debug!(%min_max, ?elapsed, "sequential scan done");
    Ok(Reduction {
        min_max,
        workers: 1,
        elapsed,
    })
}

pub(crate) fn run_worker(
    worker: usize,
    chunk: Chunk,
    tab: &[i32],
    table: &ResultTable,
) -> Result<(), ReduceError> {
    trace!(worker, state = ?WorkerState::Running, start = chunk.start, end = chunk.end, "worker state");
    let partial = scan_chunk(tab, chunk);
    table.publish(worker, partial)?;
    trace!(worker, state = ?WorkerState::Completed, ?partial, "worker state");
    Ok(())
}

/// Spawn one thread per chunk, join them all, then combine.
///
/// The reported time runs from just before the first spawn to just after
/// the combine.
pub fn parallel_min_max(tab: &[i32], workers: usize) -> Result<Reduction, ReduceError> {
    let workers = NonZeroUsize::new(workers).ok_or(ConfigError::ZeroWorkers)?;
    if tab.is_empty() {
        return Err(ReduceError::EmptyInput);
    }

    let chunks = partition(tab.len(), workers);
    debug!(size = tab.len(), workers = workers.get(), "partitioned array");

    let table = ResultTable::new(workers.get());
    let start = Instant::now();

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut spawn_error = None;

        for (worker, &chunk) in chunks.iter().enumerate() {
            let table = &table;
            let spawned = thread::Builder::new()
                .name(format!("minmax-worker-{worker}"))
                .spawn_scoped(s, move || run_worker(worker, chunk, tab, table));

            match spawned {
                Ok(handle) => {
                    trace!(worker, state = ?WorkerState::Spawned, "worker state");
                    handles.push((worker, handle));
                }
                Err(err) => {
                    spawn_error = Some(ReduceError::spawn(worker, err));
                    break;
                }
            }
        }

        // Join everything that did start, even after a failed spawn, so no
        // panic escapes the scope unobserved.
        let mut outcome = Ok(());
        for (worker, handle) in handles {
            let joined = handle
                .join()
                .unwrap_or(Err(ReduceError::WorkerPanicked { worker }));
            if let (Err(err), true) = (joined, outcome.is_ok()) {
                outcome = Err(err);
            }
        }

        match spawn_error {
            Some(err) => Err(err),
            None => outcome,
        }
    })?;

    let partials = table.into_partials()?;
    let min_max = combine(partials).ok_or(ReduceError::EmptyInput)?;
    let elapsed = start.elapsed();

    debug!(%min_max, ?elapsed, "parallel reduction done");
    Ok(Reduction {
        min_max,
        workers: workers.get(),
        elapsed,
    })
}
