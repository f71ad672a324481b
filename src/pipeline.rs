//! Generate, then reduce. The array is fully built before any worker runs.

use tracing::{debug, info};

use crate::aggregate::{parallel_min_max, sequential_min_max, Reduction};
use crate::config::{Config, Engine};
use crate::error::ReduceError;
use crate::generator::{generate_from, RandomSource};
use crate::pool::rayon_min_max;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Parallel,
}

pub fn reduce(tab: &[i32], config: &Config, mode: Mode) -> Result<Reduction, ReduceError> {
    match mode {
        Mode::Sequential => sequential_min_max(tab),
        Mode::Parallel => {
            let workers = config.resolved_workers();
            match config.engine {
                Engine::Threads => parallel_min_max(tab, workers),
                Engine::Rayon => rayon_min_max(tab, workers),
            }
        }
    }
}

pub fn run(config: &Config, mode: Mode) -> Result<Reduction, ReduceError> {
    config.validate()?;

    let source = RandomSource::from_seed(config.seed);
    let tab = generate_from(config.size, source)?;
    debug!(size = tab.len(), "array ready");

    let reduction = reduce(&tab, config, mode)?;
    info!(?mode, engine = ?config.engine, workers = reduction.workers, "reduction finished");
    Ok(reduction)
}
