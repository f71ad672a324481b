use crate::error::ConfigError;

/// Length of the array when nothing overrides it.
pub const DEFAULT_SIZE: usize = 100_000_000;

/// Worker count used by the parallel reducer unless told otherwise.
pub const DEFAULT_WORKERS: usize = 1;

/// Which fork-join backend runs the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Engine {
    /// One scoped OS thread per chunk, results published through a mutex.
    #[default]
    Threads,
    /// A dedicated rayon pool sized to the worker count.
    Rayon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    /// `0` means one worker per logical CPU.
    pub workers: usize,
    pub seed: Option<u64>,
    pub engine: Engine,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            workers: DEFAULT_WORKERS,
            seed: None,
            engine: Engine::default(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Worker count with the "auto" value expanded.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            0 => num_cpus::get().max(1),
            n => n,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.workers, 1);
        assert_eq!(config.seed, None);
        assert_eq!(config.engine, Engine::Threads);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .with_size(6)
            .with_workers(4)
            .with_seed(42)
            .with_engine(Engine::Rayon)
            .with_verbose(true);
        assert_eq!(config.size, 6);
        assert_eq!(config.resolved_workers(), 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.engine, Engine::Rayon);
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = Config::new().with_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));
    }

    #[test]
    fn test_auto_workers_uses_cpu_count() {
        let config = Config::new().with_workers(0);
        assert_eq!(config.resolved_workers(), num_cpus::get().max(1));
        assert!(config.validate().is_ok());
    }
}
