//! Minimum and maximum of a large random `i32` array, computed either in one
//! sequential pass or by a fork-join pool of workers over contiguous chunks.
//!
//! ```
//! use minmax_reduce::aggregate::parallel_min_max;
//! use minmax_reduce::minmax::MinMax;
//!
//! let tab = [5, -3, 0, 42, -17, 8];
//! let reduction = parallel_min_max(&tab, 2).unwrap();
//! assert_eq!(reduction.min_max, MinMax::new(-17, 42));
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod minmax;
pub mod partition;
pub mod pipeline;
pub mod pool;
pub mod report;
pub mod telemetry;

pub use aggregate::{parallel_min_max, sequential_min_max, Reduction};
pub use config::{Config, Engine};
pub use error::{ConfigError, ReduceError};
pub use minmax::MinMax;
