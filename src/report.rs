use std::fmt;

use crate::aggregate::Reduction;

// =============================================================================
// Usage banner
// =============================================================================

pub const SEQUENTIAL_USAGE: &str = "USAGE: fills a large array with random integers, \
then scans it for its minimum and maximum and prints the result";

pub const PARALLEL_USAGE: &str = "USAGE: fills a large array with random integers, \
then splits it across worker threads to find its minimum and maximum and prints the result";

pub const USAGE_SYNTAX: &str = "[OPTIONS] No parameters needed";

pub const SEQUENTIAL_OPTIONS: &str = "OPTIONS:
  -v, --verbose     : enable *verbose* mode
  -h, --help        : display this help
  -s, --seed <N>    : seed the random generator for a reproducible array
      --size <N>    : number of integers in the array
";

pub const PARALLEL_OPTIONS: &str = "OPTIONS:
  -v, --verbose     : enable *verbose* mode
  -h, --help        : display this help
  -s, --seed <N>    : seed the random generator for a reproducible array
      --size <N>    : number of integers in the array
  -t, --threads <N> : number of worker threads (0 = one per CPU)
  -e, --engine <E>  : fork-join backend, `threads` or `rayon`
";

/// `<bin> <description>\n<syntax>\n\n<options>\n`
pub fn usage(bin_name: &str, description: &str, options: &str) -> String {
    format!("{bin_name} {description}\n{USAGE_SYNTAX}\n\n{options}\n")
}

// =============================================================================
// Result lines
// =============================================================================

/// What the binaries print on stdout once a reduction succeeds.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub reduction: Reduction,
    pub show_threads: bool,
}

impl Report {
    pub fn sequential(reduction: Reduction) -> Self {
        Self {
            reduction,
            show_threads: false,
        }
    }

    pub fn parallel(reduction: Reduction) -> Self {
        Self {
            reduction,
            show_threads: true,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Reduction {
            min_max,
            workers,
            elapsed,
        } = self.reduction;

        if self.show_threads {
            writeln!(f, "Number of threads: {workers}")?;
        }
        writeln!(f, "Minimum value: {}", min_max.min)?;
        writeln!(f, "Maximum value: {}", min_max.max)?;
        writeln!(f, "Time taken: {:.6} seconds", elapsed.as_secs_f64())
    }
}
