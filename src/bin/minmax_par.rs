//! Parallel variant: the array is split into one chunk per worker thread.
//!
//! Run with: cargo run --release --bin minmax-par -- [-v] [-h] [-t N] [-e threads|rayon]

use std::process::ExitCode;

use minmax_reduce::cli::{self, ParallelCli};
use minmax_reduce::pipeline::{self, Mode};
use minmax_reduce::report::{usage, Report, PARALLEL_OPTIONS, PARALLEL_USAGE};
use minmax_reduce::telemetry;

fn main() -> ExitCode {
    let args: ParallelCli = cli::parse_lenient();
    if args.common.help {
        print!("{}", usage(&cli::bin_name(), PARALLEL_USAGE, PARALLEL_OPTIONS));
        return ExitCode::SUCCESS;
    }

    let config = args.config();
    telemetry::init(config.verbose);

    match pipeline::run(&config, Mode::Parallel) {
        Ok(reduction) => {
            print!("{}", Report::parallel(reduction));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, engine = ?config.engine, "parallel reduction failed");
            ExitCode::FAILURE
        }
    }
}
