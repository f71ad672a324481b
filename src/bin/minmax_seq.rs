//! Sequential variant: one pass over the whole array.
//!
//! Run with: cargo run --release --bin minmax-seq -- [-v] [-h]

use std::process::ExitCode;

use minmax_reduce::cli::{self, SequentialCli};
use minmax_reduce::pipeline::{self, Mode};
use minmax_reduce::report::{usage, Report, SEQUENTIAL_OPTIONS, SEQUENTIAL_USAGE};
use minmax_reduce::telemetry;

fn main() -> ExitCode {
    let args: SequentialCli = cli::parse_lenient();
    if args.common.help {
        print!("{}", usage(&cli::bin_name(), SEQUENTIAL_USAGE, SEQUENTIAL_OPTIONS));
        return ExitCode::SUCCESS;
    }

    let config = args.config();
    telemetry::init(config.verbose);

    match pipeline::run(&config, Mode::Sequential) {
        Ok(reduction) => {
            print!("{}", Report::sequential(reduction));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "sequential reduction failed");
            ExitCode::FAILURE
        }
    }
}
