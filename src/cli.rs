//! Command-line surface shared by both binaries.
//!
//! Parsing is lenient: anything clap does not know about is dropped before
//! clap sees it, so stray options never stop a run.

use std::ffi::{OsStr, OsString};

use clap::{Arg, Args, Command, CommandFactory, Parser};

use crate::config::{Config, Engine};

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
    /// display this help
    #[arg(short, long)]
    pub help: bool,
    /// seed the random generator for a reproducible array
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// number of integers in the array
    #[arg(long)]
    pub size: Option<usize>,
}

impl CommonArgs {
    fn apply(&self, mut config: Config) -> Config {
        config = config.with_verbose(self.verbose);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        config
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(disable_help_flag = true)]
pub struct SequentialCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SequentialCli {
    pub fn config(&self) -> Config {
        self.common.apply(Config::default())
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(disable_help_flag = true)]
pub struct ParallelCli {
    #[command(flatten)]
    pub common: CommonArgs,
    /// number of worker threads, 0 for one per CPU
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// fork-join backend
    #[arg(short, long, value_enum)]
    pub engine: Option<Engine>,
}

impl ParallelCli {
    pub fn config(&self) -> Config {
        let mut config = self.common.apply(Config::default());
        if let Some(threads) = self.threads {
            config = config.with_workers(threads);
        }
        if let Some(engine) = self.engine {
            config = config.with_engine(engine);
        }
        config
    }
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}

/// Whether clap would take `value` for `arg` on its own.
fn accepts(cmd: &Command, arg: &Arg, value: &OsStr) -> bool {
    let mut spelled = match (arg.get_long(), arg.get_short()) {
        (Some(long), _) => OsString::from(format!("--{long}=")),
        (None, Some(short)) => OsString::from(format!("-{short}")),
        (None, None) => return false,
    };
    spelled.push(value);

    cmd.clone()
        .try_get_matches_from([OsString::from(cmd.get_name()), spelled])
        .is_ok()
}

fn find_long<'a>(cmd: &'a Command, name: &str) -> Option<&'a Arg> {
    cmd.get_arguments().find(|arg| arg.get_long() == Some(name))
}

fn find_short(cmd: &Command, short: char) -> Option<&Arg> {
    cmd.get_arguments().find(|arg| arg.get_short() == Some(short))
}

/// Keep the program name and every option `cmd` understands, together with
/// the values they consume. Unknown options, positionals and options whose
/// value does not parse are dropped. Short flags may be clustered (`-vh`,
/// `-t4`).
///
/// clap's `ignore_errors` stops at the first bad token and keeps nothing
/// after it, so `-t many -h` would lose the `-h`. Filtering here lets clap
/// parse a line that is already known to be valid.
pub fn retain_known<I, T>(cmd: &Command, raw: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut raw = raw.into_iter().map(Into::<OsString>::into).peekable();
    let mut kept: Vec<OsString> = raw.next().into_iter().collect();

    while let Some(token) = raw.next() {
        let Some(token) = token.to_str().map(str::to_owned) else {
            continue;
        };
        if token == "--" {
            break;
        }

        if let Some(long) = token.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            match find_long(cmd, name) {
                Some(arg) if takes_value(arg) => {
                    // A rejected next token stays in the stream so a flag
                    // such as `-h` right after `--seed` is still seen.
                    let value = match inline {
                        Some(value) => Some(OsString::from(value))
                            .filter(|value| accepts(cmd, arg, value)),
                        None => raw.next_if(|value| accepts(cmd, arg, value)),
                    };
                    if let Some(value) = value {
                        let mut spelled = OsString::from(format!("--{name}="));
                        spelled.push(value);
                        kept.push(spelled);
                    }
                }
                Some(_) if inline.is_none() => kept.push(token.clone().into()),
                _ => {}
            }
        } else if let Some(shorts) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
            for (i, short) in shorts.char_indices() {
                let Some(arg) = find_short(cmd, short) else {
                    continue;
                };
                if !takes_value(arg) {
                    kept.push(format!("-{short}").into());
                    continue;
                }

                let rest = &shorts[i + short.len_utf8()..];
                let value = if rest.is_empty() {
                    raw.next_if(|value| accepts(cmd, arg, value))
                } else {
                    Some(OsString::from(rest)).filter(|value| accepts(cmd, arg, value))
                };
                if let Some(value) = value {
                    kept.push(format!("-{short}").into());
                    kept.push(value);
                }
                break;
            }
        }
    }

    kept
}

pub fn try_parse_lenient_from<P, I, T>(raw: I) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = <P as CommandFactory>::command();
    cmd.build();
    P::try_parse_from(retain_known(&cmd, raw))
}

/// Parse the process arguments. Nothing on the command line can stop a run;
/// if clap still refuses the filtered line, the defaults are used.
pub fn parse_lenient<P: Parser + Default>() -> P {
    try_parse_lenient_from(std::env::args_os()).unwrap_or_else(|err| {
        tracing::debug!(%err, "ignoring command line");
        P::default()
    })
}

/// Name the binary was invoked as, for the usage banner.
pub fn bin_name() -> String {
    std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(args: &[&str]) -> SequentialCli {
        try_parse_lenient_from(args.iter().copied()).unwrap()
    }

    fn par(args: &[&str]) -> ParallelCli {
        try_parse_lenient_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_arguments() {
        let cli = seq(&["minmax-seq"]);
        assert_eq!(cli, SequentialCli::default());
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_short_and_long_flags() {
        assert!(seq(&["prog", "-v"]).common.verbose);
        assert!(seq(&["prog", "--verbose"]).common.verbose);
        assert!(seq(&["prog", "-h"]).common.help);
        assert!(seq(&["prog", "--help"]).common.help);
    }

    #[test]
    fn test_clustered_shorts() {
        let cli = seq(&["prog", "-vh"]);
        assert!(cli.common.verbose);
        assert!(cli.common.help);
    }

    #[test]
    fn test_unknown_options_are_ignored() {
        let cli = seq(&["prog", "--bogus", "-x", "-i", "input.txt", "positional", "-v"]);
        assert!(cli.common.verbose);
        assert!(!cli.common.help);
    }

    #[test]
    fn test_unknown_short_inside_cluster() {
        let cli = seq(&["prog", "-xvq"]);
        assert!(cli.common.verbose);
    }

    #[test]
    fn test_help_after_unknown_option() {
        assert!(seq(&["prog", "--nope", "--help"]).common.help);
    }

    #[test]
    fn test_parallel_options() {
        let cli = par(&["prog", "-t", "8", "--engine", "rayon", "--seed=7", "--size", "100"]);
        let config = cli.config();
        assert_eq!(config.workers, 8);
        assert_eq!(config.engine, Engine::Rayon);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.size, 100);
    }

    #[test]
    fn test_attached_short_value() {
        assert_eq!(par(&["prog", "-vt4"]).threads, Some(4));
    }

    #[test]
    fn test_threads_is_not_a_sequential_option() {
        let cli = seq(&["prog", "--threads", "4"]);
        assert_eq!(cli, SequentialCli::default());
    }

    #[test]
    fn test_bad_value_is_ignored() {
        let cli = par(&["prog", "-t", "many", "--size", "100"]);
        assert_eq!(cli.threads, None);
        assert_eq!(cli.common.size, Some(100));
    }

    #[test]
    fn test_help_wins_over_bad_value() {
        let cli = par(&["prog", "-t", "many", "-h"]);
        assert!(cli.common.help);
        assert_eq!(cli.threads, None);
    }

    #[test]
    fn test_flag_is_not_swallowed_as_value() {
        let cli = par(&["prog", "--threads", "-h"]);
        assert!(cli.common.help);
        assert_eq!(cli.threads, None);
    }

    #[test]
    fn test_negative_seed_is_ignored() {
        let cli = seq(&["prog", "--size", "100", "--seed", "-3", "-v"]);
        assert_eq!(cli.common.seed, None);
        assert_eq!(cli.common.size, Some(100));
        assert!(cli.common.verbose);
    }

    #[test]
    fn test_bad_inline_and_attached_values() {
        let cli = par(&["prog", "--engine=fast", "-tx", "--seed=oops", "-e", "rayon"]);
        assert_eq!(cli.engine, Some(Engine::Rayon));
        assert_eq!(cli.threads, None);
        assert_eq!(cli.common.seed, None);
    }

    #[test]
    fn test_missing_trailing_value() {
        let cli = par(&["prog", "-v", "--threads"]);
        assert!(cli.common.verbose);
        assert_eq!(cli.threads, None);
    }

    #[test]
    fn test_double_dash_stops_parsing() {
        let cli = seq(&["prog", "--", "-v"]);
        assert!(!cli.common.verbose);
    }
}
