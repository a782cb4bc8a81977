//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::ffi::OsString;

use anyhow::{anyhow, bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::IStr;

pub use self::bencher::Bencher;
pub use self::error::{CliError, LineCol};
pub use self::output::Answer;
pub(crate) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Solve once and print the answer.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// How to run the solver.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    ensure!(opts.mode == Mode::Default, "duplicate `--bench` arguments");
                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Parse the argument to an option.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;

    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;

    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Run a solver over the given input according to `opts`.
///
/// In the default mode the answer is compared against `expected` and
/// printed. Errors are decorated with the position in the input they
/// originate from.
pub fn run<T, O, C>(
    opts: &Opts,
    path: &'static str,
    input: IStr,
    expected: C,
    mut solve: T,
) -> Result<()>
where
    T: FnMut(IStr) -> Result<O>,
    O: fmt::Debug + Answer + OutputEq<C>,
    C: fmt::Debug,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    match opts.mode {
        Mode::Default => {
            let value = match solve(input) {
                Ok(value) => value,
                Err(error) => {
                    let error = error::error_context(path, input, error);

                    if opts.json {
                        o.error(format_args!("{error:#}"))?;
                    }

                    return Err(error);
                }
            };

            ensure!(
                value.output_eq(&expected),
                "{value:?} (value) != {expected:?} (expected)"
            );

            o.answer(&value)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();

            if let Err(error) = b.iter(&mut o, opts, &expected, || solve(input)) {
                if opts.json {
                    o.error(format_args!("{error:#}"))?;
                }

                return Err(error);
            }
        }
    }

    Ok(())
}

/// Latency report of a benchmark.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Construct a report out of sorted samples.
    pub fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let avg = if count == 0 {
            Duration::default()
        } else {
            let sum = samples.iter().copied().sum::<Duration>();
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
        }
    }
}

/// Pick the given percentile expressed in hundredths of a percent out of
/// sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples[(last * p / 10000).min(last)]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;
    use std::ffi::OsString;

    use super::{Mode, Opts, Report};

    fn args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_parse_opts() -> anyhow::Result<()> {
        let opts = Opts::parse_from(args(&["--bench", "--count", "5", "--json"]))?;
        assert_eq!(opts.mode, Mode::Bench);
        assert_eq!(opts.count, Some(5));
        assert!(opts.json);

        let opts = Opts::parse_from(args(&["--verbose", "--", "--bench"]))?;
        assert_eq!(opts.mode, Mode::Default);
        assert!(opts.verbose);
        Ok(())
    }

    #[test]
    fn test_parse_opts_errors() {
        assert!(Opts::parse_from(args(&["--bench", "--bench"])).is_err());
        assert!(Opts::parse_from(args(&["--count"])).is_err());
        assert!(Opts::parse_from(args(&["--count", "many"])).is_err());
        assert!(Opts::parse_from(args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_report() {
        let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
        let report = Report::from_sorted(&samples);

        assert_eq!(report.count, 100);
        assert_eq!(report.min, Duration::from_millis(1));
        assert_eq!(report.max, Duration::from_millis(100));
        assert_eq!(report.p50, Duration::from_millis(50));
        assert_eq!(report.p99, Duration::from_millis(99));
        assert_eq!(report.avg, Duration::from_micros(50500));

        let empty = Report::from_sorted(&[]);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.p50, Duration::default());
    }
}
