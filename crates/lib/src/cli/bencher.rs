use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};

use crate::cli::{Opts, Output, OutputEq, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Repeatedly runs a solver and reports its latency.
#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given solver, verifying each answer against `expected`.
    pub(crate) fn iter<T, O, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: &C,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                self.sample(expected, &mut iter)?;
            }
        }

        self.samples.clear();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let d = self.sample(expected, &mut iter)?;
                self.samples.push(d);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let d = self.sample(expected, &mut iter)?;
                self.samples.push(d);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        self.samples.sort();
        o.report(&Report::from_sorted(&self.samples))?;
        Ok(())
    }

    /// Run the solver once, returning how long it took.
    fn sample<T, O, C>(&self, expected: &C, iter: &mut T) -> Result<Duration>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let before = Instant::now();
        let value = iter()?;
        let d = before.elapsed();

        ensure!(
            value.output_eq(expected),
            "{value:?} (value) != {expected:?} (expected)"
        );

        black_box(value);
        Ok(d)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::Bencher;
    use crate::cli::{Opts, Output, OutputKind};

    fn opts(args: &[&str]) -> Opts {
        Opts::parse_from(args.iter().map(Into::into)).expect("valid options")
    }

    #[test]
    fn test_counted_bench() -> anyhow::Result<()> {
        let opts = opts(&["--bench", "--warmup", "0", "--count", "3"]);
        let mut out = Vec::new();
        let mut calls = 0;

        Bencher::new().iter(&mut Output::new(&mut out, OutputKind::Normal), &opts, &(1, 2), || {
            calls += 1;
            Ok((1u32, 2u32))
        })?;

        assert_eq!(calls, 3);

        let out = String::from_utf8(out)?;
        assert!(out.contains("running benches 3 time(s)"));
        assert!(out.contains("count: 3"));
        Ok(())
    }

    #[test]
    fn test_bench_checks_answers() {
        let opts = opts(&["--bench", "--warmup", "0", "--count", "1"]);
        let mut out = Vec::new();

        let result = Bencher::new().iter(
            &mut Output::new(&mut out, OutputKind::Normal),
            &opts,
            &(1, 2),
            || Ok((1u32, 3u32)),
        );

        assert!(result.is_err());

        let result = Bencher::new().iter(
            &mut Output::new(&mut out, OutputKind::Normal),
            &opts,
            &(1, 2),
            || -> anyhow::Result<(u32, u32)> { bail!("solver failed") },
        );

        assert!(result.is_err());
    }
}
