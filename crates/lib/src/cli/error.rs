use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate the input position an error originates from with it.
pub(crate) fn error_context(path: &'static str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let span = find_range(&error);
    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(CliError { path, pos })
}

/// A line and column range.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;

        if self.end > self.start {
            write!(f, "{line}:{}-{}", self.start, self.end)
        } else {
            write!(f, "{line}:{}", self.start)
        }
    }
}

/// Input errors can be wrapped in any number of contexts, so the whole chain
/// is searched.
fn find_range(error: &anyhow::Error) -> Range<Size> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
        .unwrap_or(Size::ZERO..Size::ZERO)
}

/// The input position a failure originates from.
#[derive(Debug)]
pub struct CliError {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::error_context;
    use crate::input::IStr;

    #[cfg(not(prod))]
    #[test]
    fn test_error_context_points_at_input() {
        let mut input = IStr::from_static(b"1 2\n3 x\n");
        let original = input;

        let error = input
            .iter::<(u32, u32)>()
            .collect::<Result<Vec<_>, _>>()
            .err()
            .map(anyhow::Error::from)
            .expect("parsing should fail");

        let error = error_context("inputs/test.txt", original, error);
        assert_eq!(error.to_string(), "inputs/test.txt:2:2-3");
    }

    #[test]
    fn test_error_context_without_span() {
        let error = error_context("inputs/test.txt", IStr::from_static(b""), anyhow!("boom"));
        assert_eq!(error.to_string(), "inputs/test.txt:1:0");
        assert_eq!(format!("{error:#}"), "inputs/test.txt:1:0: boom");
    }
}
