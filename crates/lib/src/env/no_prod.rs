//! Development environment where inputs are read at runtime and positions are
//! tracked for error reporting.

use core::ops::Range;
use std::fs;
use std::io;

use anyhow::Context;
use thiserror::Error;

use crate::cli::error::LineCol;
use crate::input::IStr;

#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Raised when a bundled input doesn't exist.
#[derive(Debug, Error)]
#[error("{path}: resource not found")]
pub struct ResourceNotFound {
    pub path: &'static str,
}

/// Get the line and column of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    use crate::input::NL;

    let span = Size::usize_range(span);

    let Some(before) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, before) {
        Some(n) => (memchr::memchr_iter(NL, before).count(), span.start - n - 1),
        None => (0, span.start),
    };

    let end = match data.get(span) {
        Some(covered) => start + memchr::memchr(NL, covered).unwrap_or(covered.len()),
        None => start,
    };

    LineCol::new(line, start, end)
}

/// Load the input at `read_path`, which is displayed as `path`.
///
/// The loaded data is leaked, since it's used for the remainder of the
/// process anyway.
#[inline]
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    let data = match fs::read(read_path) {
        Ok(data) => data,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(ResourceNotFound { path }.into());
        }
        Err(error) => return Err(error).context(path),
    };

    log::trace!("{path}: loaded {} bytes", data.len());
    Ok(IStr::new(Vec::leak(data), Size::ZERO))
}

/// Load a bundled input by name.
///
/// Evaluates to the input processor and the display path of the input.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}

#[cfg(test)]
mod tests {
    use super::{input, pos_from, ResourceNotFound, Size};

    #[test]
    fn test_missing_resource() {
        let error = input("inputs/missing.txt", "/definitely/not/here/missing.txt")
            .err()
            .expect("missing input should fail");

        let error = error
            .downcast_ref::<ResourceNotFound>()
            .expect("should be a missing resource");

        assert_eq!(error.path, "inputs/missing.txt");
    }

    #[test]
    fn test_pos_from() {
        let data = b"first\nsecond line\nthird";

        let pos = pos_from(data, Size::new(13)..Size::new(17));
        assert_eq!(pos.to_string(), "2:7-11");

        let pos = pos_from(data, Size::new(2)..Size::new(2));
        assert_eq!(pos.to_string(), "1:2");
    }
}
