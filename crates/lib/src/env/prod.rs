//! Production environment where inputs are embedded into the binary and no
//! positions are tracked.

use core::ops::Range;

use crate::cli::error::LineCol;

#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size;

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self;

    #[inline]
    pub(crate) fn new(_: usize) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn checked_add(self, _: Size) -> Option<Self> {
        Some(Self)
    }

    #[inline]
    pub(crate) fn saturating_add(self, _: Size) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn advance(&mut self, _: usize) {}
}

pub(crate) fn pos_from(_: &[u8], _: Range<Size>) -> LineCol {
    LineCol::EMPTY
}

/// Embed a bundled input by name. A missing input fails to compile.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        (
            $crate::input::IStr::from_static(include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/inputs/",
                $path
            ))),
            concat!("inputs/", $path),
        )
    }};
}
