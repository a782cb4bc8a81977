//! Shared support for the puzzle binaries.
//!
//! Everything a day needs is available through [prelude].

pub mod cli;
pub mod ext;
pub mod grid;
pub mod input;
pub mod math;
pub mod sim;

#[cfg_attr(prod, path = "env/prod.rs")]
#[cfg_attr(not(prod), path = "env/no_prod.rs")]
pub mod env;

mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::ext::SliceExt;
    pub use crate::grid::{Cell, Direction, Grid, GridError, Scan};
    pub use crate::input::{IStr, NonEmpty, Skip, Split, B, W};
    pub use crate::input::{Nl, Ws};
    pub use crate::math::{gcd, lcm, lcm_all};
    pub use crate::sim::{Cpu, Op};
    pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub type ArrayString<const N: usize = 16> = arrayvec::ArrayString<N>;
    pub type ArrayRingBuffer<T, const N: usize = 64> = ringbuffer::ConstGenericRingBuffer<T, N>;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::{BStr, ByteSlice};
    pub use ringbuffer::{RingBuffer, RingBufferExt, RingBufferRead, RingBufferWrite};
    pub use std::collections::HashMap;
}
