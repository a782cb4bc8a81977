//! Input parser.

mod error;
mod iter;
#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The remaining data.
    data: &'static [u8],
    /// Absolute index of the first remaining byte.
    index: Size,
    /// The data as it was when the processor was constructed.
    origin: (&'static [u8], Size),
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self {
            data,
            index,
            origin: (data, index),
        }
    }

    /// Construct an input processor over static data, starting at index zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::from_static(b"1 2\n3 4\n");
    /// assert_eq!(input.line::<(u32, u32)>()?, (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>()?, (3, 4));
    /// assert!(input.try_line::<(u32, u32)>()?.is_none());
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn from_static(data: &'static [u8]) -> Self {
        Self::new(data, Size::ZERO)
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the remaining input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the remaining input.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get the remaining input as a binary string.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Rewind the processor to where it was constructed.
    #[inline]
    pub fn reset(&mut self) {
        let (data, index) = self.origin;
        self.data = data;
        self.index = index;
    }

    /// Construct an iterator over values of type `T`.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as `T`, errors if there is nothing left to parse.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try to parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with [ErrorKind::ExpectedLine] if
    /// the input is exhausted.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Try to parse the next line as `T`, returns `Ok(None)` if the input is
    /// exhausted.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Shorthand for using [Ws] to skip whitespace, returning the number of
    /// newlines skipped.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut word) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut word)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split off everything up until the next `b`, or the rest of the input if
    /// there is no such byte. The delimiter itself is consumed.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let head = Self::new(mem::take(&mut self.data), self.index);
            self.index.advance(head.len());
            return Some(head);
        };

        let head = Self::new(self.data.get(..at)?, self.index);
        self.advance(at.checked_add(1)?);
        Some(head)
    }

    /// Find the first index from `n` which matches the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;
        Some(Self::new(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error raised by [FromInput::from_input] when the input is exhausted.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input is exhausted.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from the given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over chunks of input.
pub trait InputIterator {
    /// Current index of the input iterator.
    fn index(&self) -> Size;

    /// Get the next chunk.
    fn next(&mut self) -> Option<IStr>;
}

/// Parse something out of a sequence of chunks.
pub trait FromInputIter: Sized {
    /// Parse from the given chunks, returns `Ok(None)` if there are not
    /// enough of them.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

/// Chunks split on a single byte, see [Split].
struct SplitIter<'a> {
    input: &'a mut IStr,
    byte: u8,
}

impl InputIterator for SplitIter<'_> {
    #[inline]
    fn index(&self) -> Size {
        self.input.index
    }

    #[inline]
    fn next(&mut self) -> Option<IStr> {
        self.input.split_once(self.byte)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator,
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                let Some($first_id) = $first_id.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };

                    let Some($rest_id) = $rest_id.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    };
}

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    let start = index.saturating_add(n);
                    return Err(IStrError::new(start..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);
tuple!(5 => A a, B b, C c, D d, E e);
tuple!(6 => A a, B b, C c, D d, E e, F f);

integer!(usize);
integer!(isize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(u128);
integer!(i8);
integer!(i16);
integer!(i32);
integer!(i64);
integer!(i128);

impl FromInput for char {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedChar
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        use bstr::ByteSlice;

        let Some(c) = p.data.chars().next() else {
            return Ok(None);
        };

        p.advance(c.len_utf8());
        Ok(Some(c))
    }
}

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let rest = Self::new(p.data, p.index);
        p.advance(p.data.len());
        Ok(Some(rest))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl FromInput for &'static BStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

/// An optional trailing value. Parses to `None` instead of stopping when the
/// input is exhausted.
impl<T> FromInput for Option<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(T::try_from_input(p)?))
    }
}

/// Parse until end of line.
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut line) = p.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(Self(line.next()?)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());
        let lines = memchr::memchr_iter(NL, &p.data[..n]).count();
        p.advance(n);
        Ok(Some(Self(lines)))
    }
}

impl<T, const N: usize> FromInput for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let start = p.index;
        let mut array = ArrayVec::<T, N>::new();

        while array.remaining_capacity() > 0 {
            let Some(element) = T::try_from_input(p)? else {
                break;
            };

            array.push(element);
        }

        if array.is_empty() {
            return Ok(None);
        }

        match array.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

impl<T, const N: usize> FromInput for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Split on the delimiter `D` and parse each chunk.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let mut input = IStr::from_static(b"2-4,6-8");
/// let Split((Split([a, b]), Split([c, d]))) = input.next::<Split<',', (Split<'-', [u32; 2]>, Split<'-', [u32; 2]>)>>()?;
/// assert_eq!([a, b, c, d], [2, 4, 6, 8]);
///
/// let mut input = IStr::from_static(b"79, 98");
/// let Split(items) = input.next::<Split<',', Vec<u64>>>()?;
/// assert_eq!(items, [79, 98]);
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let it = SplitIter {
            input: p,
            byte: D as u8,
        };

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<const N: usize, T> FromInputIter for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let index = it.index();
        let mut array = ArrayVec::<T, N>::new();

        while array.remaining_capacity() > 0 {
            let Some(mut chunk) = it.next() else {
                break;
            };

            let Some(value) = chunk.try_next()? else {
                break;
            };

            array.push(value);
        }

        if array.is_empty() {
            return Ok(None);
        }

        match array.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                index..it.index(),
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

impl<T> FromInputIter for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let mut output = Vec::new();

        while let Some(mut chunk) = it.next() {
            output.push(chunk.next()?);
        }

        Ok(Some(output))
    }
}

/// Parser which consumes nothing.
#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which extends until the next whitespace.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}

/// Filter out empty values.
pub struct NonEmpty<T>(pub T);

impl<T> FromInput for NonEmpty<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.is_empty() {
            return Ok(None);
        }

        Ok(T::try_from_input(p)?.map(Self))
    }
}

/// Read a single byte.
pub struct B(pub u8);

impl FromInput for B {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(&b) = p.data.first() else {
            return Ok(None);
        };

        p.advance(1);
        Ok(Some(Self(b)))
    }
}
