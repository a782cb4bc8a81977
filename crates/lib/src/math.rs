//! Greatest common divisor and least common multiple helpers.

use num::Integer;

/// Greatest common divisor of `a` and `b`.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// assert_eq!(gcd(12u64, 18), 6);
/// assert_eq!(gcd(0u64, 7), 7);
/// ```
#[inline]
pub fn gcd<T>(a: T, b: T) -> T
where
    T: Integer,
{
    a.gcd(&b)
}

/// Least common multiple of `a` and `b`.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// assert_eq!(lcm(4u64, 6), 12);
/// assert_eq!(lcm(13u64, 17), 221);
/// ```
#[inline]
pub fn lcm<T>(a: T, b: T) -> T
where
    T: Integer,
{
    a.lcm(&b)
}

/// Least common multiple of every value, `1` if there are none.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// assert_eq!(lcm_all([23u64, 19, 13, 17]), 96577);
/// assert_eq!(lcm_all([2u64, 4, 8]), 8);
/// assert_eq!(lcm_all(Vec::<u64>::new()), 1);
/// ```
pub fn lcm_all<T>(values: impl IntoIterator<Item = T>) -> T
where
    T: Integer,
{
    values.into_iter().fold(T::one(), lcm)
}
