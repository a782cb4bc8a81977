use arrayvec::ArrayString;

/// Compare an answer with its expected value, which might be written as a
/// different type.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<const N: usize> OutputEq<&str> for ArrayString<N> {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl OutputEq<&str> for String {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self == other
    }
}

macro_rules! partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

partial_eq!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, bool, ());

#[cfg(test)]
mod tests {
    use arrayvec::ArrayString;

    use super::OutputEq;

    #[test]
    fn test_output_eq() {
        assert!((21u32, 8usize).output_eq(&(21, 8)));
        assert!(!(21u32, 8usize).output_eq(&(21, 9)));

        let mut s = ArrayString::<16>::new();
        s.push_str("CMZ");
        assert!((s, String::from("MCD")).output_eq(&("CMZ", "MCD")));
        assert!(Some(7usize).output_eq(&Some(7)));
        assert!(!Some(7usize).output_eq(&None));
    }
}
