/// Helper macro to build an input processor for a custom type on top of an
/// existing one.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Pair(u32, u32);
///
/// lib::from_input! {
///     |Split((a, b)): Split<'-', (u32, u32)>| -> Pair {
///         ensure!(a <= b, "bad pair {a}-{b}");
///         Ok(Pair(a, b))
///     }
/// }
///
/// let mut input = IStr::from_static(b"2-4");
/// let Pair(a, b) = input.next::<Pair>()?;
/// assert_eq!((a, b), (2, 4));
///
/// let mut input = IStr::from_static(b"4-2");
/// assert!(input.next::<Pair>().is_err());
/// # Ok::<_, Error>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::custom(span, e))
                    }
                }
            }
        }
    };
}

/// Declare the `main` function of a puzzle binary.
///
/// The bundled input is loaded, handed to the solver and the answer is
/// checked against `expect` before it is printed. With `--bench` the solver
/// is benchmarked instead.
///
/// ```no_run
/// use lib::prelude::*;
///
/// lib::entry!(input = "d01.txt", expect = (1, 2), solve);
///
/// fn solve(input: IStr) -> Result<(u32, u32)> {
///     Ok((1, 2))
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, expect = $expect:expr, $solve:path $(,)?) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!($path);
            $crate::cli::run(&opts, path, input, $expect, $solve)
        }
    };
}
