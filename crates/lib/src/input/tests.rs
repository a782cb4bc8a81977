use anyhow::Result;

use bstr::BStr;

use super::{ErrorKind, IStr, NonEmpty, Nl, Skip, Split, Ws, B, W};

#[test]
fn test_lines_and_words() -> Result<()> {
    let mut input = IStr::from_static(b"noop\naddx -5\n\naddx 3");

    assert!(matches!(
        input.line::<(W<&str>, Option<i32>)>()?,
        (W("noop"), None)
    ));

    assert!(matches!(
        input.line::<(W<&str>, Option<i32>)>()?,
        (W("addx"), Some(-5))
    ));

    assert_eq!(input.line::<&[u8]>()?, b"");

    assert!(matches!(
        input.line::<(W<&str>, Option<i32>)>()?,
        (W("addx"), Some(3))
    ));

    assert!(input.try_line::<&[u8]>()?.is_none());
    Ok(())
}

#[test]
fn test_whitespace_counts_newlines() -> Result<()> {
    let mut input = IStr::from_static(b"1000\n2000\n\n3000\n");

    let (a, Ws(n)) = input.next::<(u32, Ws)>()?;
    assert_eq!((a, n), (1000, 1));

    let (b, Ws(n)) = input.next::<(u32, Ws)>()?;
    assert_eq!((b, n), (2000, 2));

    let (c, Ws(n)) = input.next::<(u32, Ws)>()?;
    assert_eq!((c, n), (3000, 1));

    assert!(input.try_next::<(u32, Ws)>()?.is_none());
    Ok(())
}

#[test]
fn test_bad_integer() {
    let mut input = IStr::from_static(b"move x from 1 to 2");
    let error = input.next::<(W, usize)>().err();

    assert!(matches!(
        error.as_ref().map(|e| e.kind()),
        Some(ErrorKind::NotInteger("x"))
    ));
}

#[test]
fn test_split_and_nl() -> Result<()> {
    let mut input = IStr::from_static(b"2-4,6-8\nrest of line\nR 4");

    let Split((Split([a, b]), Split([c, d]))) =
        input.line::<Split<',', (Split<'-', [u8; 2]>, Split<'-', [u8; 2]>)>>()?;
    assert_eq!([a, b, c, d], [2, 4, 6, 8]);

    let Nl(line) = input.next::<Nl<&str>>()?;
    assert_eq!(line, "rest of line");

    let (B(direction), steps) = input.next::<(B, u32)>()?;
    assert_eq!((direction, steps), (b'R', 4));
    Ok(())
}

#[test]
fn test_short_array_is_an_error() {
    let mut input = IStr::from_static(b"1-2-3");
    assert!(input.next::<Split<'-', [u32; 4]>>().is_err());
}

#[test]
fn test_reset() -> Result<()> {
    let mut input = IStr::from_static(b"a b c");
    let _ = input.next::<(W, W<Skip>)>()?;
    assert_eq!(input.as_data(), b" c");

    input.reset();
    assert_eq!(input.as_data(), b"a b c");
    Ok(())
}

#[test]
fn test_non_empty_stops_at_blank_line() -> Result<()> {
    let mut input = IStr::from_static(b"[A]\n[B]\n\nmove");
    let mut lines = Vec::new();

    while let Some(NonEmpty(line)) = input.try_line::<NonEmpty<&[u8]>>()? {
        lines.push(line);
    }

    assert_eq!(lines, [b"[A]", b"[B]"]);
    assert_eq!(input.as_data(), b"move");
    Ok(())
}

#[test]
fn test_scalars() -> Result<()> {
    let mut input = IStr::from_static("é -25 \n\n rest".as_bytes());

    assert_eq!(input.next::<char>()?, 'é');
    assert_eq!(input.next::<i64>()?, -25);
    assert_eq!(input.ws()?, 2);
    assert_eq!(input.next::<&BStr>()?, "rest");
    assert!(input.try_next::<char>()?.is_none());
    assert!(matches!(input.next::<char>().err().as_ref().map(|e| e.kind()), Some(ErrorKind::ExpectedChar)));
    Ok(())
}

#[test]
fn test_integer_errors() {
    let mut input = IStr::from_static(b"2.5 300");

    let error = input.next::<i64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("2.5")));

    let error = input.next::<u8>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("300")));
}
