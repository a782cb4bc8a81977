use lib::prelude::*;

lib::entry!(input = "d03.txt", expect = (157, 70), solve);

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;

    for line in input.iter::<W<&'static [u8]>>() {
        let W(items) = line?;
        ensure!(items.len() % 2 == 0, "odd rucksack {:?}", items.as_bstr());

        let (a, b) = items.split_at(items.len() / 2);
        part1 += priority(set(a)? & set(b)?)?;
    }

    input.reset();

    let mut part2 = 0;

    for group in input.iter::<[W<&'static [u8]>; 3]>() {
        let [W(a), W(b), W(c)] = group?;
        part2 += priority(set(a)? & set(b)? & set(c)?)?;
    }

    Ok((part1, part2))
}

/// Collect items into a set indexed by priority.
fn set(items: &[u8]) -> Result<u64> {
    let mut set = 0u64;

    for &b in items {
        let n = match b {
            b'a'..=b'z' => b - b'a' + 1,
            b'A'..=b'Z' => b - b'A' + 27,
            b => bail!("bad item {:?}", b as char),
        };

        set |= 1 << n;
    }

    Ok(set)
}

/// Priority of the single item in a set.
fn priority(set: u64) -> Result<u32> {
    ensure!(set.count_ones() == 1, "expected one shared item, found {}", set.count_ones());
    Ok(set.trailing_zeros())
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{priority, set, solve};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d03.txt"));
        assert_eq!(solve(input)?, (157, 70));
        Ok(())
    }

    #[test]
    fn test_priority() -> Result<()> {
        assert_eq!(priority(set(b"p")?)?, 16);
        assert_eq!(priority(set(b"L")?)?, 38);
        assert_eq!(priority(set(b"zz")?)?, 26);
        assert!(priority(set(b"ab")?).is_err());
        assert!(set(b"a1").is_err());
        Ok(())
    }

    #[test]
    fn test_incomplete_group() {
        assert!(solve(IStr::from_static(b"aa\naa\n")).is_err());
    }
}
