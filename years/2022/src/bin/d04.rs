use lib::prelude::*;

lib::entry!(input = "d04.txt", expect = (2, 4), solve);

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(Split((a, b))) = input.try_line::<Split<',', (Span, Span)>>()? {
        part1 += u32::from(a.contains(&b) || b.contains(&a));
        part2 += u32::from(a.overlaps(&b));
    }

    Ok((part1, part2))
}

/// An inclusive range of section ids.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: u32,
    end: u32,
}

impl Span {
    #[inline]
    fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    #[inline]
    fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

lib::from_input! {
    |Split((start, end)): Split<'-', (u32, u32)>| -> Span {
        ensure!(start <= end, "bad span {start}-{end}");
        Ok(Span { start, end })
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::solve;

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d04.txt"));
        assert_eq!(solve(input)?, (2, 4));
        Ok(())
    }

    #[test]
    fn test_edges() -> Result<()> {
        assert_eq!(solve(IStr::from_static(b"1-1,1-1\n1-2,3-4\n1-3,3-4\n"))?, (1, 2));
        Ok(())
    }

    #[test]
    fn test_reversed_span() {
        assert!(solve(IStr::from_static(b"4-2,1-1\n")).is_err());
    }
}
