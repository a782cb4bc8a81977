use lib::prelude::*;

type Stack = ArrayVec<u8, 64>;
type Stacks = ArrayVec<Stack, 10>;

lib::entry!(input = "d05.txt", expect = ("CMZ", "MCD"), solve);

fn solve(mut input: IStr) -> Result<(ArrayString, ArrayString)> {
    let mut one = parse_stacks(&mut input)?;
    let mut many = one.clone();

    for line in input.iter::<(W, usize, W, usize, W, usize)>() {
        let (_, count, _, a, _, b) = line?;
        let context = || format!("move {count} from {a} to {b}");

        let from = a.checked_sub(1).context("stacks are numbered from 1")?;
        let to = b.checked_sub(1).context("stacks are numbered from 1")?;

        crane(&mut one, count, from, to, true).with_context(context)?;
        crane(&mut many, count, from, to, false).with_context(context)?;
    }

    Ok((tops(&one)?, tops(&many)?))
}

/// Parse the stack drawing, which is terminated by an empty line. Crates are
/// stored bottom first.
fn parse_stacks(input: &mut IStr) -> Result<Stacks> {
    let mut stacks = Stacks::new();

    while let Some(NonEmpty(line)) = input.try_line::<NonEmpty<&[u8]>>()? {
        for (n, chunk) in line.chunks(4).enumerate() {
            let Some(&label) = chunk.get(1).filter(|b| b.is_ascii_uppercase()) else {
                continue;
            };

            while stacks.len() <= n {
                stacks.try_push(Stack::new()).map_err(|_| anyhow!("too many stacks"))?;
            }

            stacks[n].try_push(label).map_err(|_| anyhow!("stack {} is full", n + 1))?;
        }
    }

    for stack in &mut stacks {
        stack.reverse();
    }

    log::debug!("parsed {} stacks", stacks.len());
    Ok(stacks)
}

/// Move `count` crates. With `one_at_a_time` their order is reversed.
fn crane(stacks: &mut Stacks, count: usize, from: usize, to: usize, one_at_a_time: bool) -> Result<()> {
    let (from, to) = stacks.get_mut2(from, to).context("bad stacks")?;
    let start = from.len().checked_sub(count).context("not enough crates")?;

    let moved = from.drain(start..);

    let result = if one_at_a_time {
        to.try_extend_from_slice(&moved.rev().collect::<Stack>())
    } else {
        to.try_extend_from_slice(&moved.collect::<Stack>())
    };

    result.map_err(|_| anyhow!("destination is full"))
}

/// The label of the top crate of every non-empty stack.
fn tops(stacks: &Stacks) -> Result<ArrayString> {
    let mut output = ArrayString::new();

    for &label in stacks.iter().flat_map(|s| s.last()) {
        output.try_push(char::from(label))?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{parse_stacks, solve};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d05.txt"));
        let (part1, part2) = solve(input)?;
        assert_eq!(part1.as_str(), "CMZ");
        assert_eq!(part2.as_str(), "MCD");
        Ok(())
    }

    #[test]
    fn test_parse_stacks() -> Result<()> {
        let mut input = IStr::from_static(include_bytes!("../../inputs/d05.txt"));
        let stacks = parse_stacks(&mut input)?;

        assert_eq!(stacks.len(), 3);
        assert_eq!(stacks[0].as_slice(), b"ZN");
        assert_eq!(stacks[1].as_slice(), b"MCD");
        assert_eq!(stacks[2].as_slice(), b"P");
        Ok(())
    }

    #[test]
    fn test_bad_moves() {
        let input = IStr::from_static(b"[A] [B]\n 1   2 \n\nmove 2 from 1 to 2\n");
        assert!(solve(input).is_err());

        let input = IStr::from_static(b"[A] [B]\n 1   2 \n\nmove 1 from 0 to 2\n");
        assert!(solve(input).is_err());

        let input = IStr::from_static(b"[A] [B]\n 1   2 \n\nmove 1 from 1 to 3\n");
        assert!(solve(input).is_err());
    }
}
