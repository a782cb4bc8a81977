use lib::prelude::*;

lib::entry!(input = "d06.txt", expect = (7, 19), solve);

fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let W(data) = input.next::<W<&'static [u8]>>()?;
    Ok((marker(data, 4)?, marker(data, 14)?))
}

/// Number of characters processed once the last `len` characters are all
/// distinct.
fn marker(data: &[u8], len: usize) -> Result<usize> {
    for (n, window) in data.windows(len).enumerate() {
        let mut seen = 0u32;

        for &b in window {
            ensure!(b.is_ascii_lowercase(), "bad character {:?}", b as char);
            seen |= 1 << (b - b'a');
        }

        if seen.count_ones() as usize == len {
            return Ok(n + len);
        }
    }

    bail!("no marker of length {len}")
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{marker, solve};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d06.txt"));
        assert_eq!(solve(input)?, (7, 19));
        Ok(())
    }

    #[test]
    fn test_markers() -> Result<()> {
        let cases: [(&[u8], usize, usize); 4] = [
            (b"bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            (b"nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            (b"nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
            (b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];

        for (data, packet, message) in cases {
            assert_eq!(marker(data, 4)?, packet);
            assert_eq!(marker(data, 14)?, message);
        }

        Ok(())
    }

    #[test]
    fn test_no_marker() {
        assert!(marker(b"aaaaaaaa", 4).is_err());
        assert!(marker(b"abc", 4).is_err());
        assert!(marker(b"ab1d", 4).is_err());
    }
}
