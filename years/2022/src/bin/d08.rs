use lib::prelude::*;

lib::entry!(input = "d08.txt", expect = (21, 8), solve);

fn solve(input: IStr) -> Result<(usize, usize)> {
    let forest = Grid::from_bytes(input.as_data(), height)?;

    // Coordinates of the interior cells still refer to the full forest.
    let interior = forest.cells().interior()?;
    let mut visible = forest.len() - interior.len();
    let mut best = 0;

    for tree in &interior {
        if forest.is_visible(tree.x, tree.y)? {
            visible += 1;
        }

        best = best.max(forest.scenic_score(tree.x, tree.y)?);
    }

    Ok((visible, best))
}

#[inline]
fn height(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::solve;

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d08.txt"));
        assert_eq!(solve(input)?, (21, 8));
        Ok(())
    }

    #[test]
    fn test_smallest_forest() -> Result<()> {
        assert_eq!(solve(IStr::from_static(b"111\n191\n111\n"))?, (9, 1));
        assert_eq!(solve(IStr::from_static(b"999\n919\n999\n"))?, (8, 1));
        Ok(())
    }

    #[test]
    fn test_malformed() {
        let error = solve(IStr::from_static(b"123\n12\n123\n")).unwrap_err();
        let error = error.downcast_ref::<GridError>();
        assert!(error.is_some_and(GridError::is_malformed));

        let error = solve(IStr::from_static(b"12\n34\n")).unwrap_err();
        assert!(matches!(error.downcast_ref::<GridError>(), Some(GridError::TooSmall { .. })));

        assert!(solve(IStr::from_static(b"1a3\n456\n789\n")).is_err());
    }
}
