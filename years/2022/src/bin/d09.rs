use lib::prelude::*;

/// Width and height of the area tracked for visited positions.
const CAP: usize = 1024;
const MID: i32 = (CAP as i32) / 2;

type Visited = [u128; CAP * CAP / 128];

lib::entry!(input = "d09.txt", expect = (13, 1), solve);

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    // The tail of a two-knot rope moves exactly like the second knot of a
    // longer one, so both parts are tracked on the same rope.
    let mut knots = [Pos::default(); 10];
    let mut short = [0u128; CAP * CAP / 128];
    let mut long = [0u128; CAP * CAP / 128];

    visit(&mut short, knots[1])?;
    visit(&mut long, knots[9])?;

    for motion in input.iter::<(Dir, u32)>() {
        let (Dir(dx, dy), steps) = motion?;

        for _ in 0..steps {
            knots[0].x += dx;
            knots[0].y += dy;

            for n in 1..knots.len() {
                let head = knots[n - 1];
                knots[n].follow(head);
            }

            visit(&mut short, knots[1])?;
            visit(&mut long, knots[9])?;
        }
    }

    Ok((short.count_ones(), long.count_ones()))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Pos {
    x: i32,
    y: i32,
}

impl Pos {
    /// Move one step towards `head` unless already touching it.
    #[inline]
    fn follow(&mut self, head: Pos) {
        let dx = head.x - self.x;
        let dy = head.y - self.y;

        if dx.abs() < 2 && dy.abs() < 2 {
            return;
        }

        self.x += dx.signum();
        self.y += dy.signum();
    }
}

/// Direction of a single step.
#[derive(Debug, Clone, Copy)]
struct Dir(i32, i32);

lib::from_input! {
    |W(B(b)): W<B>| -> Dir {
        Ok(match b {
            b'R' => Dir(1, 0),
            b'U' => Dir(0, -1),
            b'L' => Dir(-1, 0),
            b'D' => Dir(0, 1),
            b => bail!("bad direction {:?}", b as char),
        })
    }
}

/// Mark a position as visited.
fn visit(visited: &mut Visited, pos: Pos) -> Result<()> {
    ensure!(
        pos.x.abs() < MID && pos.y.abs() < MID,
        "{pos:?} is outside of the tracked area"
    );

    let x = (pos.x + MID) as u32;
    let y = (pos.y + MID) as u32;
    visited.set_bit(y * CAP as u32 + x);
    Ok(())
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{solve, Pos};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d09.txt"));
        assert_eq!(solve(input)?, (13, 1));
        Ok(())
    }

    #[test]
    fn test_larger_example() -> Result<()> {
        let input = IStr::from_static(b"R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n");
        assert_eq!(solve(input)?, (88, 36));
        Ok(())
    }

    #[test]
    fn test_follow() {
        let mut tail = Pos { x: 0, y: 0 };
        tail.follow(Pos { x: 1, y: 1 });
        assert_eq!(tail, Pos { x: 0, y: 0 });

        tail.follow(Pos { x: 2, y: 1 });
        assert_eq!(tail, Pos { x: 1, y: 1 });

        tail.follow(Pos { x: 1, y: 3 });
        assert_eq!(tail, Pos { x: 1, y: 2 });
    }

    #[test]
    fn test_out_of_range() {
        assert!(solve(IStr::from_static(b"R 600\n")).is_err());
        assert!(solve(IStr::from_static(b"X 1\n")).is_err());
    }
}
