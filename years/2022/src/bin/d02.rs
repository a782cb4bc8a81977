use lib::prelude::*;

lib::entry!(input = "d02.txt", expect = (15, 12), solve);

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    for round in input.iter::<(Shape, Column)>() {
        let (them, column) = round?;

        let us = column.shape();
        part1 += us.score() + us.against(them).score();

        let outcome = column.outcome();
        part2 += outcome.shape_against(them).score() + outcome.score();
    }

    Ok((part1, part2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    #[inline]
    fn score(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape which this shape defeats.
    #[inline]
    fn defeats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    #[inline]
    fn against(self, them: Shape) -> Outcome {
        if self == them {
            Outcome::Draw
        } else if self.defeats() == them {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

lib::from_input! {
    |W(B(b)): W<B>| -> Shape {
        match b {
            b'A'..=b'C' => Ok(Shape::ALL[usize::from(b - b'A')]),
            b => bail!("bad shape {:?}", b as char),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    const ALL: [Outcome; 3] = [Outcome::Lose, Outcome::Draw, Outcome::Win];

    #[inline]
    fn score(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape to play to get this outcome against `them`.
    #[inline]
    fn shape_against(self, them: Shape) -> Shape {
        match self {
            Outcome::Lose => them.defeats(),
            Outcome::Draw => them,
            Outcome::Win => them.defeats().defeats(),
        }
    }
}

/// The second column of the strategy guide, which is either read as a shape
/// or as the desired outcome.
#[derive(Debug, Clone, Copy)]
struct Column(usize);

impl Column {
    #[inline]
    fn shape(self) -> Shape {
        Shape::ALL[self.0]
    }

    #[inline]
    fn outcome(self) -> Outcome {
        Outcome::ALL[self.0]
    }
}

lib::from_input! {
    |W(B(b)): W<B>| -> Column {
        match b {
            b'X'..=b'Z' => Ok(Column(usize::from(b - b'X'))),
            b => bail!("bad column {:?}", b as char),
        }
    }
}
