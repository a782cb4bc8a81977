use core::fmt;

use lib::cli::OutputEq;
use lib::prelude::*;

const WIDTH: usize = 40;
const HEIGHT: usize = 6;

/// What the example program renders.
const EXAMPLE: &str = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

lib::entry!(input = "d10.txt", expect = (13140, EXAMPLE), solve);

fn solve(mut input: IStr) -> Result<(i32, Screen)> {
    let mut program = Vec::new();

    while let Some(instr) = input.try_line::<Instr>()? {
        program.push(instr);
    }

    log::debug!("loaded {} instructions", program.len());

    let mut cpu = Cpu::new(1);
    let mut strength = 0;
    let mut screen = Screen::default();

    cpu.run(&program, |cycle, &x| {
        if cycle <= 220 && (cycle + 20) % 40 == 0 {
            log::trace!("cycle {cycle}: x = {x}");
            strength += cycle as i32 * x;
        }

        screen.draw(cycle, x);
    });

    Ok((strength, screen))
}

#[derive(Debug, Clone, Copy)]
enum Instr {
    Noop,
    Addx(i32),
}

impl Op<i32> for Instr {
    #[inline]
    fn cycles(&self) -> u32 {
        match self {
            Instr::Noop => 1,
            Instr::Addx(..) => 2,
        }
    }

    #[inline]
    fn apply(&self, x: &mut i32) {
        if let Instr::Addx(n) = *self {
            *x += n;
        }
    }
}

lib::from_input! {
    |((W(name), arg)): (W<&'static str>, Option<i32>)| -> Instr {
        Ok(match (name, arg) {
            ("noop", None) => Instr::Noop,
            ("addx", Some(n)) => Instr::Addx(n),
            (name, arg) => bail!("bad instruction {name} {arg:?}"),
        })
    }
}

/// A 40x6 monochrome display.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Screen {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }
}

impl Screen {
    /// Draw the pixel for the given cycle, which is lit if the sprite
    /// centered on `x` covers it.
    fn draw(&mut self, cycle: u32, x: i32) {
        let Some(n) = (cycle as usize).checked_sub(1) else {
            return;
        };

        let (row, col) = (n / WIDTH, n % WIDTH);

        let Some(pixels) = self.pixels.get_mut(row) else {
            return;
        };

        if (col as i32 - x).abs() <= 1 {
            pixels[col] = true;
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, row) in self.pixels.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }

            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }

        Ok(())
    }
}

impl OutputEq<&str> for Screen {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[cfg(test)]
mod tests {
    use lib::cli::OutputEq;
    use lib::prelude::*;

    use super::{solve, Instr, EXAMPLE};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d10.txt"));
        let (strength, screen) = solve(input)?;
        assert_eq!(strength, 13140);
        assert_eq!(screen.to_string(), EXAMPLE);
        assert!(screen.output_eq(&EXAMPLE));
        Ok(())
    }

    #[test]
    fn test_small_program() -> Result<()> {
        let mut input = IStr::from_static(b"noop\naddx 3\naddx -5\n");
        let mut program = Vec::new();

        while let Some(instr) = input.try_line::<Instr>()? {
            program.push(instr);
        }

        let mut cpu = Cpu::new(1);
        let mut during = Vec::new();
        cpu.run(&program, |_, &x| during.push(x));

        assert_eq!(during, [1, 1, 1, 4, 4]);
        assert_eq!(cpu.cycle(), 5);
        assert_eq!(cpu.into_state(), -1);

        let (strength, screen) = solve(IStr::from_static(b"noop\naddx 3\naddx -5\n"))?;
        assert_eq!(strength, 0);
        let first = format!("{}{}", "#".repeat(5), ".".repeat(35));
        assert_eq!(screen.to_string().lines().next(), Some(first.as_str()));
        assert_eq!(screen.to_string().lines().count(), 6);
        Ok(())
    }

    #[test]
    fn test_bad_instructions() {
        assert!(solve(IStr::from_static(b"addx\n")).is_err());
        assert!(solve(IStr::from_static(b"noop 1\n")).is_err());
        assert!(solve(IStr::from_static(b"jmp 3\n")).is_err());
        assert!(solve(IStr::from_static(b"addx x\n")).is_err());
    }
}
