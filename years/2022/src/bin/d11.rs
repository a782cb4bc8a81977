use lib::prelude::*;

lib::entry!(input = "d11.txt", expect = (10605, 2713310158), solve);

fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut monkeys = Vec::new();

    while input.try_next::<(W, W, Ws)>()?.is_some() {
        monkeys.push(input.next::<Monkey>()?);
    }

    for (n, monkey) in monkeys.iter().enumerate() {
        for target in monkey.targets {
            ensure!(target < monkeys.len(), "monkey {n} throws to missing monkey {target}");
            ensure!(target != n, "monkey {n} throws to itself");
        }
    }

    // Divisibility by every divisor is preserved modulo their lcm.
    let modulus = lcm_all(monkeys.iter().map(|m| m.divisor));

    let part1 = monkey_business(&mut monkeys.clone(), 20, Relief::Divide(3))?;
    let part2 = monkey_business(&mut monkeys, 10000, Relief::Modulo(modulus))?;
    Ok((part1, part2))
}

/// How worry levels are kept in check after each inspection.
#[derive(Debug, Clone, Copy)]
enum Relief {
    Divide(u64),
    Modulo(u64),
}

/// Play the given number of rounds and multiply the inspection counts of the
/// two most active monkeys.
fn monkey_business(monkeys: &mut [Monkey], rounds: usize, relief: Relief) -> Result<u64> {
    let mut inspected = vec![0u64; monkeys.len()];

    for round in 1..=rounds {
        for n in 0..monkeys.len() {
            while let Some(item) = monkeys[n].items.dequeue() {
                inspected[n] += 1;

                let monkey = &monkeys[n];
                let level = monkey.operation.apply(item)?;

                let level = match relief {
                    Relief::Divide(d) => level / d,
                    Relief::Modulo(m) => level % m,
                };

                let target = monkey.targets[usize::from(level % monkey.divisor == 0)];
                let items = &mut monkeys[target].items;
                ensure!(!items.is_full(), "monkey {target} is holding too many items");
                items.push(level);
            }
        }

        if round % 1000 == 0 {
            log::debug!("round {round}: {inspected:?}");
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspected.iter().take(2).product())
}

#[derive(Clone)]
struct Monkey {
    items: ArrayRingBuffer<u64>,
    operation: Operation,
    divisor: u64,
    /// Where to throw when the test fails and when it succeeds.
    targets: [usize; 2],
}

lib::from_input! {
    |((Nl((_, _, Split(start))), operation, (_, _, _, divisor), if_true, if_false)): (
        Nl<(W, W, Split<',', Vec<u64>>)>,
        Operation,
        (W, W, W, u64),
        Target,
        Target,
    )| -> Monkey {
        ensure!(divisor != 0, "cannot test divisibility by zero");

        let mut items = ArrayRingBuffer::new();

        for item in start {
            ensure!(!items.is_full(), "too many starting items");
            items.push(item);
        }

        Ok(Monkey {
            items,
            operation,
            divisor,
            targets: [if_false.0, if_true.0],
        })
    }
}

/// The trailing monkey index of an `If ...: throw to monkey N` line.
struct Target(usize);

lib::from_input! {
    |((_, _, _, _, (_, target))): (W, W, W, W, (W, usize))| -> Target {
        Ok(Target(target))
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    /// Compute the new worry level, failing on overflow.
    #[inline]
    fn apply(self, old: u64) -> Result<u64> {
        let value = match self {
            Operation::Add(operand) => old.checked_add(operand.resolve(old)),
            Operation::Mul(operand) => old.checked_mul(operand.resolve(old)),
        };

        value.with_context(|| format!("{self:?} overflows with {old}"))
    }
}

lib::from_input! {
    |((_, _, _, W(lhs), W(op), operand)): (W, W, W, W<&'static str>, W<&'static str>, Operand)| -> Operation {
        ensure!(lhs == "old", "bad left-hand side {lhs}");

        Ok(match op {
            "+" => Operation::Add(operand),
            "*" => Operation::Mul(operand),
            op => bail!("bad operator {op}"),
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Operand {
    Old,
    Value(u64),
}

impl Operand {
    #[inline]
    fn resolve(self, old: u64) -> u64 {
        match self {
            Operand::Old => old,
            Operand::Value(value) => value,
        }
    }
}

lib::from_input! {
    |W(value): W<&'static str>| -> Operand {
        Ok(match value {
            "old" => Operand::Old,
            value => Operand::Value(value.parse()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{monkey_business, solve, Monkey, Relief};

    const INPUT: &[u8] = include_bytes!("../../inputs/d11.txt");

    fn monkeys() -> Result<Vec<Monkey>> {
        let mut input = IStr::from_static(INPUT);
        let mut monkeys = Vec::new();

        while input.try_next::<(W, W, Ws)>()?.is_some() {
            monkeys.push(input.next::<Monkey>()?);
        }

        Ok(monkeys)
    }

    #[test]
    fn test_example() -> Result<()> {
        assert_eq!(solve(IStr::from_static(INPUT))?, (10605, 2713310158));
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<()> {
        let monkeys = monkeys()?;
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[1].items.iter().copied().collect::<Vec<_>>(), [54, 65, 75, 74]);
        assert_eq!(monkeys[2].operation.apply(7)?, 49);
        assert_eq!(monkeys[0].divisor, 23);
        assert_eq!(monkeys[0].targets, [3, 2]);
        Ok(())
    }

    #[test]
    fn test_first_round() -> Result<()> {
        let mut monkeys = monkeys()?;
        monkey_business(&mut monkeys, 1, Relief::Divide(3))?;

        let items = monkeys
            .iter()
            .map(|m| m.items.iter().copied().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(
            items,
            [
                vec![20, 23, 27, 26],
                vec![2080, 25, 167, 207, 401, 1046],
                vec![],
                vec![],
            ]
        );

        Ok(())
    }

    #[test]
    fn test_overflow() {
        let input = IStr::from_static(
            b"Monkey 0:\n  Starting items: 18446744073709551615\n  Operation: new = old + 1\n  Test: divisible by 2\n    If true: throw to monkey 1\n    If false: throw to monkey 1\n\nMonkey 1:\n  Starting items: 1\n  Operation: new = old + 1\n  Test: divisible by 2\n    If true: throw to monkey 0\n    If false: throw to monkey 0\n",
        );

        assert!(solve(input).is_err());
    }

    #[test]
    fn test_bad_target() {
        let input = IStr::from_static(
            b"Monkey 0:\n  Starting items: 1\n  Operation: new = old + 1\n  Test: divisible by 2\n    If true: throw to monkey 0\n    If false: throw to monkey 3\n",
        );

        assert!(solve(input).is_err());
    }
}
