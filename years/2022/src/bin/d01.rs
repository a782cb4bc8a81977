use lib::prelude::*;

lib::entry!(input = "d01.txt", expect = (24000, 45000), solve);

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    // Three largest groups in ascending order, with a scratch slot in front.
    let mut top = [0u32; 4];
    let mut group = 0u32;

    for value in input.iter::<(u32, Ws)>() {
        let (calories, Ws(lines)) = value?;
        group = group.checked_add(calories).context("calorie overflow")?;

        if lines > 1 {
            top[0] = std::mem::take(&mut group);
            top.sort_unstable();
        }
    }

    if group != 0 {
        top[0] = group;
        top.sort_unstable();
    }

    let [_, a, b, c] = top;
    Ok((c, a + b + c))
}
