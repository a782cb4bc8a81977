use lib::prelude::*;

const DISK: u64 = 70_000_000;
const REQUIRED: u64 = 30_000_000;
const SMALL: u64 = 100_000;

/// Index of the root directory.
const ROOT: usize = 0;

lib::entry!(input = "d07.txt", expect = (95437, 24933642), solve);

fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let tree = Tree::parse(&mut input)?;

    let part1 = tree
        .dirs
        .iter()
        .map(|d| d.size)
        .filter(|&size| size <= SMALL)
        .sum();

    let used = tree.dirs[ROOT].size;
    let free = DISK.checked_sub(used).context("disk is over capacity")?;
    let needed = REQUIRED.saturating_sub(free);

    let part2 = tree
        .dirs
        .iter()
        .map(|d| d.size)
        .filter(|&size| size >= needed)
        .min()
        .context("no directory is large enough")?;

    Ok((part1, part2))
}

#[derive(Default)]
struct Dir {
    parent: Option<usize>,
    children: HashMap<&'static str, usize>,
    /// Total size of all files in this directory and below.
    size: u64,
}

/// Directories stored in a flat list, linked by index.
struct Tree {
    dirs: Vec<Dir>,
}

impl Tree {
    /// Replay a terminal session to reconstruct directory sizes.
    fn parse(input: &mut IStr) -> Result<Self> {
        let mut tree = Tree {
            dirs: vec![Dir::default()],
        };

        let mut cwd = ROOT;

        while let Some((W(a), W(b), c)) =
            input.try_line::<(W<&'static str>, W<&'static str>, Option<W<&'static str>>)>()?
        {
            match (a, b, c.map(|W(c)| c)) {
                ("$", "cd", Some("/")) => {
                    cwd = ROOT;
                }
                ("$", "cd", Some("..")) => {
                    cwd = tree.dirs[cwd].parent.context("cannot leave the root directory")?;
                }
                ("$", "cd", Some(name)) => {
                    cwd = tree.child(cwd, name);
                    log::debug!("cd {name} ({cwd})");
                }
                ("$", "ls", None) | ("dir", _, None) => {}
                (size, name, None) => {
                    let size = size.parse::<u64>().with_context(|| format!("bad size for {name}"))?;
                    tree.add_file(cwd, size)?;
                }
                (a, b, c) => {
                    bail!("unsupported line: {a} {b} {c:?}");
                }
            }
        }

        Ok(tree)
    }

    /// Get or create the named child of a directory.
    fn child(&mut self, parent: usize, name: &'static str) -> usize {
        if let Some(&index) = self.dirs[parent].children.get(name) {
            return index;
        }

        let index = self.dirs.len();

        self.dirs.push(Dir {
            parent: Some(parent),
            ..Dir::default()
        });

        self.dirs[parent].children.insert(name, index);
        index
    }

    /// Account for a file in the given directory and all of its ancestors.
    fn add_file(&mut self, dir: usize, size: u64) -> Result<()> {
        let mut current = Some(dir);

        while let Some(index) = current {
            let dir = &mut self.dirs[index];
            dir.size = dir.size.checked_add(size).context("size overflow")?;
            current = dir.parent;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{solve, Tree, ROOT};

    #[test]
    fn test_example() -> Result<()> {
        let input = IStr::from_static(include_bytes!("../../inputs/d07.txt"));
        assert_eq!(solve(input)?, (95437, 24933642));
        Ok(())
    }

    #[test]
    fn test_sizes() -> Result<()> {
        let mut input = IStr::from_static(include_bytes!("../../inputs/d07.txt"));
        let tree = Tree::parse(&mut input)?;

        let mut sizes = tree.dirs.iter().map(|d| d.size).collect::<Vec<_>>();
        sizes.sort();
        assert_eq!(sizes, [584, 94853, 24933642, 48381165]);
        assert_eq!(tree.dirs[ROOT].size, 48381165);
        Ok(())
    }

    #[test]
    fn test_revisit_directory() -> Result<()> {
        let mut input = IStr::from_static(b"$ cd a\n10 x\n$ cd ..\n$ cd a\n5 y\n$ cd /\n1 z\n");
        let tree = Tree::parse(&mut input)?;

        assert_eq!(tree.dirs.len(), 2);
        assert_eq!(tree.dirs[ROOT].size, 16);
        assert_eq!(tree.dirs[1].size, 15);
        Ok(())
    }

    #[test]
    fn test_bad_session() {
        assert!(solve(IStr::from_static(b"$ cd ..\n")).is_err());
        assert!(solve(IStr::from_static(b"$ rm -rf /\n")).is_err());
        assert!(solve(IStr::from_static(b"big file\n")).is_err());
    }
}
