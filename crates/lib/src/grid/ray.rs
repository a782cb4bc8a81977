use core::iter::FusedIterator;

use crate::grid::{Cell, Grid};

/// One of the four cardinal scan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit offset of the direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Step once from the given coordinates, or `None` if that leaves a
    /// `width` by `height` area.
    #[inline]
    fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Down => Some((x, y + 1)).filter(|&(_, y)| y < height),
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x + 1, y)).filter(|&(x, _)| x < width),
        }
    }
}

/// The outcome of scanning along a [Ray].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The edge of the grid was reached after inspecting this many cells
    /// without any of them stopping the scan.
    Edge(usize),
    /// A stopping cell was found at this distance. The stopping cell is
    /// included in the count.
    Blocked(usize),
}

impl Scan {
    /// A scan which reached the edge has an unobstructed line of sight.
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Scan::Edge(..))
    }

    /// Number of cells inspected.
    #[inline]
    pub fn distance(self) -> usize {
        match self {
            Scan::Edge(n) | Scan::Blocked(n) => n,
        }
    }
}

/// Iterator over the cells between a starting cell (exclusive) and the
/// edge of the grid (inclusive) in one direction.
///
/// See [Grid::ray].
#[derive(Debug, Clone)]
pub struct Ray<'a, T> {
    grid: &'a Grid<T>,
    x: usize,
    y: usize,
    direction: Direction,
}

impl<'a, T> Ray<'a, T> {
    #[inline]
    pub(super) fn new(grid: &'a Grid<T>, x: usize, y: usize, direction: Direction) -> Self {
        Self {
            grid,
            x,
            y,
            direction,
        }
    }

    /// The direction the ray travels in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Walk the ray until `stop` matches a cell or the edge is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new(vec![3, 0, 3, 7, 3], 5)?;
    ///
    /// let scan = grid.ray(2, 0, Direction::Left)?.scan(|h| *h >= 3);
    /// assert_eq!(scan, Scan::Blocked(2));
    /// assert!(!scan.is_visible());
    ///
    /// let scan = grid.ray(3, 0, Direction::Left)?.scan(|h| *h >= 7);
    /// assert_eq!(scan, Scan::Edge(3));
    /// assert!(scan.is_visible());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn scan<P>(self, mut stop: P) -> Scan
    where
        P: FnMut(&T) -> bool,
    {
        let mut distance = 0;

        for cell in self {
            distance += 1;

            if stop(cell.value) {
                return Scan::Blocked(distance);
            }
        }

        Scan::Edge(distance)
    }
}

impl<'a, T> Iterator for Ray<'a, T> {
    type Item = Cell<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.direction.step(
            self.x,
            self.y,
            self.grid.width(),
            self.grid.height(),
        )?;

        self.x = x;
        self.y = y;

        let value = self.grid.get(x, y)?;
        Some(Cell { x, y, value })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Ray<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match self.direction {
            Direction::Up => self.y,
            Direction::Down => self.grid.height().saturating_sub(self.y + 1),
            Direction::Left => self.x,
            Direction::Right => self.grid.width().saturating_sub(self.x + 1),
        }
    }
}

impl<T> FusedIterator for Ray<'_, T> {}
