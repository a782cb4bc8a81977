//! Immutable two-dimensional grids.
//!
//! A [Grid] stores its values in row-major order. Coordinates are `(x, y)`
//! where `x` is the column and `y` the row, with `(0, 0)` in the top-left
//! corner.

mod ray;
mod visibility;

pub use self::ray::{Direction, Ray, Scan};

use core::slice;

use bstr::ByteSlice;
use thiserror::Error;

/// Errors raised when constructing or accessing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {actual} columns, but expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("bad cell {cell:?} at ({x}, {y})")]
    BadCell { x: usize, y: usize, cell: char },
    #[error("({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("cannot strip a border of {margin} from a {width}x{height} grid")]
    TooSmall {
        margin: usize,
        width: usize,
        height: usize,
    },
}

impl GridError {
    /// Test if the error was caused by malformed input data.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            GridError::Empty | GridError::Ragged { .. } | GridError::BadCell { .. }
        )
    }
}

/// A value in a grid together with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell<T> {
    pub x: usize,
    pub y: usize,
    pub value: T,
}

/// A rectangular, immutable grid of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    values: Vec<T>,
    width: usize,
}

impl<T> Grid<T> {
    /// Construct a grid out of values in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new(vec![1, 2, 3, 4, 5, 6], 3)?;
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert_eq!(grid.at(2, 1)?, &6);
    ///
    /// assert!(Grid::new(vec![1, 2, 3, 4], 3).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn new(values: Vec<T>, width: usize) -> Result<Self, GridError> {
        if width == 0 || values.is_empty() {
            return Err(GridError::Empty);
        }

        let actual = values.len() % width;

        if actual != 0 {
            return Err(GridError::Ragged {
                row: values.len() / width,
                expected: width,
                actual,
            });
        }

        Ok(Self { values, width })
    }

    /// Parse a grid out of a block of text, one row per line.
    ///
    /// The first line decides the width of the grid and every other line
    /// must have the same length. Each byte is converted with `map`, which
    /// rejects it by returning `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let digit = |b: u8| b.is_ascii_digit().then(|| b - b'0');
    ///
    /// let grid = Grid::from_bytes(b"303\n255\n", digit)?;
    /// assert_eq!(grid.rows().collect::<Vec<_>>(), [[3, 0, 3], [2, 5, 5]]);
    ///
    /// let error = Grid::from_bytes(b"303\n25\n", digit).unwrap_err();
    /// assert!(error.is_malformed());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_bytes<F>(data: &[u8], mut map: F) -> Result<Self, GridError>
    where
        F: FnMut(u8) -> Option<T>,
    {
        let mut values = Vec::with_capacity(data.len());
        let mut width = None;

        for (y, line) in data.lines().enumerate() {
            let expected = *width.get_or_insert(line.len());

            if line.len() != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    actual: line.len(),
                });
            }

            for (x, &b) in line.iter().enumerate() {
                let Some(value) = map(b) else {
                    return Err(GridError::BadCell {
                        x,
                        y,
                        cell: char::from(b),
                    });
                };

                values.push(value);
            }
        }

        Self::new(values, width.unwrap_or_default())
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.values.len() / self.width
    }

    /// Total number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A grid is never empty, this is provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at the given coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width {
            return None;
        }

        self.values.get(y.checked_mul(self.width)?.checked_add(x)?)
    }

    /// Get the value at the given coordinates, failing with
    /// [GridError::OutOfBounds] if they are outside of the grid.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Result<&T, GridError> {
        match self.get(x, y) {
            Some(value) => Ok(value),
            None => Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            }),
        }
    }

    /// Iterate over all values in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterate over rows.
    #[inline]
    pub fn rows(&self) -> slice::ChunksExact<'_, T> {
        self.values.chunks_exact(self.width)
    }

    /// Iterate over the values in the given column.
    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &T> + '_> {
        if x >= self.width {
            return None;
        }

        Some(self.values.iter().skip(x).step_by(self.width))
    }

    /// Construct a directional scan starting at the given cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new(vec![3, 0, 3, 7, 3], 5)?;
    ///
    /// let left = grid.ray(2, 0, Direction::Left)?.map(|c| *c.value).collect::<Vec<_>>();
    /// assert_eq!(left, [0, 3]);
    ///
    /// assert_eq!(grid.ray(2, 0, Direction::Right)?.scan(|h| *h >= 3), Scan::Blocked(1));
    /// assert_eq!(grid.ray(2, 0, Direction::Up)?.scan(|h| *h >= 3), Scan::Edge(0));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn ray(&self, x: usize, y: usize, direction: Direction) -> Result<Ray<'_, T>, GridError> {
        self.at(x, y)?;
        Ok(Ray::new(self, x, y, direction))
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Enumerate the grid, pairing each value with its coordinates.
    ///
    /// Sub-grids extracted from the result keep the coordinates of the
    /// original grid.
    pub fn cells(&self) -> Grid<Cell<T>> {
        let width = self.width;

        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(n, value)| Cell {
                x: n % width,
                y: n / width,
                value: value.clone(),
            })
            .collect();

        Grid { values, width }
    }

    /// Strip a border of `margin` cells from every side of the grid.
    ///
    /// Fails with [GridError::TooSmall] if nothing would remain.
    pub fn shrink(&self, margin: usize) -> Result<Grid<T>, GridError> {
        let too_small = GridError::TooSmall {
            margin,
            width: self.width(),
            height: self.height(),
        };

        let Some(width) = self.width().checked_sub(margin.saturating_mul(2)) else {
            return Err(too_small);
        };

        let Some(height) = self.height().checked_sub(margin.saturating_mul(2)) else {
            return Err(too_small);
        };

        if width == 0 || height == 0 {
            return Err(too_small);
        }

        let mut values = Vec::with_capacity(width * height);

        for row in self.rows().skip(margin).take(height) {
            values.extend_from_slice(&row[margin..margin + width]);
        }

        Ok(Grid { values, width })
    }

    /// The interior of the grid, which is everything except the outermost
    /// ring of cells. Coordinates in the result are shifted by `(-1, -1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new((0..16).collect(), 4)?;
    /// let interior = grid.interior()?;
    /// assert_eq!(interior.rows().collect::<Vec<_>>(), [[5, 6], [9, 10]]);
    ///
    /// assert!(matches!(interior.interior(), Err(GridError::TooSmall { .. })));
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn interior(&self) -> Result<Grid<T>, GridError> {
        self.shrink(1)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
