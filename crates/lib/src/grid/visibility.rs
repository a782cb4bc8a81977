use crate::grid::{Direction, Grid, GridError, Scan};

impl<T> Grid<T>
where
    T: PartialOrd,
{
    /// Scan outwards from the given cell in every direction, in the order of
    /// [Direction::ALL]. Each scan stops at the first cell which is at least
    /// as large as the starting cell.
    pub fn scans(&self, x: usize, y: usize) -> Result<[Scan; 4], GridError> {
        let origin = self.at(x, y)?;
        let mut scans = [Scan::Edge(0); 4];

        for (scan, direction) in scans.iter_mut().zip(Direction::ALL) {
            *scan = self.ray(x, y, direction)?.scan(|value| value >= origin);
        }

        Ok(scans)
    }

    /// Test if the cell can be seen from outside the grid, which is the
    /// case when at least one scan reaches the edge.
    ///
    /// Cells on the border are always visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new(vec![2, 5, 5, 6, 5, 3, 3, 3, 5], 3)?;
    /// assert!(grid.is_visible(1, 1)?);
    /// assert!(grid.is_visible(0, 2)?);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn is_visible(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let origin = self.at(x, y)?;

        for direction in Direction::ALL {
            if self.ray(x, y, direction)?.scan(|value| value >= origin).is_visible() {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// The product of the viewing distance in every direction.
    ///
    /// Cells on the border always score zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = Grid::new(vec![2, 5, 5, 6, 5, 3, 3, 3, 5], 3)?;
    /// assert_eq!(grid.scenic_score(1, 1)?, 1);
    /// assert_eq!(grid.scenic_score(2, 1)?, 0);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn scenic_score(&self, x: usize, y: usize) -> Result<usize, GridError> {
        Ok(self.scans(x, y)?.iter().map(|scan| scan.distance()).product())
    }
}
