//! # Integer grids
//!
//! [`IntGrid`] is a 2-D grid of `i32` addressed by `(row, column)`.
//! [`DenseGrid`] is the owning, writable implementation backed by an
//! `ndarray::Array2`. [`TransposedGrid`] wraps any grid and swaps the two
//! coordinates on every access without copying cells.
//!
//! Grids are read-only unless they override [`IntGrid::try_set_value`].
//! Shared references to a grid are always read-only; mutable references
//! forward writes, so `TransposedGrid::new(&mut grid)` writes through while
//! `TransposedGrid::new(&grid)` does not.
//!
//! # Examples
//!
//! ```
//! use lcsdiff::{DenseGrid, IntGrid, TransposedGrid};
//!
//! let mut grid = DenseGrid::new(2, 3);
//! grid.set_value(0, 2, 7);
//!
//! let view = TransposedGrid::new(&mut grid);
//! assert_eq!(view.row_count(), 3);
//! assert_eq!(view.value(2, 0), 7);
//! ```

use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};

/// A 2-D grid of signed integers.
pub trait IntGrid {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Reads the cell at `(row, column)`.
    ///
    /// # Errors
    /// * `Error::CellOutOfBounds` - if the cell lies outside the grid
    fn try_value(&self, row: usize, column: usize) -> Result<i32>;

    /// Writes the cell at `(row, column)`.
    ///
    /// Read-only grids keep this default, which always fails.
    ///
    /// # Errors
    /// * `Error::UnsupportedOperation` - if the grid is read-only
    /// * `Error::CellOutOfBounds` - if the cell lies outside the grid
    fn try_set_value(&mut self, _row: usize, _column: usize, _value: i32) -> Result<()> {
        Err(Error::UnsupportedOperation("set_value on a read-only grid"))
    }

    /// Reads the cell at `(row, column)`.
    ///
    /// # Panics
    /// Panics if the cell lies outside the grid.
    fn value(&self, row: usize, column: usize) -> i32 {
        match self.try_value(row, column) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Writes the cell at `(row, column)`.
    ///
    /// # Panics
    /// Panics if the grid is read-only or the cell lies outside the grid.
    fn set_value(&mut self, row: usize, column: usize, value: i32) {
        if let Err(err) = self.try_set_value(row, column, value) {
            panic!("{err}");
        }
    }
}

impl<G: IntGrid + ?Sized> IntGrid for &G {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn try_value(&self, row: usize, column: usize) -> Result<i32> {
        (**self).try_value(row, column)
    }
}

impl<G: IntGrid + ?Sized> IntGrid for &mut G {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn try_value(&self, row: usize, column: usize) -> Result<i32> {
        (**self).try_value(row, column)
    }

    fn try_set_value(&mut self, row: usize, column: usize, value: i32) -> Result<()> {
        (**self).try_set_value(row, column, value)
    }
}

/// Returns `true` if both grids have the same shape and the same cells.
pub fn cells_equal<A, B>(a: &A, b: &B) -> bool
where
    A: IntGrid + ?Sized,
    B: IntGrid + ?Sized,
{
    if a.row_count() != b.row_count() || a.column_count() != b.column_count() {
        return false;
    }
    (0..a.row_count()).all(|row| {
        (0..a.column_count()).all(|column| a.try_value(row, column) == b.try_value(row, column))
    })
}

fn check_cell<G: IntGrid + ?Sized>(grid: &G, row: usize, column: usize) -> Result<()> {
    let rows = grid.row_count();
    let columns = grid.column_count();
    if row < rows && column < columns {
        Ok(())
    } else {
        Err(Error::CellOutOfBounds {
            row,
            column,
            rows,
            columns,
        })
    }
}

/// Owning, writable grid. All cells start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid {
    cells: Array2<i32>,
}

impl DenseGrid {
    /// Creates a zero-filled `rows x columns` grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: Array2::zeros((rows, columns)),
        }
    }

    /// The backing array.
    pub fn as_array(&self) -> &Array2<i32> {
        &self.cells
    }
}

impl IntGrid for DenseGrid {
    fn row_count(&self) -> usize {
        self.cells.nrows()
    }

    fn column_count(&self) -> usize {
        self.cells.ncols()
    }

    fn try_value(&self, row: usize, column: usize) -> Result<i32> {
        check_cell(self, row, column)?;
        Ok(self.cells[[row, column]])
    }

    fn try_set_value(&mut self, row: usize, column: usize, value: i32) -> Result<()> {
        check_cell(self, row, column)?;
        self.cells[[row, column]] = value;
        Ok(())
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// View of another grid with rows and columns swapped.
///
/// `value(r, c)` reads `inner.value(c, r)`. Writes go through to the wrapped
/// grid when it accepts them.
#[derive(Debug, Clone, Copy)]
pub struct TransposedGrid<G> {
    inner: G,
}

impl<G: IntGrid> TransposedGrid<G> {
    /// Wraps `inner`. Pass `&grid` for a read-only view, `&mut grid` for a
    /// write-through one.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// The wrapped grid.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: IntGrid> IntGrid for TransposedGrid<G> {
    fn row_count(&self) -> usize {
        self.inner.column_count()
    }

    fn column_count(&self) -> usize {
        self.inner.row_count()
    }

    fn try_value(&self, row: usize, column: usize) -> Result<i32> {
        check_cell(self, row, column)?;
        self.inner.try_value(column, row)
    }

    fn try_set_value(&mut self, row: usize, column: usize, value: i32) -> Result<()> {
        check_cell(self, row, column)?;
        self.inner.try_set_value(column, row, value)
    }
}
