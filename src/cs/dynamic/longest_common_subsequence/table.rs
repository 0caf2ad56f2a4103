//! The LCS dynamic-programming table.
//!
//! `LcsTable` holds the two input sequences and, once first read, the
//! `(rows + 1) x (columns + 1)` grid of prefix LCS lengths. Row 0 and column 0
//! are the empty-prefix base case and stay zero. For `r, c >= 1`:
//!
//! ```text
//! grid[r][c] = grid[r-1][c-1] + 1                    if rows[r-1] == columns[c-1]
//!            = max(grid[r-1][c], grid[r][c-1])        otherwise
//! ```
//!
//! The grid and the backtracked path are each computed at most once per table.

use std::sync::OnceLock;

use log::debug;

use super::path::LcsPath;
use super::Lcs;
use crate::cs::grid::{DenseGrid, IntGrid, TransposedGrid};
use crate::cs::sequence::Sequence;
use crate::error::Result;

/// Lazily computed LCS table over a row sequence and a column sequence.
///
/// The table reads as an [`IntGrid`] of size
/// `(row_sequence.len() + 1) x (column_sequence.len() + 1)`. It is read-only.
///
/// # Examples
///
/// ```
/// use lcsdiff::{CharSequence, IntGrid, LcsTable, Sequence};
///
/// let table = LcsTable::new(CharSequence::new("ACADB"), CharSequence::new("CBDA"));
/// assert_eq!(table.row_count(), 6);
/// assert_eq!(table.value(5, 4), 2);
/// assert_eq!(table.lcs().to_vec(), vec!['C', 'A']);
/// ```
#[derive(Debug)]
pub struct LcsTable<R, C> {
    rows: R,
    columns: C,
    grid: OnceLock<DenseGrid>,
    path: OnceLock<LcsPath>,
}

impl<R, C> LcsTable<R, C>
where
    R: Sequence,
    C: Sequence,
    R::Item: PartialEq<C::Item>,
{
    /// Creates a table. No work is done until the grid is first read.
    pub fn new(rows: R, columns: C) -> Self {
        Self {
            rows,
            columns,
            grid: OnceLock::new(),
            path: OnceLock::new(),
        }
    }

    /// The sequence indexing the grid rows.
    pub fn row_sequence(&self) -> &R {
        &self.rows
    }

    /// The sequence indexing the grid columns.
    pub fn column_sequence(&self) -> &C {
        &self.columns
    }

    /// Number of cells the grid will hold. Does not trigger computation.
    pub fn cell_count(&self) -> usize {
        (self.rows.len() + 1) * (self.columns.len() + 1)
    }

    /// The computed grid.
    pub fn grid(&self) -> &DenseGrid {
        self.grid.get_or_init(|| self.fill())
    }

    /// The computed grid with rows and columns swapped.
    pub fn transposed(&self) -> TransposedGrid<&DenseGrid> {
        TransposedGrid::new(self.grid())
    }

    /// Length of the longest common subsequence: the bottom-right cell.
    pub fn lcs_len(&self) -> usize {
        let value = self.grid().value(self.rows.len(), self.columns.len());
        value as usize
    }

    /// The backtracked alignment of matched index pairs.
    pub fn path(&self) -> &LcsPath {
        self.path.get_or_init(|| LcsPath::backtrack(self))
    }

    /// The longest common subsequence, read through the row sequence.
    pub fn lcs(&self) -> Lcs<'_, R> {
        Lcs::new(self.path(), &self.rows)
    }

    fn fill(&self) -> DenseGrid {
        let row_len = self.rows.len();
        let column_len = self.columns.len();
        let mut grid = DenseGrid::new(row_len + 1, column_len + 1);
        let column_items = self.columns.to_vec();

        for (i, row_item) in self.rows.iter().enumerate() {
            let row = i + 1;
            for (j, column_item) in column_items.iter().enumerate() {
                let column = j + 1;
                let value = if row_item == *column_item {
                    grid.value(row - 1, column - 1) + 1
                } else {
                    grid.value(row - 1, column).max(grid.value(row, column - 1))
                };
                grid.set_value(row, column, value);
            }
        }

        debug!(
            "computed {}x{} LCS grid, length {}",
            row_len + 1,
            column_len + 1,
            grid.value(row_len, column_len)
        );
        grid
    }
}

impl<R, C> IntGrid for LcsTable<R, C>
where
    R: Sequence,
    C: Sequence,
    R::Item: PartialEq<C::Item>,
{
    fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    fn column_count(&self) -> usize {
        self.columns.len() + 1
    }

    fn try_value(&self, row: usize, column: usize) -> Result<i32> {
        self.grid().try_value(row, column)
    }
}
