//! Backtracking an [`LcsTable`] into the matched index pairs.

use std::fmt;

use log::{debug, trace};

use super::table::LcsTable;
use crate::cs::grid::IntGrid;
use crate::cs::sequence::Sequence;

/// A matched pair: `row` indexes the row sequence, `column` the column
/// sequence. Both are 0-based positions in the original sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    pub row: usize,
    pub column: usize,
}

impl IndexPair {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for IndexPair {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The alignment behind a longest common subsequence, in ascending order.
///
/// `element_at(0)` is the earliest matched pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsPath {
    pairs: Vec<IndexPair>,
}

impl LcsPath {
    /// Walks `table` from its bottom-right cell back to the origin.
    ///
    /// At each cell with `row > 0 && column > 0`:
    /// 1. If the elements match, the pair is recorded and both indices step back.
    /// 2. Otherwise, if the cell above holds less than the cell to the left,
    ///    the column steps back.
    /// 3. Otherwise the row steps back. Ties therefore always move up.
    ///
    /// When several longest common subsequences exist, this rule decides which
    /// one is returned. Changing it changes observable results.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcsdiff::{CharSequence, IndexPair, LcsPath, LcsTable, Sequence};
    ///
    /// let table = LcsTable::new(CharSequence::new("ACADB"), CharSequence::new("CBDA"));
    /// let path = LcsPath::backtrack(&table);
    /// assert_eq!(path.to_vec(), vec![IndexPair::new(1, 0), IndexPair::new(2, 3)]);
    /// ```
    pub fn backtrack<R, C>(table: &LcsTable<R, C>) -> Self
    where
        R: Sequence,
        C: Sequence,
        R::Item: PartialEq<C::Item>,
    {
        let grid = table.grid();
        let rows = table.row_sequence();
        let columns = table.column_sequence();

        let mut row = rows.len();
        let mut column = columns.len();
        let mut pairs = Vec::with_capacity(table.lcs_len());

        while row > 0 && column > 0 {
            if rows.element_at(row - 1) == columns.element_at(column - 1) {
                trace!("match at ({}, {})", row - 1, column - 1);
                pairs.push(IndexPair::new(row - 1, column - 1));
                row -= 1;
                column -= 1;
            } else if grid.value(row - 1, column) < grid.value(row, column - 1) {
                trace!("left from ({row}, {column})");
                column -= 1;
            } else {
                trace!("up from ({row}, {column})");
                row -= 1;
            }
        }

        pairs.reverse();
        debug!("reconstructed LCS path of {} pairs", pairs.len());
        Self { pairs }
    }

    /// The matched pairs, earliest first.
    pub fn pairs(&self) -> &[IndexPair] {
        &self.pairs
    }
}

impl Sequence for LcsPath {
    type Item = IndexPair;

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn get(&self, index: usize) -> Option<IndexPair> {
        self.pairs.get(index).copied()
    }
}
