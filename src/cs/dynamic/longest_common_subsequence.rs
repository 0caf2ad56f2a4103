//! # Longest Common Subsequence
//!
//! Classic O(n·m) LCS over any two [`Sequence`]s whose elements compare with
//! `PartialEq`. The work is split in three stages, each computed lazily and
//! at most once:
//!
//! 1. [`LcsTable`] fills the prefix-length grid.
//! 2. [`LcsPath`] backtracks the grid into matched `(row, column)` pairs.
//! 3. [`Lcs`] projects the path back onto the row sequence's elements.
//!
//! [`LongestCommonSubsequence`] bundles all three behind one value.
//!
//! When several longest subsequences exist, the backtrack prefers moving up
//! on ties (see [`LcsPath::backtrack`]), so the result depends on which input
//! indexes the rows.
//!
//! # Examples
//!
//! ```
//! use lcsdiff::{LongestCommonSubsequence, Sequence};
//!
//! let lcs = LongestCommonSubsequence::of("AGGTAB", "GXTXAYB");
//! assert_eq!(lcs.len(), 4);
//! assert_eq!(lcs.to_string(), "GTAB");
//!
//! let a = [1, 3, 5, 7, 9];
//! let b = [1, 4, 5, 9];
//! let lcs = LongestCommonSubsequence::from_slices(&a, &b);
//! assert_eq!(lcs.to_vec(), vec![&1, &5, &9]);
//! ```
//!
//! # Complexity
//! * Time: O(n·m)
//! * Space: O(n·m) for the grid, O(min(n, m)) for the path

use std::fmt;

pub mod path;
pub mod table;

pub use path::{IndexPair, LcsPath};
pub use table::LcsTable;

use crate::cs::sequence::{CharSequence, ListSequence, Sequence};

/// The longest common subsequence as a live view: the path's row indices
/// read through the row sequence.
#[derive(Debug)]
pub struct Lcs<'t, R> {
    path: &'t LcsPath,
    rows: &'t R,
}

impl<'t, R: Sequence> Lcs<'t, R> {
    pub fn new(path: &'t LcsPath, rows: &'t R) -> Self {
        Self { path, rows }
    }

    /// The alignment this view projects.
    pub fn path(&self) -> &'t LcsPath {
        self.path
    }
}

impl<R> Clone for Lcs<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Lcs<'_, R> {}

impl<R: Sequence> Sequence for Lcs<'_, R> {
    type Item = R::Item;

    fn len(&self) -> usize {
        self.path.len()
    }

    fn get(&self, index: usize) -> Option<R::Item> {
        let pair = self.path.get(index)?;
        self.rows.get(pair.row)
    }
}

impl<R> fmt::Display for Lcs<'_, R>
where
    R: Sequence,
    R::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|item| write!(f, "{item}"))
    }
}

/// Longest common subsequence of two sequences.
///
/// Construction is cheap; the table, path and result are computed on first
/// use and cached.
#[derive(Debug)]
pub struct LongestCommonSubsequence<R, C> {
    table: LcsTable<R, C>,
}

impl<R, C> LongestCommonSubsequence<R, C>
where
    R: Sequence,
    C: Sequence,
    R::Item: PartialEq<C::Item>,
{
    /// Wraps two sequences. `rows` is the sequence results are read from.
    pub fn new(rows: R, columns: C) -> Self {
        Self {
            table: LcsTable::new(rows, columns),
        }
    }

    /// The underlying table, for callers that need individual grid cells.
    pub fn table(&self) -> &LcsTable<R, C> {
        &self.table
    }

    /// The index alignment behind the result.
    pub fn path(&self) -> &LcsPath {
        self.table.path()
    }

    /// The result as a borrowed view.
    pub fn lcs(&self) -> Lcs<'_, R> {
        self.table.lcs()
    }
}

impl<'a, T: PartialEq> LongestCommonSubsequence<ListSequence<'a, T>, ListSequence<'a, T>> {
    /// LCS of two slices.
    pub fn from_slices(a: &'a [T], b: &'a [T]) -> Self {
        Self::new(ListSequence::new(a), ListSequence::new(b))
    }
}

impl<'a> LongestCommonSubsequence<CharSequence<'a>, CharSequence<'a>> {
    /// LCS of the characters of two strings.
    pub fn of(a: &'a str, b: &'a str) -> Self {
        Self::new(CharSequence::new(a), CharSequence::new(b))
    }
}

impl<R, C> Sequence for LongestCommonSubsequence<R, C>
where
    R: Sequence,
    C: Sequence,
    R::Item: PartialEq<C::Item>,
{
    type Item = R::Item;

    fn len(&self) -> usize {
        self.path().len()
    }

    fn get(&self, index: usize) -> Option<R::Item> {
        self.lcs().get(index)
    }
}

impl<R, C> fmt::Display for LongestCommonSubsequence<R, C>
where
    R: Sequence,
    C: Sequence,
    R::Item: PartialEq<C::Item> + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.lcs(), f)
    }
}

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Only the grid is computed; no path is reconstructed.
///
/// # Examples
///
/// ```
/// use lcsdiff::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let s1 = "ABCDGH";
/// let s2 = "AEDFHR";
/// assert_eq!(lcs_length(s1, s2), 3); // "ADH"
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    LcsTable::new(CharSequence::new(a), CharSequence::new(b)).lcs_len()
}

/// Returns the longest common subsequence of `a` and `b` as a `String`.
///
/// If several subsequences share the maximal length, the one selected by the
/// up-first tie-break of [`LcsPath::backtrack`] is returned.
///
/// # Examples
///
/// ```
/// use lcsdiff::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// assert_eq!(lcs_sequence("ACADB", "CBDA"), "CA");
/// assert_eq!(lcs_sequence("CBDA", "ACADB"), "CB");
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    LongestCommonSubsequence::of(a, b).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_length("ABC", ""), 0);
        assert_eq!(lcs_length("", "ABC"), 0);

        assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
        assert_eq!(lcs_length("XMJYAUZ", "MZJAWXU"), 4);
        assert_eq!(lcs_length("BANANA", "ATANA"), 4);
    }

    #[test]
    fn test_lcs_sequence() {
        assert_eq!(lcs_sequence("", ""), "");
        assert_eq!(lcs_sequence("ABC", ""), "");
        assert_eq!(lcs_sequence("", "ABC"), "");

        assert_eq!(lcs_sequence("ABCBDAB", "BDCABA"), "BCBA");
        assert_eq!(lcs_sequence("XMJYAUZ", "MZJAWXU"), "MJAU");
        assert!(is_subsequence("MJAU", "XMJYAUZ"));
        assert!(is_subsequence("MJAU", "MZJAWXU"));
    }

    #[test]
    fn test_seed_scenarios() {
        let lcs = LongestCommonSubsequence::of("ACADB", "CBDA");
        assert_eq!(lcs.len(), 2);
        assert_eq!(lcs.to_vec(), vec!['C', 'A']);

        assert_eq!(lcs_sequence("KTEURFJS", "TKWIDEUJ"), "KEUJ");
        assert_eq!(lcs_sequence("AGGTAB", "GXTXAYB"), "GTAB");
        assert_eq!(lcs_sequence("FATHER", "VATER"), "ATER");
        assert_eq!(LongestCommonSubsequence::of("", "ABC").len(), 0);
        assert_eq!(lcs_sequence("ABC", "ABC"), "ABC");
    }

    #[test]
    fn test_unicode_strings() {
        assert_eq!(lcs_sequence("naïve café", "native cafe"), "nave caf");
        assert_eq!(lcs_length("日本語", "日語"), 2);
    }

    #[test]
    fn test_facade_shares_cached_path() {
        let lcs = LongestCommonSubsequence::of("KTEURFJS", "TKWIDEUJ");
        let first: *const LcsPath = lcs.path();
        assert_eq!(lcs.element_at(0), 'K');
        assert!(std::ptr::eq(first, lcs.table().path()));
        assert!(std::ptr::eq(first, lcs.lcs().path()));
    }

    #[test]
    fn test_result_reads_row_sequence() {
        #[derive(Debug, Clone, Copy)]
        struct Tagged {
            key: char,
            source: u8,
        }
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }

        let rows = [
            Tagged { key: 'a', source: 1 },
            Tagged { key: 'b', source: 1 },
        ];
        let columns = [Tagged { key: 'b', source: 2 }];
        let lcs = LongestCommonSubsequence::from_slices(&rows, &columns);
        assert_eq!(lcs.len(), 1);
        assert_eq!(lcs.element_at(0).source, 1);
    }

    #[test]
    fn test_absent_elements_match() {
        let a = [Some(1), None, Some(2)];
        let b = [None, Some(2)];
        let lcs = LongestCommonSubsequence::from_slices(&a, &b);
        assert_eq!(lcs.to_vec(), vec![&None, &Some(2)]);
    }

    #[test]
    #[should_panic(expected = "index 2 out of bounds for sequence of length 2")]
    fn test_element_at_out_of_bounds() {
        LongestCommonSubsequence::of("ACADB", "CBDA").element_at(2);
    }

    /// A helper to verify that `subseq` is a subsequence of `s`.
    fn is_subsequence(subseq: &str, s: &str) -> bool {
        let mut it = s.chars();
        subseq.chars().all(|c| it.any(|x| x == c))
    }
}
