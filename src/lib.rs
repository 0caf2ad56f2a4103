//! Longest common subsequence engine.
//!
//! Computes the LCS of two sequences with the canonical O(n·m) table, and the
//! index alignment that produces it. Inputs are anything implementing
//! [`Sequence`]; adapters exist for strings ([`CharSequence`]) and slices
//! ([`ListSequence`]).
//!
//! ```
//! use lcsdiff::{LongestCommonSubsequence, Sequence};
//!
//! let lcs = LongestCommonSubsequence::of("FATHER", "VATER");
//! assert_eq!(lcs.to_string(), "ATER");
//! assert_eq!(lcs.path().element_at(0).row, 1);
//! ```

pub mod cs;
pub mod error;

pub use cs::dynamic::longest_common_subsequence::{
    lcs_length, lcs_sequence, IndexPair, Lcs, LcsPath, LcsTable, LongestCommonSubsequence,
};
pub use cs::grid::{cells_equal, DenseGrid, IntGrid, TransposedGrid};
pub use cs::sequence::{CharSequence, ListSequence, Sequence, SequenceIter};
pub use error::{Error, Result};
