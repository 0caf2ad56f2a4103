pub mod longest_common_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use longest_common_subsequence::{
    lcs_length, lcs_sequence, IndexPair, Lcs, LcsPath, LcsTable, LongestCommonSubsequence,
};
