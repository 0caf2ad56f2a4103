pub mod dynamic;
pub mod grid;
pub mod sequence;

// Re-export all modules
pub use dynamic::*;
pub use grid::*;
pub use sequence::*;
