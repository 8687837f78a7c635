//! Euclidean point types the clustering engine operates on.
pub mod absorb;
pub use absorb::*;

pub mod point;
pub use point::*;

pub mod vector;
pub use vector::*;
