/// Trait for k-means centroid computation via incremental aggregation.
///
/// Absorbing is the running sum half of a mean: starting from `identity()`
/// and absorbing every member of a cluster yields the elementwise sum of the
/// cluster, which [`Point::divide`](super::Point::divide) turns into its
/// centroid.
///
/// # Invariant
///
/// `absorb` is associative and commutative up to floating-point rounding,
/// and `identity()` absorbs to the other operand unchanged.
pub trait Absorb {
    /// Returns the neutral element of matching shape (the zero vector).
    fn identity(&self) -> Self;
    /// Combines this point with another, producing their elementwise sum.
    fn absorb(self, other: &Self) -> Self;
}
