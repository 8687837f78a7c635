use super::Absorb;
use crate::Energy;

/// A point in a Euclidean space that can be clustered.
///
/// The engine only ever compares points of one training run against each
/// other, so implementations may assume both operands of [`Point::distance`]
/// share a dimension; callers validate that through [`Point::dimension`].
pub trait Point: Absorb + Clone + Send + Sync {
    /// Number of components.
    fn dimension(&self) -> usize;
    /// Euclidean (L2) distance to another point of the same dimension.
    fn distance(&self, other: &Self) -> Energy;
    /// Elementwise division by a non-zero member count.
    fn divide(self, n: usize) -> Self;
    /// Whether every coordinate is finite.
    fn is_finite(&self) -> bool;

    /// Elementwise mean of a group of points, or `None` for an empty group.
    fn mean<'a, I>(members: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut n = 0;
        let mut members = members.into_iter().peekable();
        let zero = members.peek()?.identity();
        let sum = members.inspect(|_| n += 1).fold(zero, Self::absorb);
        Some(sum.divide(n))
    }
}
