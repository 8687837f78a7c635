use super::Absorb;
use super::Point;
use crate::Coordinate;
use crate::Energy;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Div;
use std::ops::Index;

/// Fixed-length tuple of real coordinates.
///
/// Vectors are immutable values. Equality and hashing compare the bit
/// patterns of the components after folding `-0.0` into `0.0` and every NaN
/// into one canonical NaN, so a `Vector` behaves as a lawful map key: two
/// vectors with identical components are interchangeable.
#[derive(Debug, Clone, Default)]
pub struct Vector(Vec<Coordinate>);

impl Vector {
    /// The origin of a `dimension`-dimensional space.
    pub fn zeros(dimension: usize) -> Self {
        Self(vec![0.; dimension])
    }
    /// Uniformly random vector in the unit hypercube.
    pub fn random<R: rand::Rng>(dimension: usize, rng: &mut R) -> Self {
        (0..dimension).map(|_| rng.random::<Coordinate>()).collect()
    }
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    pub fn components(&self) -> &[Coordinate] {
        &self.0
    }
    /// Euclidean distance, sqrt(Σ (a_i - b_i)²).
    pub fn distance(&self, other: &Self) -> Energy {
        debug_assert_eq!(self.dimension(), other.dimension());
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Energy>()
            .sqrt()
    }

    fn key(c: Coordinate) -> u64 {
        match c {
            c if c.is_nan() => Coordinate::NAN.to_bits(),
            c if c == 0. => 0,
            c => c.to_bits(),
        }
    }
}

impl Add<&Vector> for Vector {
    type Output = Vector;
    fn add(mut self, other: &Vector) -> Vector {
        debug_assert_eq!(self.dimension(), other.dimension());
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a += b);
        self
    }
}

impl Div<Coordinate> for Vector {
    type Output = Vector;
    fn div(mut self, scalar: Coordinate) -> Vector {
        self.0.iter_mut().for_each(|a| *a /= scalar);
        self
    }
}

impl Index<usize> for Vector {
    type Output = Coordinate;
    fn index(&self, i: usize) -> &Coordinate {
        &self.0[i]
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| Self::key(*a) == Self::key(*b))
    }
}
impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.dimension().hash(state);
        self.0.iter().for_each(|c| Self::key(*c).hash(state));
    }
}

impl From<Vec<Coordinate>> for Vector {
    fn from(components: Vec<Coordinate>) -> Self {
        Self(components)
    }
}
impl<const D: usize> From<[Coordinate; D]> for Vector {
    fn from(components: [Coordinate; D]) -> Self {
        Self(components.to_vec())
    }
}
impl From<Vector> for Vec<Coordinate> {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}
impl FromIterator<Coordinate> for Vector {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders as `(x, y, ...)`, honoring a requested precision per component.
impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, c)?,
                None => write!(f, "{}", c)?,
            }
        }
        write!(f, ")")
    }
}

impl Absorb for Vector {
    fn identity(&self) -> Self {
        Self::zeros(self.dimension())
    }
    fn absorb(self, other: &Self) -> Self {
        self + other
    }
}

impl Point for Vector {
    fn dimension(&self) -> usize {
        Vector::dimension(self)
    }
    fn distance(&self, other: &Self) -> Energy {
        Vector::distance(self, other)
    }
    fn divide(self, n: usize) -> Self {
        debug_assert!(n > 0);
        self / n as Coordinate
    }
    fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}
