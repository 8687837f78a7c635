use super::lloyd::admit;
use super::nearest;
use crate::Energy;
use crate::KMeansError;
use crate::Point;
use rayon::prelude::*;

/// Immutable result of a training run: the centroid list, indexed `0..k`.
///
/// The default value is the untrained model with no centroids, which every
/// assignment rejects with [`KMeansError::ModelNotTrained`]. Models built
/// from a centroid list with [`From`] report zero iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel<P> {
    /// Learned centroids, indexed by cluster.
    kmeans: Vec<P>,
    /// Refinement passes the run needed.
    iterations: usize,
    /// Total centroid movement of the final pass.
    movement: Energy,
}

impl<P> TrainedModel<P> {
    pub(crate) fn new(kmeans: Vec<P>, iterations: usize, movement: Energy) -> Self {
        Self {
            kmeans,
            iterations,
            movement,
        }
    }
    pub fn centroids(&self) -> &[P] {
        &self.kmeans
    }
    /// Centroid of cluster `j`.
    pub fn centroid(&self, j: usize) -> Option<&P> {
        self.kmeans.get(j)
    }
    pub fn k(&self) -> usize {
        self.kmeans.len()
    }
    pub fn is_trained(&self) -> bool {
        !self.kmeans.is_empty()
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn movement(&self) -> Energy {
        self.movement
    }
}

impl<P: Point> TrainedModel<P> {
    /// Dimension shared by the centroids, if any exist.
    pub fn dimension(&self) -> Option<usize> {
        self.kmeans.first().map(P::dimension)
    }

    /// Nearest centroid index and distance.
    pub fn nearest(&self, x: &P) -> Result<(usize, Energy), KMeansError> {
        self.admit(x, 0)?;
        nearest(x, &self.kmeans).ok_or(KMeansError::ModelNotTrained)
    }

    /// Root-mean-square distance from each point to its nearest centroid,
    /// 0 for an empty batch.
    pub fn rms(&self, points: &[P]) -> Result<Energy, KMeansError> {
        if !self.is_trained() {
            return Err(KMeansError::ModelNotTrained);
        }
        for (index, x) in points.iter().enumerate() {
            self.admit(x, index)?;
        }
        if points.is_empty() {
            return Ok(0.);
        }
        Ok((points
            .par_iter()
            .filter_map(|x| nearest(x, &self.kmeans))
            .map(|(_, d)| d * d)
            .sum::<Energy>()
            / points.len() as Energy)
            .sqrt())
    }

    /// Checks that `x`, found at position `index` of its batch, can be assigned.
    pub(crate) fn admit(&self, x: &P, index: usize) -> Result<(), KMeansError> {
        match self.dimension() {
            None => Err(KMeansError::ModelNotTrained),
            Some(expected) => admit(x, expected, index),
        }
    }
}

impl<P> Default for TrainedModel<P> {
    fn default() -> Self {
        Self::new(Vec::new(), 0, 0.)
    }
}

impl<P> From<Vec<P>> for TrainedModel<P> {
    fn from(kmeans: Vec<P>) -> Self {
        Self::new(kmeans, 0, 0.)
    }
}
