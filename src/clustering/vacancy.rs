use crate::KMeansError;

/// What a refinement pass does with a centroid that attracted no points.
///
/// The mean of an empty group is undefined, so the centroid either keeps
/// its previous position for another pass or aborts training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vacancy {
    /// Keep the stale centroid; it contributes no movement this pass.
    #[default]
    Retain,
    /// Abort training with [`KMeansError::EmptyCluster`].
    Fail,
}

impl Vacancy {
    /// Resolves the centroid at index `j` whose group came back empty.
    pub fn vacate<P: Clone>(&self, j: usize, stale: &P) -> Result<P, KMeansError> {
        match self {
            Self::Retain => {
                log::debug!("{:<32}{:<32}", "kmeans retaining empty", j);
                Ok(stale.clone())
            }
            Self::Fail => Err(KMeansError::EmptyCluster(j)),
        }
    }
}
