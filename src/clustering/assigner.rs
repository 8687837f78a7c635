use super::Clusters;
use super::TrainedModel;
use super::nearest;
use crate::KMeansError;
use crate::Point;
use rayon::prelude::*;

/// Buckets points under the nearest centroid of a trained model.
///
/// The assigner owns a [`Clusters`] accumulator that grows with every
/// [`Assigner::fit`] and [`Assigner::fit_batch`] call; nothing resets it.
/// Centroid selection is deterministic, so fitting the same point twice
/// lands it in the same cluster both times.
pub struct Assigner<'a, P> {
    model: &'a TrainedModel<P>,
    clusters: Clusters<P>,
}

impl<'a, P: Point> Assigner<'a, P> {
    /// Starts an empty mapping over `model`.
    pub fn new(model: &'a TrainedModel<P>) -> Self {
        Self::resume(model, Clusters::default())
    }
    /// Continues accumulating into an existing mapping.
    pub fn resume(model: &'a TrainedModel<P>, clusters: Clusters<P>) -> Self {
        Self { model, clusters }
    }

    pub fn model(&self) -> &TrainedModel<P> {
        self.model
    }
    pub fn clusters(&self) -> &Clusters<P> {
        &self.clusters
    }
    pub fn into_clusters(self) -> Clusters<P> {
        self.clusters
    }

    /// Appends `x` to its nearest centroid's members and returns that index.
    pub fn fit(&mut self, x: P) -> Result<usize, KMeansError> {
        let (j, _) = self.model.nearest(&x)?;
        self.clusters.push(j, x);
        Ok(j)
    }

    /// Fits every point in input order and returns the whole accumulated
    /// mapping, including members from earlier calls.
    ///
    /// The batch is validated before anything is appended, so a failing
    /// batch leaves the mapping untouched.
    pub fn fit_batch<I>(&mut self, points: I) -> Result<&Clusters<P>, KMeansError>
    where
        I: IntoIterator<Item = P>,
    {
        if !self.model.is_trained() {
            return Err(KMeansError::ModelNotTrained);
        }
        let points = points.into_iter().collect::<Vec<P>>();
        points
            .iter()
            .enumerate()
            .try_for_each(|(i, x)| self.model.admit(x, i))?;
        let neighbors = points
            .par_iter()
            .map(|x| nearest(x, self.model.centroids()).map_or(0, |(j, _)| j))
            .collect::<Vec<usize>>();
        log::debug!("{:<32}{:<32}", "kmeans assigning", points.len());
        neighbors
            .into_iter()
            .zip(points)
            .for_each(|(j, x)| self.clusters.push(j, x));
        Ok(&self.clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    fn model() -> TrainedModel<Vector> {
        TrainedModel::from(vec![Vector::from([0., 0.]), Vector::from([10., 10.])])
    }

    #[test]
    fn fit_appends_to_nearest() {
        let model = model();
        let mut assigner = Assigner::new(&model);
        assert_eq!(assigner.fit(Vector::from([9., 8.])), Ok(1));
        assert_eq!(assigner.fit(Vector::from([1., 2.])), Ok(0));
        assert_eq!(
            assigner.clusters().members(1),
            Some(&[Vector::from([9., 8.])][..])
        );
    }

    #[test]
    fn fitting_twice_lands_in_the_same_cluster() {
        let model = model();
        let mut assigner = Assigner::new(&model);
        let x = Vector::from([4., 6.]);
        let a = assigner.fit(x.clone()).expect("trained");
        let b = assigner.fit(x.clone()).expect("trained");
        assert_eq!(a, b);
        assert_eq!(assigner.clusters().members(a), Some(&[x.clone(), x][..]));
    }

    #[test]
    fn batches_accumulate_across_calls() {
        let model = model();
        let mut assigner = Assigner::new(&model);
        assigner
            .fit_batch(vec![Vector::from([1., 1.]), Vector::from([11., 9.])])
            .expect("trained");
        let clusters = assigner
            .fit_batch(vec![Vector::from([2., 0.])])
            .expect("trained");
        assert_eq!(clusters.count(), 3);
        assert_eq!(
            clusters.members(0),
            Some(&[Vector::from([1., 1.]), Vector::from([2., 0.])][..])
        );
    }

    #[test]
    fn resumed_mapping_keeps_prior_members() {
        let model = model();
        let mut first = Assigner::new(&model);
        first.fit(Vector::from([0., 1.])).expect("trained");
        let mut second = Assigner::resume(&model, first.into_clusters());
        second.fit(Vector::from([0., 2.])).expect("trained");
        assert_eq!(second.clusters().members(0).map(<[_]>::len), Some(2));
    }

    #[test]
    fn untrained_model_fails_instead_of_ignoring() {
        let model = TrainedModel::<Vector>::default();
        let mut assigner = Assigner::new(&model);
        assert_eq!(
            assigner.fit(Vector::from([1., 1.])),
            Err(KMeansError::ModelNotTrained)
        );
        assert_eq!(
            assigner.fit_batch(Vec::new()).map(|c| c.count()),
            Err(KMeansError::ModelNotTrained)
        );
    }

    #[test]
    fn failing_batch_appends_nothing() {
        let model = model();
        let mut assigner = Assigner::new(&model);
        let batch = vec![Vector::from([1., 1.]), Vector::from([1., 1., 1.])];
        assert_eq!(
            assigner.fit_batch(batch).map(|c| c.count()),
            Err(KMeansError::DimensionMismatch {
                expected: 2,
                found: 3,
                index: 1
            })
        );
        assert!(assigner.clusters().is_empty());
    }

    #[test]
    fn non_finite_points_are_refused() {
        let model = model();
        let mut assigner = Assigner::new(&model);
        assert!(matches!(
            assigner.fit(Vector::from([f64::NAN, 1.])),
            Err(KMeansError::InvalidConfiguration(_))
        ));
        let batch = vec![Vector::from([1., 1.]), Vector::from([f64::INFINITY, 1.])];
        assert!(assigner.fit_batch(batch).is_err());
        assert!(assigner.clusters().is_empty());
    }
}
