use super::TrainedModel;
use super::Vacancy;
use super::nearest;
use super::reservoir;
use crate::Energy;
use crate::KMEANS_MAX_ITERATIONS;
use crate::KMEANS_MIN_CLUSTER_COUNT;
use crate::KMeansError;
use crate::Point;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Training configuration for Lloyd's k-means.
///
/// The centroid count is fixed at construction and is at least two. Each
/// call to [`KMeans::train`] is independent and yields a fresh
/// [`TrainedModel`]; a failed call yields nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeans {
    /// Number of centroids.
    k: usize,
    /// Refinement passes allowed before giving up.
    t: usize,
    /// Handling of centroids that attract no points.
    vacancy: Vacancy,
}

impl KMeans {
    pub fn new(k: usize) -> Result<Self, KMeansError> {
        if k < KMEANS_MIN_CLUSTER_COUNT {
            return Err(KMeansError::InvalidConfiguration(format!(
                "centroid count must be at least {}, got {}",
                KMEANS_MIN_CLUSTER_COUNT, k
            )));
        }
        Ok(Self {
            k,
            t: KMEANS_MAX_ITERATIONS,
            vacancy: Vacancy::default(),
        })
    }
    pub fn with_max_iterations(self, t: usize) -> Result<Self, KMeansError> {
        match t {
            0 => Err(KMeansError::InvalidConfiguration(
                "max iterations must be positive".to_string(),
            )),
            t => Ok(Self { t, ..self }),
        }
    }
    pub fn with_vacancy(self, vacancy: Vacancy) -> Self {
        Self { vacancy, ..self }
    }

    pub fn k(&self) -> usize {
        self.k
    }
    pub fn max_iterations(&self) -> usize {
        self.t
    }
    pub fn vacancy(&self) -> Vacancy {
        self.vacancy
    }

    /// [`KMeans::train`] with a `SmallRng` seeded from `seed`.
    pub fn train_seeded<P: Point>(
        &self,
        points: &[P],
        converge: Energy,
        seed: u64,
    ) -> Result<TrainedModel<P>, KMeansError> {
        self.train(points, converge, &mut SmallRng::seed_from_u64(seed))
    }

    /// Discovers `k` centroids for `points`.
    ///
    /// Seeds the centroids with a reservoir sample drawn from `rng`, then
    /// repeats assign-and-average passes until the summed distance the
    /// centroids moved in one pass is at most `converge`. At least one pass
    /// always runs.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` when `converge` is not finite and positive
    /// - `InvalidSampleSize` when there are fewer distinct points than centroids
    /// - `DimensionMismatch` when points disagree on dimension
    /// - `InvalidConfiguration` when a point has a non-finite coordinate
    /// - `EmptyCluster` when a centroid empties under [`Vacancy::Fail`]
    /// - `NotConverged` when the iteration cap runs out
    pub fn train<P, R>(
        &self,
        points: &[P],
        converge: Energy,
        rng: &mut R,
    ) -> Result<TrainedModel<P>, KMeansError>
    where
        P: Point,
        R: Rng + ?Sized,
    {
        self.validate(points, converge)?;
        log::info!("{:<32}{:<32}", "kmeans initializing", self.k);
        let kmeans = reservoir(points.iter(), self.k, rng)?
            .into_iter()
            .cloned()
            .collect::<Vec<P>>();
        let mut lloyd = Lloyd {
            points,
            kmeans,
            vacancy: self.vacancy,
        };
        log::info!("{:<32}{:<32}", "kmeans iterating", points.len());
        let mut movement = Energy::INFINITY;
        for t in 1..=self.t {
            movement = lloyd.step()?;
            log::debug!("{:3} {:>16.6}", t, movement);
            if movement <= converge {
                log::info!("{:<32}{:<32}", "kmeans converged", t);
                return Ok(TrainedModel::new(lloyd.kmeans, t, movement));
            }
        }
        log::warn!(
            "{:<32}{:<32}",
            "kmeans exhausted iterations",
            format!("{:.6} > {:.6}", movement, converge)
        );
        Err(KMeansError::NotConverged {
            iterations: self.t,
            movement,
        })
    }

    fn validate<P: Point>(&self, points: &[P], converge: Energy) -> Result<(), KMeansError> {
        if !(converge.is_finite() && converge > 0.) {
            return Err(KMeansError::InvalidConfiguration(format!(
                "convergence distance must be finite and positive, got {}",
                converge
            )));
        }
        if points.len() < self.k {
            return Err(KMeansError::InvalidSampleSize {
                requested: self.k,
                available: points.len(),
            });
        }
        let expected = points[0].dimension();
        for (index, x) in points.iter().enumerate() {
            admit(x, expected, index)?;
        }
        match distinct(points, self.k) {
            n if n < self.k => Err(KMeansError::InvalidSampleSize {
                requested: self.k,
                available: n,
            }),
            _ => Ok(()),
        }
    }
}

/// Checks that `x`, at position `index` of its batch, has dimension
/// `expected` and only finite coordinates.
pub(crate) fn admit<P: Point>(x: &P, expected: usize, index: usize) -> Result<(), KMeansError> {
    if x.dimension() != expected {
        return Err(KMeansError::DimensionMismatch {
            expected,
            found: x.dimension(),
            index,
        });
    }
    match x.is_finite() {
        true => Ok(()),
        false => Err(KMeansError::InvalidConfiguration(format!(
            "vector {} has non-finite coordinates",
            index
        ))),
    }
}

/// Number of distinct points, counting no further than `limit`.
///
/// Each point is compared against at most `limit - 1` representatives, so
/// the scan costs O(n * limit) distance calls.
fn distinct<P: Point>(points: &[P], limit: usize) -> usize {
    let mut seen = Vec::<&P>::with_capacity(limit);
    for x in points {
        if seen.len() >= limit {
            break;
        }
        if seen.iter().all(|y| x.distance(y) > 0.) {
            seen.push(x);
        }
    }
    seen.len()
}

/// State of one training run between refinement passes.
struct Lloyd<'a, P> {
    points: &'a [P],
    kmeans: Vec<P>,
    vacancy: Vacancy,
}

impl<P: Point> Lloyd<'_, P> {
    /// Nearest centroid index for every point.
    fn neighbors(&self) -> Vec<usize> {
        self.points
            .par_iter()
            .map(|x| nearest(x, &self.kmeans).map_or(0, |(j, _)| j))
            .collect()
    }

    /// Mean of each centroid's group, in centroid order.
    fn centroids(&self, neighbors: &[usize]) -> Result<Vec<P>, KMeansError> {
        let mut groups = vec![Vec::new(); self.kmeans.len()];
        self.points
            .iter()
            .zip(neighbors)
            .for_each(|(x, j)| groups[*j].push(x));
        groups
            .into_iter()
            .enumerate()
            .map(|(j, members)| match P::mean(members) {
                Some(mean) => Ok(mean),
                None => self.vacancy.vacate(j, &self.kmeans[j]),
            })
            .collect()
    }

    /// Summed distance each centroid travels to its replacement.
    fn drift(&self, news: &[P]) -> Energy {
        self.kmeans
            .iter()
            .zip(news)
            .map(|(old, new)| old.distance(new))
            .sum()
    }

    /// One assign-and-average pass. Returns the total centroid movement.
    fn step(&mut self) -> Result<Energy, KMeansError> {
        let neighbors = self.neighbors();
        let news = self.centroids(&neighbors)?;
        let movement = self.drift(&news);
        self.kmeans = news;
        Ok(movement)
    }
}
