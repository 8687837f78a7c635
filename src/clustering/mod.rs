//! Lloyd's k-means: training, nearest-centroid search, and assignment.
//!
//! ## Pipeline
//!
//! 1. **Seed** — [`reservoir`] samples k input points as initial centroids
//! 2. **Refine** — [`KMeans::train`] alternates assignment and averaging
//!    until total centroid movement drops to the convergence distance
//! 3. **Assign** — [`Assigner`] buckets points under a [`TrainedModel`]
pub mod assigner;
pub use assigner::*;

pub mod clusters;
pub use clusters::*;

pub mod lloyd;
pub use lloyd::*;

pub mod model;
pub use model::*;

pub mod nearest;
pub use nearest::*;

pub mod reservoir;
pub use reservoir::*;

pub mod vacancy;
pub use vacancy::*;
