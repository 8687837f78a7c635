//! Lloyd's k-means clustering over fixed-dimension vectors.
//!
//! Centroids are seeded with a single-pass reservoir sample of the input,
//! refined by alternating nearest-centroid assignment and mean
//! recomputation until the total centroid movement of one pass drops to the
//! convergence distance, and then used to bucket arbitrary points.
//!
//! ## Core Types
//!
//! - [`Vector`] — Euclidean point with value equality and hashing
//! - [`KMeans`] — Validated training configuration
//! - [`TrainedModel`] — Immutable centroid list produced by training
//! - [`Assigner`] — Accumulates points into [`Clusters`] keyed by centroid index
//!
//! ## Example
//!
//! ```
//! use kmeans::*;
//! let points = vec![
//!     Vector::from([0., 0.]),
//!     Vector::from([0., 1.]),
//!     Vector::from([9., 9.]),
//!     Vector::from([9., 10.]),
//! ];
//! let model = KMeans::new(2)?.train_seeded(&points, 0.01, 7)?;
//! let mut assigner = Assigner::new(&model);
//! let clusters = assigner.fit_batch(points.iter().cloned())?;
//! assert_eq!(clusters.count(), 4);
//! # Ok::<(), KMeansError>(())
//! ```
pub mod clustering;
pub mod error;
pub mod space;

pub use clustering::*;
pub use error::*;
pub use space::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Vector components.
pub type Coordinate = f64;
/// Distances, movements, and convergence thresholds.
pub type Energy = f64;

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Smallest number of centroids a model may be configured with.
pub const KMEANS_MIN_CLUSTER_COUNT: usize = 2;
/// Upper bound on Lloyd iterations before a run is reported as divergent.
pub const KMEANS_MAX_ITERATIONS: usize = 1024;
/// Total centroid movement below which the playground considers a run converged.
pub const KMEANS_CONVERGE_DISTANCE: Energy = 0.01;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Installs the playground's loggers. Every refinement pass is recorded in
/// `logs/kmeans-<unix seconds>.log`; the terminal shows only the training
/// lifecycle unless `verbose` asks for the per-pass movement too.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/kmeans-{}.log", time)).expect("create log file"),
    );
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
