//! Clustering Playground Binary
//!
//! Scatters points around random blob centers, trains a model on them,
//! and prints the discovered centroids with their cluster sizes.

use clap::Parser;
use kmeans::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3, help = "Number of centroids to discover")]
    clusters: usize,
    #[arg(short, long, default_value_t = 300, help = "Number of points to generate")]
    points: usize,
    #[arg(short, long, default_value_t = 2, help = "Dimension of every point")]
    dimension: usize,
    #[arg(long, default_value_t = 1.0, help = "Maximum offset of a point from its blob center")]
    spread: f64,
    #[arg(long, default_value_t = KMEANS_CONVERGE_DISTANCE, help = "Total centroid movement that ends training")]
    converge: Energy,
    #[arg(long, default_value_t = KMEANS_MAX_ITERATIONS, help = "Refinement passes before giving up")]
    iterations: usize,
    #[arg(long, help = "Seed for data generation and initialization")]
    seed: Option<u64>,
    #[arg(short, long, help = "Log every refinement pass")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("{:<32}{:<32}", "playground seed", seed);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let ref points = scatter(&args, rng);
    let model = KMeans::new(args.clusters)?
        .with_max_iterations(args.iterations)?
        .train(points, args.converge, rng)?;
    log::info!("{:<32}{:<32}", "playground rms", model.rms(points)?);
    let mut assigner = Assigner::new(&model);
    let clusters = assigner.fit_batch(points.iter().cloned())?;
    for (j, members) in clusters.iter() {
        let centroid = model.centroid(j).ok_or(KMeansError::ModelNotTrained)?;
        println!("{:>4} {:>8} {:.3}", j, members.len(), centroid);
    }
    Ok(())
}

/// Points spread uniformly around `clusters` random centers in [0, 10)^d.
fn scatter(args: &Args, rng: &mut SmallRng) -> Vec<Vector> {
    let centers = (0..args.clusters.max(1))
        .map(|_| Vector::random(args.dimension, rng) / 0.1)
        .collect::<Vec<Vector>>();
    (0..args.points)
        .map(|i| &centers[i % centers.len()])
        .map(|c| {
            c.components()
                .iter()
                .map(|x| x + rng.random_range(-args.spread.abs()..=args.spread.abs()))
                .collect::<Vector>()
        })
        .collect()
}
