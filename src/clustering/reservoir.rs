use crate::KMeansError;
use rand::Rng;

/// Uniform sample of `k` items in a single pass (Algorithm R).
///
/// The first `k` items fill the reservoir; item `i >= k` then replaces a
/// uniformly drawn slot `j` in `[0, i]` whenever `j < k`. Every item ends up
/// in the sample with probability `k / n` using O(k) memory, and the source
/// is consumed exactly once, so streams of unknown length work too.
///
/// Fails with [`KMeansError::InvalidSampleSize`] when `k` is zero or the
/// source yields fewer than `k` items.
pub fn reservoir<T, I, R>(items: I, k: usize, rng: &mut R) -> Result<Vec<T>, KMeansError>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    if k == 0 {
        return Err(KMeansError::InvalidSampleSize {
            requested: k,
            available: items.into_iter().count(),
        });
    }
    let mut n = 0;
    let mut sample = Vec::with_capacity(k);
    for (i, item) in items.into_iter().enumerate() {
        n = i + 1;
        if i < k {
            sample.push(item);
        } else {
            let j = rng.random_range(0..=i);
            if j < k {
                sample[j] = item;
            }
        }
    }
    match n < k {
        true => Err(KMeansError::InvalidSampleSize {
            requested: k,
            available: n,
        }),
        false => Ok(sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn sample_has_exactly_k_distinct_items() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for k in 1..=20 {
            let sample = reservoir(0..20, k, rng).expect("k <= n");
            assert_eq!(sample.len(), k);
            assert!(sample.iter().all(|i| (0..20).contains(i)));
            assert_eq!(sample.iter().collect::<HashSet<_>>().len(), k);
        }
    }

    #[test]
    fn whole_population_is_returned_in_order() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(reservoir(0..5, 5, rng), Ok(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn duplicates_only_come_from_the_source() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let sample = reservoir(vec!['a', 'a', 'b', 'c'], 3, rng).expect("k <= n");
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().filter(|c| **c == 'b').count() <= 1);
        assert!(sample.iter().filter(|c| **c == 'c').count() <= 1);
    }

    #[test]
    fn every_item_is_equally_likely() {
        const TRIALS: usize = 20_000;
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut hits = [0usize; 10];
        for _ in 0..TRIALS {
            for i in reservoir(0..10usize, 3, rng).expect("k <= n") {
                hits[i] += 1;
            }
        }
        let expected = TRIALS as f64 * 3. / 10.;
        for (i, h) in hits.iter().enumerate() {
            let skew = (*h as f64 - expected).abs() / expected;
            assert!(skew < 0.05, "item {} drawn {} times", i, h);
        }
    }

    #[test]
    fn seeded_samples_repeat() {
        let a = reservoir(0..100, 7, &mut SmallRng::seed_from_u64(4));
        let b = reservoir(0..100, 7, &mut SmallRng::seed_from_u64(4));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_impossible_sizes() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(
            reservoir(0..3, 4, rng),
            Err(KMeansError::InvalidSampleSize {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(
            reservoir(0..3, 0, rng),
            Err(KMeansError::InvalidSampleSize {
                requested: 0,
                available: 3
            })
        );
        assert!(reservoir(std::iter::empty::<u8>(), 1, rng).is_err());
    }
}
