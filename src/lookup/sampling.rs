//! Uniform sampling without replacement.

use rand::Rng;

/// Returns `min(count, items.len())` distinct elements of `items`.
///
/// Runs the first `count` steps of a Fisher-Yates shuffle, so every subset
/// and every order is equally likely.
pub fn sample_without_replacement<T, R>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let take = count.min(items.len());
    for i in 0..take {
        let j = rng.random_range(i..items.len());
        items.swap(i, j);
    }
    items.truncate(take);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_distinct_subset() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..20).collect();

        let sample = sample_without_replacement(items.clone(), 5, &mut rng);

        assert_eq!(sample.len(), 5);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(sample.iter().all(|n| items.contains(n)));
    }

    #[test]
    fn test_sample_caps_at_available() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sample = sample_without_replacement(vec![1, 2, 3], 10, &mut rng);
        sample.sort();
        assert_eq!(sample, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_zero_and_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_without_replacement(vec![1, 2], 0, &mut rng).is_empty());
        assert!(sample_without_replacement(Vec::<u8>::new(), 3, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let items: Vec<u32> = (0..50).collect();
        let a = sample_without_replacement(items.clone(), 8, &mut StdRng::seed_from_u64(99));
        let b = sample_without_replacement(items, 8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_element_can_come_first() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let sample = sample_without_replacement(vec![0u8, 1, 2, 3], 1, &mut rng);
            seen.insert(sample[0]);
        }
        assert_eq!(seen.len(), 4);
    }
}
