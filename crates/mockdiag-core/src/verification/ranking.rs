//! Ranking and truncation of scored candidates

use std::cmp::Ordering;

/// How many near misses a diagnostic reports
pub const NEAR_MISS_COUNT: usize = 3;

/// Sort candidates with `compare` and keep the best
/// `min(NEAR_MISS_COUNT, candidate_count)`.
pub fn sort_and_truncate<T, F>(
    candidates: impl IntoIterator<Item = T>,
    candidate_count: usize,
    compare: F,
) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    nearest(candidates, NEAR_MISS_COUNT.min(candidate_count), compare)
}

/// Sort candidates with `compare` and keep at most `limit`.
///
/// Ties under `compare` are broken by position in `candidates`, so equal
/// candidates come out in the order they went in regardless of the sort
/// algorithm.
pub fn nearest<T, F>(candidates: impl IntoIterator<Item = T>, limit: usize, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut indexed: Vec<(usize, T)> = candidates.into_iter().enumerate().collect();

    indexed.sort_unstable_by(|(idx_a, a), (idx_b, b)| {
        compare(a, b).then_with(|| idx_a.cmp(idx_b))
    });

    indexed.truncate(limit);
    indexed.into_iter().map(|(_, candidate)| candidate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn by_distance(a: &(&str, f64), b: &(&str, f64)) -> Ordering {
        a.1.total_cmp(&b.1)
    }

    fn rank(distances: &[f64]) -> Vec<f64> {
        let candidates: Vec<(&str, f64)> = distances.iter().map(|d| ("c", *d)).collect();
        sort_and_truncate(candidates, distances.len(), by_distance)
            .into_iter()
            .map(|(_, d)| d)
            .collect()
    }

    #[test]
    fn test_keeps_three_closest() {
        assert_eq!(rank(&[4.0, 1.0, 0.0, 3.0, 2.0]), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_fewer_than_three() {
        assert_eq!(rank(&[5.0, 2.0]), vec![2.0, 5.0]);
    }

    #[test]
    fn test_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![("a", 3.0), ("b", 3.0), ("c", 1.0), ("d", 3.0)];
        let ranked = sort_and_truncate(candidates, 4, by_distance);
        assert_eq!(ranked, vec![("c", 1.0), ("a", 3.0), ("b", 3.0)]);
    }

    #[test]
    fn test_all_tied_keeps_first_three() {
        let candidates: Vec<(&str, f64)> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|label| (*label, 0.5))
            .collect();
        let labels: Vec<&str> = sort_and_truncate(candidates, 5, by_distance)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_candidate_count_caps_result() {
        let candidates = vec![("a", 2.0), ("b", 1.0), ("c", 0.0)];
        let ranked = sort_and_truncate(candidates, 1, by_distance);
        assert_eq!(ranked, vec![("c", 0.0)]);
    }

    #[test]
    fn test_never_more_than_supplied() {
        let candidates = vec![("a", 2.0)];
        assert_eq!(sort_and_truncate(candidates, 10, by_distance).len(), 1);
    }

    #[test]
    fn test_length_is_min_of_three_and_count() {
        for n in 0..8 {
            let distances: Vec<f64> = (0..n).rev().map(|d| d as f64).collect();
            let ranked = rank(&distances);
            assert_eq!(ranked.len(), n.min(NEAR_MISS_COUNT));
            assert!(ranked.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_nearest_with_custom_limit() {
        let ranked = nearest(vec![9, 3, 7, 1, 5], 4, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(ranked, vec![1, 3, 5, 7]);
    }
}
