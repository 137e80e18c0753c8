use super::{Real, TimeValue};

/// Population standard deviation of the tail's force values. An empty tail
/// reports infinite spread rather than dividing by zero.
pub(crate) fn force_std_dev(tail: &[TimeValue]) -> Real {
    if tail.is_empty() {
        return Real::INFINITY;
    }
    let count = tail.len() as Real;
    let mean = tail.iter().map(|point| point.value).sum::<Real>() / count;
    let sum_squared_diff = tail
        .iter()
        .map(|point| (point.value - mean).powi(2))
        .sum::<Real>();
    (sum_squared_diff / count).sqrt()
}

/// Symmetric peeling heuristic: while the spread of the tail's force values
/// exceeds `max_std_dev` and more than two points remain, drop the first
/// and last point. The two-point floor is returned even if still over the
/// bound. Assumes outliers concentrate at the edges of the tail; this is
/// not a statistically justified outlier test.
pub(crate) fn trim_outliers(mut tail: Vec<TimeValue>, max_std_dev: Real) -> Vec<TimeValue> {
    if tail.len() < 2 {
        return tail;
    }
    while force_std_dev(&tail) > max_std_dev && tail.len() > 2 {
        tail.pop();
        tail.remove(0);
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn tail(values: &[Real]) -> Vec<TimeValue> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TimeValue {
                time: i as Real,
                value,
            })
            .collect()
    }

    #[test]
    fn empty_tail_has_infinite_spread() {
        assert_eq!(force_std_dev(&[]), Real::INFINITY);
    }

    #[test]
    fn population_std_dev_of_a_known_sample() {
        // Mean 0.5, squared deviations 0.25 each.
        assert_approx_eq!(force_std_dev(&tail(&[0.0, 1.0])), 0.5, 1e-12);
        assert_approx_eq!(force_std_dev(&tail(&[2.0, 2.0, 2.0])), 0.0, 1e-12);
    }

    #[test]
    fn tail_within_bound_is_returned_unchanged() {
        let input = tail(&[0.5, 0.52, 0.51, 0.49]);
        assert_eq!(trim_outliers(input.clone(), 0.05), input);
    }

    #[test]
    fn short_tails_are_returned_unchanged() {
        let input = tail(&[5.0]);
        assert_eq!(trim_outliers(input.clone(), 0.0), input);
        assert!(trim_outliers(Vec::new(), 0.0).is_empty());
    }

    #[test]
    fn edges_are_peeled_until_the_spread_converges() {
        // The outer points carry the spread; one symmetric trim brings the
        // std-dev under the bound.
        let input = tail(&[2.0, 0.5, 0.5, 0.5, -1.0]);
        let trimmed = trim_outliers(input.clone(), 0.05);
        assert_eq!(trimmed, input[1..4].to_vec());
    }

    #[test]
    fn length_reduces_by_two_per_round_with_a_floor_of_two() {
        let input = tail(&[9.0, 7.0, 5.0, 3.0, 1.0, -1.0]);
        let trimmed = trim_outliers(input.clone(), 0.0);
        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed, input[2..4].to_vec());
        // Still over an unsatisfiable bound: the floor is best-effort.
        assert!(force_std_dev(&trimmed) > 0.0);
    }
}
