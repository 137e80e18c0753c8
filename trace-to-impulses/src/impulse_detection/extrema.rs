use super::partition::Segment;
use forceplate_common::Sample;

/// Classifies the dominant extremum of each segment. The minimum is kept
/// only if it is negative and larger in magnitude than any positive
/// maximum; the maximum only if it is positive and larger in magnitude
/// than any negative minimum. At most one of the two can satisfy its
/// condition, so a segment contributes at most one marker; a segment whose
/// extremes have equal magnitude and opposite sign contributes none. Ties
/// on force keep the earlier sample.
pub(crate) fn find_extrema(segments: &[Segment]) -> (Vec<Sample>, Vec<Sample>) {
    let mut minimums = Vec::new();
    let mut maximums = Vec::new();

    for segment in segments {
        let extremes = segment
            .samples
            .iter()
            .copied()
            .map(|sample| (sample, sample))
            .reduce(|(min, max), (sample, _)| {
                (
                    if sample.force < min.force { sample } else { min },
                    if sample.force > max.force { sample } else { max },
                )
            });
        let Some((min, max)) = extremes else {
            continue;
        };

        if min.force < 0.0 && (max.force <= 0.0 || min.force.abs() > max.force.abs()) {
            minimums.push(min);
        }
        if max.force > 0.0 && (min.force >= 0.0 || max.force.abs() > min.force.abs()) {
            maximums.push(max);
        }
    }

    (minimums, maximums)
}
