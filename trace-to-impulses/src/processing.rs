use crate::impulse_detection::{
    EventFilter, EventPoint, Impulse, Real, crossing_detector::BoundaryDetector,
    extrema::find_extrema, partition::Segment, partition::partition, tail::trace_impulse_tail,
    trim::trim_outliers,
};
use crate::parameters::DetectionParameters;
use forceplate_common::{Sample, Trace};

/// Everything the pipeline extracts from one trace. Each stage consumes the
/// complete output of the previous one; nothing is shared or mutated across
/// stages.
#[derive(Default, Debug)]
pub(crate) struct Analysis {
    pub(crate) boundaries: Vec<Real>,
    pub(crate) segments: Vec<Segment>,
    pub(crate) minimums: Vec<Sample>,
    pub(crate) maximums: Vec<Sample>,
    pub(crate) impulses: Vec<Impulse>,
}

pub(crate) fn process(trace: &Trace, parameters: &DetectionParameters) -> Analysis {
    let settings = parameters.crossing_settings();
    let boundaries: Vec<Real> = trace
        .iter()
        .events(BoundaryDetector::new(&settings))
        .map(|event| event.get_time())
        .collect();

    let segments = partition(trace, &boundaries);
    let (minimums, maximums) = find_extrema(&segments);

    let impulses: Vec<Impulse> = maximums
        .iter()
        .map(|&peak| Impulse {
            peak,
            tail: trim_outliers(
                trace_impulse_tail(trace, peak.index),
                parameters.max_std_dev,
            ),
        })
        .collect();

    tracing::info!(
        "Found {0} boundaries, {1} minimums, {2} maximums, {3} impulses",
        boundaries.len(),
        minimums.len(),
        maximums.len(),
        impulses.len()
    );

    Analysis {
        boundaries,
        segments,
        minimums,
        maximums,
        impulses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters() -> DetectionParameters {
        DetectionParameters {
            baseline: 0.0,
            min_meantime: 0.3,
            max_std_dev: 0.05,
        }
    }

    #[test]
    fn square_pulse_round_trip() {
        let trace = Trace::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![-1.0, -1.0, 2.0, 2.0, -1.0, -1.0],
        );
        let analysis = process(&trace, &parameters());

        assert_eq!(analysis.boundaries, vec![1.5, 3.5]);
        assert_eq!(analysis.segments.len(), 1);
        assert_eq!(
            analysis.segments[0]
                .samples
                .iter()
                .map(|s| s.force)
                .collect::<Vec<_>>(),
            vec![2.0, 2.0]
        );

        // The plateau's first sample is the retained maximum; no segment has
        // a dominant negative extremum, so there are no minimums.
        assert!(analysis.minimums.is_empty());
        assert_eq!(analysis.maximums.len(), 1);
        assert_eq!(
            analysis.maximums[0],
            Sample {
                time: 2.0,
                force: 2.0,
                index: 2
            }
        );
        assert_eq!(analysis.impulses.len(), 1);
        assert_eq!(analysis.impulses[0].peak.index, 2);
    }

    #[test]
    fn empty_trace_flows_through_every_stage() {
        let analysis = process(&Trace::default(), &parameters());
        assert!(analysis.boundaries.is_empty());
        assert!(analysis.segments.is_empty());
        assert!(analysis.minimums.is_empty());
        assert!(analysis.maximums.is_empty());
        assert!(analysis.impulses.is_empty());
    }

    #[test]
    fn impulse_tails_are_traced_and_trimmed() {
        // One dominant peak at t=2; its decline bottoms out at 0.05 and the
        // following bump rises above that floor before dropping back.
        let times: Vec<Real> = (0..12).map(|i| i as Real).collect();
        let forces = vec![
            -0.5, -0.5, 3.0, 1.0, 0.05, 0.5, 0.52, 0.51, 0.05, -0.5, -0.5, -0.5,
        ];
        let trace = Trace::new(times, forces);
        let parameters = DetectionParameters {
            baseline: 0.0,
            min_meantime: 0.1,
            max_std_dev: 0.05,
        };
        let analysis = process(&trace, &parameters);

        assert_eq!(analysis.maximums.len(), 1);
        assert_eq!(analysis.maximums[0].index, 2);
        let tail = &analysis.impulses[0].tail;
        assert_eq!(
            tail.iter().map(|point| point.value).collect::<Vec<_>>(),
            vec![0.5, 0.52, 0.51]
        );
    }
}
