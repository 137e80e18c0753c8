use super::Real;
use forceplate_common::{Sample, Trace};
use itertools::Itertools;

/// The samples lying between two consecutive boundaries. Bounds are
/// inclusive at both ends: a sample exactly on a boundary belongs to both
/// neighbouring segments.
#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) struct Segment {
    pub(crate) begin: Real,
    pub(crate) end: Real,
    pub(crate) samples: Vec<Sample>,
}

/// Materializes one segment per consecutive boundary pair, in boundary
/// order. Fewer than two boundaries yield no segments.
pub(crate) fn partition(trace: &Trace, boundaries: &[Real]) -> Vec<Segment> {
    boundaries
        .iter()
        .copied()
        .tuple_windows()
        .map(|(begin, end)| Segment {
            begin,
            end,
            samples: trace
                .iter()
                .filter(|sample| begin <= sample.time && sample.time <= end)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace() -> Trace {
        Trace::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![-1.0, -1.0, 2.0, 2.0, -1.0, -1.0],
        )
    }

    #[test]
    fn consecutive_boundary_pairs_become_segments() {
        let segments = partition(&trace(), &[1.5, 3.5]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].begin, 1.5);
        assert_eq!(segments[0].end, 3.5);
        let indices: Vec<_> = segments[0].samples.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn a_sample_on_a_boundary_belongs_to_both_segments() {
        let segments = partition(&trace(), &[1.0, 3.0, 5.0]);
        assert_eq!(segments.len(), 2);
        let first: Vec<_> = segments[0].samples.iter().map(|s| s.index).collect();
        let second: Vec<_> = segments[1].samples.iter().map(|s| s.index).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![3, 4, 5]);
    }

    #[test]
    fn too_few_boundaries_yield_no_segments() {
        assert!(partition(&trace(), &[]).is_empty());
        assert!(partition(&trace(), &[2.5]).is_empty());
    }
}
