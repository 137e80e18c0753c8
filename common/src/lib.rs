pub type Time = f64;
pub type Force = f64;
pub type SampleIndex = usize;

/// A single point of the recorded force signal, tagged with its position in
/// the original sample arrays so later stages can re-traverse from it.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Time,
    pub force: Force,
    pub index: SampleIndex,
}

/// A fully materialized force-vs-time recording: `times` and `forces` are
/// index-aligned, one element per data line, in file order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Trace {
    times: Vec<Time>,
    forces: Vec<Force>,
}

impl Trace {
    pub fn new(times: Vec<Time>, forces: Vec<Force>) -> Self {
        debug_assert_eq!(times.len(), forces.len());
        Self { times, forces }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[Time] {
        &self.times
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    pub fn get(&self, index: SampleIndex) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            force: *self.forces.get(index)?,
            index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + Clone + '_ {
        self.times
            .iter()
            .zip(self.forces.iter())
            .enumerate()
            .map(|(index, (&time, &force))| Sample { time, force, index })
    }
}

/// Number of rendered plot windows for a trace of `num_samples` samples.
pub fn window_count(num_samples: usize, window_size: usize) -> usize {
    num_samples.div_ceil(window_size)
}

/// Half-open sample range `[begin, end)` of plot window `window`.
pub fn window_range(num_samples: usize, window_size: usize, window: usize) -> (usize, usize) {
    let begin = window * window_size;
    (begin.min(num_samples), (begin + window_size).min(num_samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_count_rounds_up() {
        assert_eq!(window_count(450, 200), 3);
        assert_eq!(window_count(400, 200), 2);
        assert_eq!(window_count(1, 200), 1);
        assert_eq!(window_count(0, 200), 0);
    }

    #[test]
    fn window_ranges_partition_the_trace() {
        assert_eq!(window_range(450, 200, 0), (0, 200));
        assert_eq!(window_range(450, 200, 1), (200, 400));
        assert_eq!(window_range(450, 200, 2), (400, 450));
    }

    #[test]
    fn trace_samples_carry_their_index() {
        let trace = Trace::new(vec![0.5, 1.0, 1.5], vec![-1.0, 2.0, -1.0]);
        let samples: Vec<_> = trace.iter().collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[1],
            Sample {
                time: 1.0,
                force: 2.0,
                index: 1
            }
        );
        assert_eq!(trace.get(2), Some(samples[2]));
        assert_eq!(trace.get(3), None);
    }
}
