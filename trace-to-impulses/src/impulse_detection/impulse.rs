use super::Real;
use forceplate_common::Sample;
use std::fmt::Display;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub(crate) struct TimeValue {
    pub(crate) time: Real,
    pub(crate) value: Real,
}

impl Display for TimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{0},{1}", self.time, self.value))
    }
}

/// A positive impulse: the dominant maximum of a segment together with the
/// trimmed decay-then-rise tail that follows it.
#[derive(Default, Clone, Debug, PartialEq)]
pub(crate) struct Impulse {
    pub(crate) peak: Sample,
    pub(crate) tail: Vec<TimeValue>,
}

impl Impulse {
    pub(crate) fn tail_span(&self) -> Option<(Real, Real)> {
        Some((self.tail.first()?.time, self.tail.last()?.time))
    }
}

impl Display for Impulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (first, last) = self.tail_span().unwrap_or_default();
        f.write_fmt(format_args!(
            "{0},{1},{2},{3},{4}",
            self.peak.time,
            self.peak.force,
            self.tail.len(),
            first,
            last
        ))
    }
}
