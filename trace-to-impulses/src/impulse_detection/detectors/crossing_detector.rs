use super::super::{Detector, EventData, Real, TracePoint};
use std::fmt::Display;
use std::marker::PhantomData;

#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) struct Data {}

impl Display for Data {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl EventData for Data {}

#[derive(Default, Debug, Clone)]
pub(crate) struct CrossingSettings {
    pub(crate) baseline: Real,
    pub(crate) min_meantime: Real,
}

pub(crate) type CrossingEvent = (Real, Data);

/// Detects debounced crossings of the baseline. A crossing requires the two
/// consecutive forces to strictly straddle the baseline (touching it is
/// never a crossing) and is placed at the midpoint of their times. The
/// debounce seed is time zero; it is compared against but never emitted.
#[derive(Default, Clone)]
pub(crate) struct BoundaryDetector<P>
where
    P: TracePoint<Time = Real, Value = Real> + Default,
{
    settings: CrossingSettings,
    prev: Option<(Real, Real)>,
    last_boundary: Real,
    phantom: PhantomData<P>,
}

impl<P> BoundaryDetector<P>
where
    P: TracePoint<Time = Real, Value = Real> + Default,
{
    pub(crate) fn new(settings: &CrossingSettings) -> Self {
        Self {
            settings: settings.clone(),
            ..Default::default()
        }
    }
}

impl<P> Detector for BoundaryDetector<P>
where
    P: TracePoint<Time = Real, Value = Real> + Default,
{
    type TracePointType = P;
    type EventPointType = CrossingEvent;

    fn signal(&mut self, time: Real, value: Real) -> Option<CrossingEvent> {
        let baseline = self.settings.baseline;
        let (prev_time, prev_value) = self.prev.replace((time, value))?;

        let straddles = (prev_value < baseline && baseline < value)
            || (prev_value > baseline && baseline > value);
        if !straddles {
            return None;
        }

        let candidate = (prev_time + time) / 2.0;
        if candidate - self.last_boundary > self.settings.min_meantime {
            self.last_boundary = candidate;
            Some((candidate, Data {}))
        } else {
            None
        }
    }
}
