pub(crate) mod crossing_detector;

use super::{EventPoint, TracePoint};

/// A stateful scanner fed one trace point at a time, emitting an event
/// whenever the feature it watches for completes.
pub(crate) trait Detector: Default + Clone {
    type TracePointType: TracePoint;
    type EventPointType: EventPoint<TimeType = <Self::TracePointType as TracePoint>::Time>;

    fn signal(
        &mut self,
        time: <Self::TracePointType as TracePoint>::Time,
        value: <Self::TracePointType as TracePoint>::Value,
    ) -> Option<Self::EventPointType>;
}
