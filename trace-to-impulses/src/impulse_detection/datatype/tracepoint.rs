use super::{Temporal, TraceValue};
use crate::impulse_detection::Real;
use forceplate_common::Sample;

/// An abstraction of the types fed to the various detectors. To implement
/// TracePoint a type must contain time data and a value.
pub(crate) trait TracePoint: Clone {
    /// The type which represents the time of the data point.
    /// This should be trivially copyable (usually a scalar).
    type Time: Temporal;

    /// The type which contains the value of the data point.
    type Value: TraceValue;

    /// Returns the time of the data point.
    fn get_time(&self) -> Self::Time;

    /// Returns an immutable reference to the value of the data point.
    fn get_value(&self) -> &Self::Value;

    /// Take ownership of a clone of the value without destructing the data point.
    fn clone_value(&self) -> Self::Value {
        self.get_value().clone()
    }
}

/// This is the most basic non-trivial TracePoint type.
/// The first element is the time and the second the value.
impl<X, Y> TracePoint for (X, Y)
where
    X: Temporal,
    Y: TraceValue,
{
    type Time = X;
    type Value = Y;

    fn get_time(&self) -> Self::Time {
        self.0
    }

    fn get_value(&self) -> &Self::Value {
        &self.1
    }
}

/// A recorded force sample is a trace point; the index tags along untouched.
impl TracePoint for Sample {
    type Time = Real;
    type Value = Real;

    fn get_time(&self) -> Self::Time {
        self.time
    }

    fn get_value(&self) -> &Self::Value {
        &self.force
    }
}
