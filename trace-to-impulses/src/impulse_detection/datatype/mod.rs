use super::Real;
use std::fmt::{Debug, Display};

pub(crate) mod eventdata;
pub(crate) mod eventpoint;
pub(crate) mod tracepoint;

pub(crate) use eventdata::EventData;
pub(crate) use eventpoint::EventPoint;
pub(crate) use tracepoint::TracePoint;

/// This trait abstracts any type used as a time variable
pub(crate) trait Temporal: Default + Copy + Debug + Display + PartialEq {}

impl Temporal for Real {}

/// This trait abstracts any type used as a signal value
pub(crate) trait TraceValue: Default + Clone + Debug + Display + PartialEq {}

impl TraceValue for Real {}
