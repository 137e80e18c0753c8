//! This module provides tools for converting a raw force trace into the
//! features of discrete force impulses: baseline-crossing boundaries,
//! dominant extrema per segment, and the decay-then-rise tail that follows
//! each positive peak.
//!
//! A raw trace takes the form of index-aligned time and force arrays.
//! Typical usage of this module may look like:
//! ```rust
//! let boundaries: Vec<_> = trace
//!     .iter()
//!     .events(BoundaryDetector::new(&settings))  // Registers an event at each
//!     .map(|event| event.get_time())             // debounced baseline crossing,
//!     .collect();                                // interpolated to the midpoint
//! ```

pub(crate) mod datatype;
pub(crate) mod impulse;

pub(crate) mod detectors;
pub(crate) mod extrema;
pub(crate) mod iterators;
pub(crate) mod partition;
pub(crate) mod tail;
pub(crate) mod trim;

pub(crate) use datatype::{EventData, EventPoint, Temporal, TracePoint};
pub(crate) use detectors::{Detector, crossing_detector};
pub(crate) use impulse::{Impulse, TimeValue};
pub(crate) use iterators::{EventFilter, SaveToFileFilter};

pub(crate) type Real = f64;
