use std::fmt::{Debug, Display};

/// Abstracts the payload a detector attaches to each emitted event.
pub(crate) trait EventData: Default + Debug + Clone + Display + PartialEq {}
