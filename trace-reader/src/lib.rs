//! Loads force-plate trace files into memory.
//!
//! A trace file is plain text: two header lines of acquisition metadata,
//! then one `<time> <force>` pair per line, whitespace separated, with `,`
//! as the decimal separator.

pub mod loader;

pub use loader::{TraceFile, TraceFileHeader, TraceLoadError, load_trace_file};
