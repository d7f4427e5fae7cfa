//! Error-analysis reporting.
//!
//! [`ErrorReport`] is the six-column diagnostic row produced when a price is
//! requested with error analysis. Where it goes is decided by a
//! [`ReportSink`]: the console table ([`StdoutSink`]), a structured
//! `tracing` event ([`TracingSink`]) or an in-memory list ([`MemorySink`]).

pub mod sink;
pub mod table;

pub use sink::{MemorySink, ReportSink, StdoutSink, TracingSink};
pub use table::{format_significant, ErrorReport, COLUMN_WIDTH, SIGNIFICANT_DIGITS};
