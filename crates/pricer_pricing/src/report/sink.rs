//! Destinations for error-analysis reports.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use super::ErrorReport;

/// Receives the error-analysis report of each priced simulation.
///
/// Engines share their sink across threads and clones, hence `Send + Sync`.
pub trait ReportSink: Send + Sync {
    /// Handles one report.
    fn emit(&self, report: &ErrorReport);
}

/// Prints the header and row to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, report: &ErrorReport) {
        println!("{}", report.header());
        println!("{}", report.row());
    }
}

/// Emits each report as a structured `tracing` event at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&self, report: &ErrorReport) {
        info!(
            simulations = report.simulations,
            subintervals = report.subintervals,
            bsm_price = report.bsm_price,
            mc_price = report.mc_price,
            sd = report.standard_deviation,
            se = report.standard_error,
            "Monte Carlo error analysis"
        );
    }
}

/// Keeps every report in memory.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::report::{ErrorReport, MemorySink, ReportSink};
///
/// let sink = MemorySink::new();
/// sink.emit(&ErrorReport {
///     simulations: 10,
///     subintervals: 1,
///     bsm_price: 1.0,
///     mc_price: 1.1,
///     standard_deviation: 0.5,
///     standard_error: 0.16,
/// });
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<ErrorReport>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of every report received so far, oldest first.
    pub fn reports(&self) -> Vec<ErrorReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no report has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &ErrorReport) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*report);
    }
}
