//! Human-readable and JSON delay reports.
//!
//! [`DelayReport::build`] runs every aggregate once over a loaded table; the result renders as
//! text through [`std::fmt::Display`] or as JSON through [`DelayReport::to_json`].

use std::fmt;

use serde::Serialize;

use crate::processing::{
    AirlineStats, DEFAULT_DELAY_THRESHOLD, DEFAULT_SAMPLE_LIMIT, DelayBreakdown, DelayStats, PerformanceVerdict,
    ReduceOp, airline_stats, delay_stats, delayed_shipments, overall_stats, partition_by_delay, reduce, sample,
};
use crate::types::{ShipmentRecord, ShipmentTable};

/// Airlines reported on when none are configured.
pub const DEFAULT_AIRLINES: [&str; 3] = ["AF", "KL", "DL"];

/// Options controlling report content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of leading records shown as a sample.
    pub sample_limit: usize,
    /// Airline codes to report on, in output order. Codes without data are omitted.
    pub airlines: Vec<String>,
    /// Delays strictly above this count as delayed.
    pub delay_threshold: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            airlines: DEFAULT_AIRLINES.iter().map(|s| s.to_string()).collect(),
            delay_threshold: DEFAULT_DELAY_THRESHOLD,
        }
    }
}

/// A fully computed report over one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelayReport<'a> {
    pub source: String,
    pub total_shipments: usize,
    pub sample_limit: usize,
    pub sample: &'a [ShipmentRecord],
    pub overall: Option<DelayStats>,
    pub breakdown: DelayBreakdown,
    /// Stats over the delayed shipments only.
    pub delayed_stats: Option<DelayStats>,
    /// Sum of delays over the delayed shipments (`None` when nothing is delayed).
    pub minutes_late: Option<i64>,
    pub airlines: Vec<AirlineStats>,
    pub verdict: Option<PerformanceVerdict>,
}

impl<'a> DelayReport<'a> {
    /// Compute the report. `source` is only used as a label (usually the input path).
    pub fn build(source: impl Into<String>, table: &'a ShipmentTable, options: &ReportOptions) -> Self {
        let overall = overall_stats(table);
        let delayed = delayed_shipments(table, options.delay_threshold);
        Self {
            source: source.into(),
            total_shipments: table.row_count(),
            sample_limit: options.sample_limit,
            sample: sample(table, options.sample_limit),
            overall,
            breakdown: partition_by_delay(table, options.delay_threshold),
            delayed_stats: delay_stats(delayed.iter().copied()),
            minutes_late: reduce(delayed.iter().copied(), ReduceOp::Sum),
            airlines: options
                .airlines
                .iter()
                .filter_map(|code| airline_stats(table, code))
                .collect(),
            verdict: overall.map(|s| PerformanceVerdict::from_average(s.avg_delay)),
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DelayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Air Cargo Delay Analyzer ===")?;
        writeln!(f, "Loaded {} shipments from {}", self.total_shipments, self.source)?;

        writeln!(f, "\nShowing first {} shipments (sample):", self.sample_limit)?;
        for s in self.sample {
            writeln!(
                f,
                "- ID {} | Airline {} | {} → {} | Delay: {} min",
                s.shipment_id, s.airline, s.origin, s.destination, s.delay_minutes
            )?;
        }

        match &self.overall {
            Some(stats) => {
                writeln!(f, "\nOverall Delay Statistics:")?;
                writeln!(f, "- Total Shipments: {}", stats.count)?;
                writeln!(f, "- Minimum Delay:   {} minutes", stats.min_delay)?;
                writeln!(f, "- Maximum Delay:   {} minutes", stats.max_delay)?;
                writeln!(f, "- Average Delay:   {:.2} minutes", stats.avg_delay)?;
            }
            None => writeln!(f, "No data found for statistics.")?,
        }

        writeln!(f, "\nDelay Breakdown:")?;
        writeln!(
            f,
            "- Delayed Shipments (delay > {}): {}",
            self.breakdown.threshold, self.breakdown.delayed
        )?;
        writeln!(f, "- On-Time / Early Shipments:     {}", self.breakdown.on_time_or_early)?;
        if let Some(stats) = &self.delayed_stats {
            writeln!(f, "- Average Delay (delayed only):  {:.2} minutes", stats.avg_delay)?;
        }
        if let Some(total) = self.minutes_late {
            writeln!(f, "- Total Minutes Late:            {total}")?;
        }

        for a in &self.airlines {
            writeln!(f, "\nAirline {} Stats:", a.airline)?;
            writeln!(f, "- Shipments: {}", a.count)?;
            writeln!(f, "- Average Delay: {:.2} minutes", a.avg_delay)?;
        }

        if let Some(verdict) = self.verdict {
            writeln!(f, "\nPerformance Summary:")?;
            writeln!(f, "Overall performance: {}", verdict.summary())?;
        }

        writeln!(f, "\nAnalysis complete.")
    }
}
