use serde::Deserialize;

use crate::model::{Constraint, ConstraintSet, Kind, SourceTag};

/// Runtime telemetry fields handed in as a pre-parsed value; the core
/// does no transport or collection of its own.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryReading {
    pub latency_p99: f64,
    pub error_rate: f64,
}

const LATENCY_THRESHOLD_MS: f64 = 100.0;
const ERROR_RATE_THRESHOLD: f64 = 0.01;

/// Deterministic threshold mapping from telemetry fields to Constraints.
pub fn extract(reading: &TelemetryReading) -> ConstraintSet {
    let mut constraints = Vec::new();

    if reading.latency_p99 > LATENCY_THRESHOLD_MS {
        constraints.push(Constraint::new(
            "latency_bound",
            Kind::Performance,
            SourceTag::Telemetry,
            0.95,
            format!("observed p99 latency {}ms exceeds {}ms", reading.latency_p99, LATENCY_THRESHOLD_MS),
        ));
    }

    if reading.error_rate > ERROR_RATE_THRESHOLD {
        constraints.push(Constraint::new(
            "error_rate",
            Kind::Operational,
            SourceTag::Telemetry,
            0.95,
            format!("observed error rate {} exceeds {}", reading.error_rate, ERROR_RATE_THRESHOLD),
        ));
    }

    ConstraintSet::new(constraints)
}
