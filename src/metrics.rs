use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "cost_compare_reports_total",
        "Total number of cost comparison reports generated"
    );
    describe_counter!(
        "cost_compare_invalid_input_total",
        "Total number of requests rejected for a non-numeric field"
    );
    describe_histogram!(
        "cost_compare_report_duration_seconds",
        "Time spent computing and rendering a report"
    );
    describe_gauge!("cost_compare_info", "Service version information");

    gauge!("cost_compare_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a generated report
pub fn record_report(endpoint: &'static str) {
    counter!("cost_compare_reports_total", "endpoint" => endpoint).increment(1);
}

/// Record a rejected field
pub fn record_invalid_input(field: &'static str) {
    counter!("cost_compare_invalid_input_total", "field" => field).increment(1);
}

/// Record report duration
pub fn record_duration(endpoint: &'static str, duration: Duration) {
    histogram!("cost_compare_report_duration_seconds", "endpoint" => endpoint)
        .record(duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_metrics() {
        init_metric_descriptions();

        record_report("/report");
        record_invalid_input("salary_monthly");
        record_duration("/api/report", Duration::from_millis(3));

        // No recorder installed: calls are no-ops and must not panic
    }
}
