use axum::{extract::State, response::Html, Form, Json};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

use crate::{
    calculator::{self, CostInputs, CostReport},
    error::AppError,
    handlers::AppState,
    metrics,
    view::{self, EchoedInputs},
};

const REPORT_ENDPOINT: &str = "/report";
const API_REPORT_ENDPOINT: &str = "/api/report";

/// Handle POST /report
/// Returns the rendered HTML report
pub async fn handle_report(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let start = Instant::now();

    let inputs = parse_inputs(&form)?;
    let report = calculate(&inputs);

    let config = state.config.load();
    let echoed = EchoedInputs::from(&inputs);
    let html = view::render_report(&config.report, &echoed, &report)?;

    metrics::record_report(REPORT_ENDPOINT);
    metrics::record_duration(REPORT_ENDPOINT, start.elapsed());

    Ok(Html(html))
}

/// Handle POST /api/report
/// Same inputs as the HTML form, returns the report as JSON
pub async fn handle_api_report(
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<CostReport>, AppError> {
    let start = Instant::now();

    let inputs = parse_inputs(&form)?;
    let report = calculate(&inputs);

    metrics::record_report(API_REPORT_ENDPOINT);
    metrics::record_duration(API_REPORT_ENDPOINT, start.elapsed());

    Ok(Json(report))
}

fn parse_inputs(form: &HashMap<String, String>) -> Result<CostInputs, AppError> {
    CostInputs::from_form(form).map_err(|err| {
        warn!(field = err.field, value = %err.value, "Rejected non-numeric input");
        metrics::record_invalid_input(err.field);
        AppError::from(err)
    })
}

fn calculate(inputs: &CostInputs) -> CostReport {
    let report = calculator::calculate(inputs);

    debug!(
        total_human_annual = report.total_human_annual,
        total_ai_y1 = report.total_ai_y1,
        roi_percentage = report.roi_percentage,
        payback = %report.payback_month,
        "Computed cost comparison"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use arc_swap::ArcSwap;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ArcSwap::from_pointee(Config::default())))
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_handle_report_renders_html() {
        let result = handle_report(
            State(create_test_state()),
            Form(form(&[("salary_monthly", "2500"), ("setup_fee", "5000")])),
        )
        .await;

        let Html(body) = result.unwrap();
        assert!(body.contains("R$ 50.227,50"));
    }

    #[tokio::test]
    async fn test_handle_report_rejects_bad_field() {
        let result = handle_report(
            State(create_test_state()),
            Form(form(&[("num_agents", "dez")])),
        )
        .await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_api_report_uses_defaults() {
        let Json(report) = handle_api_report(Form(HashMap::new())).await.unwrap();
        assert_eq!(report.total_human_annual, 0.0);
        assert_eq!(report.roi_percentage, 0.0);
        assert_eq!(report.payback_month.to_string(), "Immediate");
    }
}
