//! AWS Lambda handler for wealth projections
//!
//! Accepts a projection request as JSON (numbers or form text) and returns the
//! full projection result, optionally with advisory text.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use wealth_projection::report::{advise_from_env, format_months, FALLBACK_ADVICE};
use wealth_projection::{
    compute_projection, ProjectionError, ProjectionInput, ProjectionResult, RawProjectionInput,
};

/// Request body: projection fields plus handler options
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: RawProjectionInput,

    /// Leave out the month-by-month history to keep the response small
    #[serde(default)]
    pub omit_history: bool,

    /// Include advisory text (falls back to a fixed message)
    #[serde(default)]
    pub advice: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    #[serde(flatten)]
    pub result: ProjectionResult,
    pub time_to_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
    pub execution_time_ms: u64,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(cors(Response::builder())
        .status(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Parse a request body; an empty body is the default request
fn parse_body(body: &str) -> Result<ProjectionRequest, serde_json::Error> {
    if body.trim().is_empty() {
        serde_json::from_str("{}")
    } else {
        serde_json::from_str(body)
    }
}

/// Run the projection a request asks for, dropping the history when requested
fn run_projection(request: &ProjectionRequest) -> (ProjectionInput, ProjectionResult) {
    let input = request.input.to_input();
    let mut result = compute_projection(&input);
    if request.omit_history {
        result.history.clear();
    }
    (input, result)
}

/// Advice off the async workers; a failed task falls back like any advisor failure
async fn fetch_advice(input: ProjectionInput, result: ProjectionResult) -> String {
    match tokio::task::spawn_blocking(move || advise_from_env(&input, &result)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Advice task failed: {}", e);
            FALLBACK_ADVICE.to_string()
        }
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => String::new(),
    };

    let request = match parse_body(&body_str) {
        Ok(r) => r,
        Err(e) => {
            let err = ProjectionError::InvalidRequest(e.to_string());
            warn!("Rejected request: {}", err);
            return error_response(400, &err.to_string());
        }
    };

    let (input, result) = run_projection(&request);

    let advice = if request.advice {
        Some(fetch_advice(input.clone(), result.clone()).await)
    } else {
        None
    };

    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!("Projection {:?} computed in {} ms", input.mode, execution_time_ms);

    let response = ProjectionResponse {
        time_to_target: format_months(result.target_reached_in_months),
        result,
        advice,
        execution_time_ms,
    };

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wealth_projection::{CalculationMode, Horizon};

    #[test]
    fn test_parse_flattened_request() {
        let body = r#"{
            "initialValue": "2000",
            "monthly_contribution": 500,
            "nominal_rate": "0",
            "horizon_count": 14,
            "horizon_unit": "MONTHS",
            "mode": "PROJECT",
            "omit_history": true,
            "advice": true
        }"#;
        let request = parse_body(body).unwrap();
        assert!(request.omit_history);
        assert!(request.advice);

        let input = request.input.to_input();
        assert_eq!(input.initial_capital, 2000.0);
        assert_eq!(input.monthly_contribution, 500.0);
        assert_eq!(input.horizon, Horizon::months(14));
        assert_eq!(input.mode, CalculationMode::Project);
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        let request = parse_body("").unwrap();
        assert!(!request.omit_history);
        assert!(!request.advice);
        assert_eq!(request.input.to_input(), ProjectionInput::default());
    }

    #[test]
    fn test_bad_body_is_rejected() {
        assert!(parse_body("{not json").is_err());
        assert!(parse_body(r#"{"mode": "SOMEDAY"}"#).is_err());
    }

    #[test]
    fn test_omit_history() {
        let mut request = parse_body(r#"{"horizon_count": 14, "horizon_unit": "MONTHS", "mode": "PROJECT"}"#).unwrap();

        let (_, full) = run_projection(&request);
        assert_eq!(full.history.len(), 15);

        request.omit_history = true;
        let (_, trimmed) = run_projection(&request);
        assert!(trimmed.history.is_empty());
        assert_eq!(trimmed.yearly_breakdown.len(), 2);
        assert_eq!(trimmed.final_total, full.final_total);
    }

    #[test]
    fn test_response_flattens_result() {
        let (_, result) = run_projection(&parse_body(r#"{"initial_capital": 0, "monthly_contribution": 1, "nominal_rate": 0, "horizon_count": 1, "horizon_unit": "MONTHS", "mode": "PROJECT"}"#).unwrap());
        let response = ProjectionResponse {
            time_to_target: format_months(result.target_reached_in_months),
            result,
            advice: None,
            execution_time_ms: 0,
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["final_total"], 1.0);
        assert_eq!(json["target_reached_in_months"], serde_json::Value::Null);
        assert_eq!(json["time_to_target"], "not reached");
        assert!(json.get("advice").is_none());
    }
}
