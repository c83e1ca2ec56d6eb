use herald_response::{JsonResponse, ResponseError, flagged};
use serde_json::json;

/// Health check handler
pub async fn health_handler() -> Result<JsonResponse, ResponseError> {
    let mut res = JsonResponse::new();
    flagged::ok(&mut res, json!({"status": "ok"}))?;
    Ok(res)
}
