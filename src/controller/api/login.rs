use axum::{debug_handler, extract::State, response::Response, Json};
use serde_json::Value;

use crate::{
    controller::format,
    domain::{LoginRequest, LoginResult},
    startup::AppState,
    Result,
};

/// `POST /api/login`
///
/// Always answers `200 OK`. A body that is not a JSON object, or whose fields
/// are not strings, is checked the same way as a wrong password.
#[debug_handler]
#[tracing::instrument(name = "Check login", skip_all)]
pub async fn check_login(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Response> {
    let request = body
        .map(|Json(value)| value)
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value::<LoginRequest>(value).ok());
    let result = match request {
        Some(request) => state.checker.check(&request),
        None => LoginResult::invalid_credentials(),
    };
    tracing::debug!(success = result.success, "login checked");
    format::json(result)
}
