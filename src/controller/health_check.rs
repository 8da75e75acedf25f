use axum::{debug_handler, response::Response};

use crate::Result;

use super::format;

#[debug_handler]
pub async fn health_check() -> Result<Response> {
    format::empty()
}
