use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::fields::FilledFieldMap;
use super::filler::FormFiller;
use super::FillError;

pub const FILL_ROUTE: &str = "/api/v1/forms/21-0966/fields";

#[derive(Debug, Serialize)]
pub struct FillResponse {
    pub output_file: String,
    pub field_count: usize,
    pub checked_count: usize,
    pub fields: FilledFieldMap,
}

/// Router exposing field expansion over HTTP. Nothing is written server side.
pub fn form_router(filler: Arc<FormFiller>) -> Router {
    Router::new()
        .route(FILL_ROUTE, post(fill_handler))
        .with_state(filler)
}

pub(crate) async fn fill_handler(
    State(filler): State<Arc<FormFiller>>,
    axum::Json(raw): axum::Json<Value>,
) -> Response {
    match filler.prepare(&raw) {
        Ok(form) => {
            let body = FillResponse {
                output_file: form.output_file_name,
                field_count: form.fields.len(),
                checked_count: form.fields.checked_count(),
                fields: form.fields,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(FillError::MalformedInput { path, reason }) => {
            warn!(%path, %reason, "rejected applicant record");
            let payload = json!({
                "error": "malformed input",
                "path": path,
                "reason": reason,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "form fill failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
