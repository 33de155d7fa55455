use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use va_form_filler::forms::va21_0966::{form_router, schema, FormFiller};

pub(crate) fn with_form_routes(filler: Arc<FormFiller>) -> axum::Router {
    form_router(filler)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/forms/21-0966/schema",
            axum::routing::get(schema_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Lists the attribute → field layout so integrators can see what a record must carry.
pub(crate) async fn schema_endpoint() -> Json<serde_json::Value> {
    let entries: Vec<serde_json::Value> = schema::field_schema()
        .iter()
        .map(|entry| {
            json!({
                "attribute": entry.attribute.path(),
                "targets": entry.rule.targets(),
            })
        })
        .collect();
    Json(json!({ "form": "21-0966", "entries": entries }))
}
