//! Resource HTTP Routes
//!
//! `POST /users`, `POST /books` and `POST /reviews`, nested under `/api` by
//! the server. All three run the same create pipeline; only the kind differs.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use tracing::{error, info, warn};

use crate::observability::{Event, MetricsRegistry};
use crate::resource::{self, CreateError, ResourceKind};
use crate::store::{Record, Store};

use super::errors::{ApiError, ApiResult};
use super::payload::payload_from_body;

// ==================
// Shared State
// ==================

/// Resource state shared across handlers
pub struct ResourceState {
    pub store: Store,
    pub metrics: Arc<MetricsRegistry>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: Store::new(),
            metrics,
        }
    }
}

impl Default for ResourceState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Resource Routes
// ==================

/// Create resource routes
pub fn resource_routes(state: Arc<ResourceState>) -> Router {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/books", post(create_book_handler))
        .route("/reviews", post(create_review_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<ResourceState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Record>)> {
    create_resource(&state, ResourceKind::User, &headers, &body)
}

async fn create_book_handler(
    State(state): State<Arc<ResourceState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Record>)> {
    create_resource(&state, ResourceKind::Book, &headers, &body)
}

async fn create_review_handler(
    State(state): State<Arc<ResourceState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Record>)> {
    create_resource(&state, ResourceKind::Review, &headers, &body)
}

fn create_resource(
    state: &ResourceState,
    kind: ResourceKind,
    headers: &HeaderMap,
    body: &Bytes,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let payload = payload_from_body(headers, body).inspect_err(|err| {
        state.metrics.increment_malformed_bodies();
        warn!(event = %Event::MalformedBody, %kind, error = %err);
    })?;

    match resource::create(&state.store, kind, payload) {
        Ok(record) => {
            state.metrics.increment_created(kind);
            info!(event = %Event::RecordCreated, %kind, id = record.id);
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(CreateError::Validation(err)) => {
            state.metrics.increment_rejected(kind);
            warn!(
                event = %Event::ValidationRejected,
                %kind,
                field = err.field,
                expected = err.expected.type_name(),
            );
            Err(ApiError::Validation(err))
        }
        Err(CreateError::Store(err)) => {
            state.metrics.increment_store_failures();
            error!(event = %Event::StoreFailed, %kind, error = %err);
            Err(ApiError::Store(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn body(value: serde_json::Value) -> Bytes {
        Bytes::from(serde_json::to_vec(&value).unwrap())
    }

    #[test]
    fn test_create_records_metrics() {
        let state = ResourceState::new();

        let (status, Json(record)) = create_resource(
            &state,
            ResourceKind::Book,
            &json_headers(),
            &body(json!({"title": "Harry Potter", "author": "J.K Rowling"})),
        )
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.id, 1);
        assert_eq!(state.metrics.created(ResourceKind::Book), 1);
    }

    #[test]
    fn test_rejection_records_metrics() {
        let state = ResourceState::new();

        let err = create_resource(
            &state,
            ResourceKind::User,
            &json_headers(),
            &body(json!({"name": "John Doe"})),
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(state.metrics.rejected(ResourceKind::User), 1);
        assert!(state.store.collection(ResourceKind::User).is_empty().unwrap());
    }

    #[test]
    fn test_malformed_body_records_metrics() {
        let state = ResourceState::new();

        let err = create_resource(
            &state,
            ResourceKind::Review,
            &json_headers(),
            &Bytes::from_static(b"{oops"),
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::MalformedBody(_)));
        assert_eq!(state.metrics.snapshot().malformed_bodies, 1);
    }
}
