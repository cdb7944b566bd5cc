use std::sync::Arc;

use axum::{
    Json, Router,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::store::interface::{StoreClient, StoreError};

mod bookings;

/// Maximum request payload size in bytes
const MAX_REQUEST_PAYLOAD_BYTES: usize = 8 * 1024; // 8 KiB

type ApiState = Arc<dyn StoreClient>;

/// Returns the sub-router for `/api`
pub fn new_api_router<S: StoreClient>(store: S) -> Router<()> {
    let store: ApiState = Arc::new(store);
    Router::new()
        .route(
            "/bookings",
            get(bookings::get_bookings).post(bookings::post_booking),
        )
        .with_state(store)
        .layer(
            // order is top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_REQUEST_PAYLOAD_BYTES))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers(Any)
                        .allow_credentials(false),
                ),
        )
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Slot is not available.")]
    SlotTaken,

    #[error("Failed to fetch bookings.")]
    Fetch(#[source] StoreError),

    #[error("Failed to save booking.")]
    Save(#[source] StoreError),
}

impl ApiError {
    /// Maps an insert failure: a slot collision is the caller's fault, any
    /// other storage failure is the server's.
    fn from_save(error: StoreError) -> Self {
        match error {
            StoreError::SlotTaken => ApiError::SlotTaken,
            other => ApiError::Save(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingFields | ApiError::SlotTaken => StatusCode::BAD_REQUEST,
            ApiError::Fetch(ref cause) | ApiError::Save(ref cause) => {
                tracing::error!("storage failure: {cause}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests;
