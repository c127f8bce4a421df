use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/rooms/:room_id/availability",
            get(handlers::availability::room_availability),
        )
        .route(
            "/api/availability/resolve",
            post(handlers::availability::resolve),
        )
        .route(
            "/api/availability/slots",
            get(handlers::availability::slots),
        )
}
