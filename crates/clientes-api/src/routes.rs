//! Router assembly

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use clientes_shared::config::CorsSettings;

use crate::handlers::{customer, health, index};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .route(
            "/clientes",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/clientes/{id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route("/clientes/buscar/email/{email}", get(customer::get_customer_by_email))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if settings.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
