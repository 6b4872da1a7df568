//! Rutas de la API
//!
//! Un router por recurso, montados bajo /api, con el middleware que
//! resuelve el principal de cada request.

pub mod airplane_routes;
pub mod airplane_type_routes;
pub mod airport_routes;
pub mod crew_routes;
pub mod flight_routes;
pub mod order_routes;
pub mod route_routes;
pub mod user_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::principal_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/user", user_routes::create_user_router())
        .nest("/airplane-types", airplane_type_routes::create_airplane_type_router())
        .nest("/airplanes", airplane_routes::create_airplane_router())
        .nest("/crew", crew_routes::create_crew_router())
        .nest("/airports", airport_routes::create_airport_router())
        .nest("/routes", route_routes::create_route_router())
        .nest("/flights", flight_routes::create_flight_router())
        .nest("/orders", order_routes::create_order_router())
}

/// Construir la aplicación completa con middleware y estado
pub fn build_app(state: AppState) -> Router {
    let cors = if state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .nest("/api", create_api_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            principal_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
