//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, about::get_about_page, endpoints, export::download_endpoint,
    generate::{generate_endpoint, get_generator_page},
    internal_server_error::get_internal_server_error_page, not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_generator_page))
        .route(endpoints::ABOUT_VIEW, get(get_about_page))
        .route(endpoints::GENERATE_API, post(generate_endpoint))
        .route(endpoints::DOWNLOAD_API, post(download_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
