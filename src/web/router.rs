use super::cors::{AllowedOrigins, cors_gate};
use super::handlers::{
    create_movie, delete_movie, get_movie, hello, list_movies, route_not_found, update_movie,
};
use crate::service::MovieService;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
}

impl AppState {
    pub fn new(movies: MovieService) -> Self {
        Self { movies }
    }
}

/// Layers run outermost first: trace, CORS gate, CORS headers, routes.
pub fn build_router(state: AppState, allowed_origins: AllowedOrigins) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:id",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
        .fallback(route_not_found)
        .layer(allowed_origins.layer())
        .layer(middleware::from_fn_with_state(allowed_origins, cors_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
