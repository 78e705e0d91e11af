//! # cw-api
//!
//! The web routing layer for CookWithUs.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::routing::get;
use axum::Router;
use cw_services::Kitchen;

/// State shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub kitchen: Kitchen,
}

impl AppState {
    pub fn new(kitchen: Kitchen) -> Self {
        Self { kitchen }
    }
}

/// Resource routes, relative to the API base path.
pub fn api_routes() -> Router<AppState> {
    use handlers::method_not_allowed as other;

    Router::new()
        .route(
            "/cooks",
            get(handlers::list_cooks)
                .post(handlers::register_cook)
                .fallback(other),
        )
        .route("/cooks/{cook_id}", get(handlers::get_cook).fallback(other))
        .route(
            "/recipes",
            get(handlers::list_recipes)
                .post(handlers::share_recipe)
                .fallback(other),
        )
        .route("/recipes/{recipe_id}", get(handlers::get_recipe).fallback(other))
        .route(
            "/recipes/{recipe_id}/ratings",
            get(handlers::list_ratings)
                .post(handlers::rate_recipe)
                .fallback(other),
        )
        .route(
            "/recipes/{recipe_id}/ratings/{rating_id}",
            get(handlers::get_rating).fallback(other),
        )
        .route(
            "/meals",
            get(handlers::list_meals)
                .post(handlers::post_meal)
                .fallback(other),
        )
        .route("/meals/{meal_id}", get(handlers::get_meal).fallback(other))
}

/// Builds the complete application.
///
/// `base_path` of `None` mounts the resources at the root (the layout of the
/// first API version); otherwise they are nested, e.g. under `/api/v2`.
/// `/health` always sits at the root.
pub fn router(state: AppState, base_path: Option<&str>) -> Router {
    let app = match base_path {
        Some(prefix) => Router::new().nest(prefix, api_routes()),
        None => api_routes(),
    };

    let app = app
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state);

    middleware::standard_middleware(app)
}
