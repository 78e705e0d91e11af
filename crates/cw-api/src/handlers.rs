//! # cw-api Handlers
//!
//! Thin adapters between HTTP and the `Kitchen` operations. Each handler
//! extracts, delegates, and picks the success status; failures flow out
//! through `ApiError`.

use axum::extract::{OriginalUri, Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use axum::Json;
use cw_core::models::{Cook, Meal, Rating, Recipe};
use cw_core::payloads::{NewCook, NewMeal, NewRating, NewRecipe};
use cw_core::AppError;
use serde::Serialize;

use crate::error::{error_response, ApiError, ApiResult};
use crate::extract::{ApiJson, CurrentCook};
use crate::AppState;

type Created<T> = (StatusCode, Json<T>);

fn created<T>(value: T) -> Created<T> {
    (StatusCode::CREATED, Json(value))
}

// ── Cooks ───────────────────────────────────────────────────────────────────

pub async fn register_cook(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewCook>,
) -> ApiResult<Created<Cook>> {
    Ok(created(state.kitchen.register(new).await?))
}

pub async fn list_cooks(State(state): State<AppState>) -> ApiResult<Json<Vec<Cook>>> {
    Ok(Json(state.kitchen.list_cooks().await?))
}

pub async fn get_cook(
    State(state): State<AppState>,
    Path(cook_id): Path<String>,
) -> ApiResult<Json<Cook>> {
    Ok(Json(state.kitchen.get_cook(&cook_id).await?))
}

// ── Recipes ─────────────────────────────────────────────────────────────────

pub async fn share_recipe(
    State(state): State<AppState>,
    CurrentCook(cook): CurrentCook,
    ApiJson(new): ApiJson<NewRecipe>,
) -> ApiResult<Created<Recipe>> {
    Ok(created(state.kitchen.share_recipe(&cook, new).await?))
}

pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<Recipe>>> {
    Ok(Json(state.kitchen.list_recipes().await?))
}

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> ApiResult<Json<Recipe>> {
    Ok(Json(state.kitchen.get_recipe(&recipe_id).await?))
}

// ── Ratings ─────────────────────────────────────────────────────────────────

pub async fn rate_recipe(
    State(state): State<AppState>,
    CurrentCook(cook): CurrentCook,
    Path(recipe_id): Path<String>,
    ApiJson(new): ApiJson<NewRating>,
) -> ApiResult<Created<Rating>> {
    Ok(created(state.kitchen.rate_recipe(&cook, &recipe_id, new).await?))
}

pub async fn list_ratings(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> ApiResult<Json<Vec<Rating>>> {
    Ok(Json(state.kitchen.list_ratings(&recipe_id).await?))
}

pub async fn get_rating(
    State(state): State<AppState>,
    Path((recipe_id, rating_id)): Path<(String, String)>,
) -> ApiResult<Json<Rating>> {
    Ok(Json(state.kitchen.get_rating(&recipe_id, &rating_id).await?))
}

// ── Meals ───────────────────────────────────────────────────────────────────

pub async fn post_meal(
    State(state): State<AppState>,
    CurrentCook(cook): CurrentCook,
    ApiJson(new): ApiJson<NewMeal>,
) -> ApiResult<Created<Meal>> {
    Ok(created(state.kitchen.post_meal(&cook, new).await?))
}

pub async fn list_meals(State(state): State<AppState>) -> ApiResult<Json<Vec<Meal>>> {
    Ok(Json(state.kitchen.list_meals().await?))
}

pub async fn get_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
) -> ApiResult<Json<Meal>> {
    Ok(Json(state.kitchen.get_meal(&meal_id).await?))
}

// ── Misc ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unknown paths, so they also get a `{ "message" }` body.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found("Route", uri.path()).into()
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} is not allowed on {}.", uri.path()),
    )
}
