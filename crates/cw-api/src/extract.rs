//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use cw_core::models::Cook;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::AppState;

/// Header carrying the acting cook's id. It is an actor reference, not a credential.
pub const COOK_ID_HEADER: &str = "x-cook-id";

/// The registered cook named by `X-Cook-Id`; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct CurrentCook(pub Cook);

impl FromRequestParts<AppState> for CurrentCook {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cook_id = parts
            .headers
            .get(COOK_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        let cook = state.kitchen.resolve_cook(cook_id).await?;
        Ok(Self(cook))
    }
}

/// `Json<T>` whose rejection is our `{ "message" }` body with status 400.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
