//! JSON body extractor with application error rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that rejects with `AppError::BadRequest`.
///
/// Bodies are only parsed, never validated: any string field value is
/// accepted, including the empty string.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use session_auth::api::extractors::ApiJson;
///
/// #[derive(Deserialize)]
/// struct LoginRequest {
///     email: String,
///     password: String,
/// }
///
/// async fn login(ApiJson(payload): ApiJson<LoginRequest>) {
///     // payload has every field present
/// }
/// ```
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(ApiJson(value))
    }
}
