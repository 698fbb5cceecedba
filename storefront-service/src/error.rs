use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("product not found")]
    ProductNotFound,

    #[error("product out of stock")]
    OutOfStock,

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ShopResult<T> = Result<T, ShopError>;

impl ShopError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ShopError::ProductNotFound => StatusCode::NOT_FOUND,
            ShopError::OutOfStock => StatusCode::CONFLICT,
            ShopError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<diesel::result::Error> for ShopError {
    fn from(e: diesel::result::Error) -> Self {
        ShopError::StoreUnavailable(e.to_string())
    }
}

impl<E: std::error::Error + 'static> From<bb8::RunError<E>> for ShopError {
    fn from(e: bb8::RunError<E>) -> Self {
        ShopError::StoreUnavailable(e.to_string())
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
