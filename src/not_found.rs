//! The route handler for requests that do not match any route.
use axum::response::{IntoResponse, Response};

use crate::Error;

pub async fn get_404_not_found() -> Response {
    tracing::debug!("No route matched the request");
    Error::NotFound.into_response()
}
