//! Middleware for logging requests and responses.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of bytes of a request or response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match read_body_text(body).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return Error::BadRequest(error).into_response();
        }
    };
    tracing::info!(
        "Received request: {} {}\nbody: {}",
        parts.method,
        parts.uri,
        truncate(&body_text)
    );
    log_full_body("request", &body_text);

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    let body_text = match read_body_text(body).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return Error::Unprocessable(error).into_response();
        }
    };
    tracing::info!(
        "Sending response: {}\nbody: {}",
        parts.status,
        truncate(&body_text)
    );
    log_full_body("response", &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_body_text(body: Body) -> Result<String, String> {
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|error| error.to_string())?;

    Ok(String::from_utf8_lossy(&bytes).to_string())
}

fn log_full_body(kind: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("Full {kind} body: {body:?}");
    }
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting
/// a character.
fn truncate(body: &str) -> String {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return format!("{body:?}");
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{:?}...", &body[..end])
}
