//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
///
/// Every variant is rendered as one of three client-facing errors: bad
/// request (400), not found (404) or unprocessable (422). The variants exist
/// so that the cause can be logged and tested precisely on the server side.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request could not be parsed, e.g. the body was not valid JSON.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The request was well-formed but could not be processed.
    #[error("unable to process request: {0}")]
    Unprocessable(String),

    /// A question could not be created because required fields were null or
    /// missing.
    #[error("missing required question fields: {0:?}")]
    MissingQuestionFields(Vec<&'static str>),

    /// The category ID of a new question does not refer to a category.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory,

    /// Tried to delete a question that does not exist.
    #[error("tried to delete a question that is not in the database")]
    DeleteMissingQuestion,

    /// Every question matching the quiz category has already been served.
    #[error("no quiz question is left to serve")]
    NoQuizQuestionAvailable,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidCategory
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // The body parsed as JSON but did not fit the expected shape.
            JsonRejection::JsonDataError(error) => Error::Unprocessable(error.body_text()),
            // No JSON at all, e.g. a bodyless POST, is neither a create nor a search.
            JsonRejection::MissingJsonContentType(error) => {
                Error::Unprocessable(error.body_text())
            }
            rejection => Error::BadRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameter: {}", rejection.body_text());
        Error::NotFound
    }
}

/// The JSON body sent to the client for every error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl Error {
    /// The HTTP status code that the client sees for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Unprocessable(_)
            | Error::MissingQuestionFields(_)
            | Error::InvalidCategory
            | Error::DeleteMissingQuestion
            | Error::NoQuizQuestionAvailable
            | Error::DatabaseLockError
            | Error::SqlError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

fn message_for(status_code: StatusCode) -> &'static str {
    match status_code {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Resource not found",
        _ => "Unable to process request",
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            Error::SqlError(_) | Error::DatabaseLockError => {
                tracing::error!("An unexpected error occurred: {}", self)
            }
            error => tracing::debug!("Responding with {status_code}: {error}"),
        }

        let body = ErrorBody {
            success: false,
            error: status_code.as_u16(),
            message: message_for(status_code),
        };

        (status_code, Json(body)).into_response()
    }
}
