//! Question deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    extract::IdPath,
    question::{QuestionId, delete_question},
};

/// The state needed for deleting a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteQuestionEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle question deletion.
///
/// A question that does not exist cannot be deleted, so deleting the same ID
/// twice fails the second time. Every failure here is reported as
/// unprocessable.
pub async fn delete_question_endpoint(
    State(state): State<DeleteQuestionEndpointState>,
    IdPath(question_id): IdPath<QuestionId>,
) -> Result<Json<Value>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    match delete_question(question_id, &connection) {
        Ok(()) => {
            tracing::info!("Deleted question {question_id}");
            Ok(Json(json!({"success": true})))
        }
        Err(Error::DeleteMissingQuestion) => {
            tracing::warn!("Tried to delete question {question_id}, which does not exist");
            Err(Error::DeleteMissingQuestion)
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting question {question_id}: {error}"
            );
            Err(Error::Unprocessable(error.to_string()))
        }
    }
}
