//! Drawing the next question for a quiz.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::CategoryId,
    extract::{JsonBody, deserialize_lenient_i64},
    question::{Question, QuestionId, get_next_quiz_question},
};

/// The quiz category ID that stands for every category.
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// The state needed for drawing quiz questions.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The category chosen for a quiz, as the web UI sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub id: CategoryId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// The category to restrict the draw to, `None` for all categories.
    pub fn filter(&self) -> Option<CategoryId> {
        (self.id != ALL_CATEGORIES_ID).then_some(self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// The IDs of the questions already asked in this quiz.
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

/// Draw the question with the lowest ID that has not been asked yet.
///
/// # Errors
/// Returns an unprocessable error if the body has no quiz category, or
/// [Error::NoQuizQuestionAvailable] if every eligible question has been asked.
pub async fn post_quiz_endpoint(
    State(state): State<QuizState>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, Error> {
    let quiz_category = request.quiz_category.ok_or_else(|| {
        tracing::warn!("Quiz request is missing its category");
        Error::Unprocessable("quiz_category is required".to_owned())
    })?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let question = get_next_quiz_question(
        quiz_category.filter(),
        &request.previous_questions,
        &connection,
    )
    .inspect_err(|error| tracing::error!("Failed to draw a quiz question: {error}"))?;

    match question {
        Some(question) => Ok(Json(QuizResponse { question })),
        None => {
            tracing::info!(
                "No questions left in category {} ({:?}) after {} previous questions",
                quiz_category.id,
                quiz_category.kind,
                request.previous_questions.len()
            );
            Err(Error::NoQuizQuestionAvailable)
        }
    }
}

#[cfg(test)]
mod post_quiz_endpoint_tests {
    use axum::extract::{FromRef, State};
    use serde_json::{Value, json};

    use crate::{
        AppState, Error,
        extract::JsonBody,
        question::get_all_questions,
        quiz::{QuizRequest, QuizResponse, QuizState, post_quiz_endpoint},
        test_utils::{SPORTS_ID, get_seeded_state},
    };

    async fn draw(state: &AppState, body: Value) -> Result<QuizResponse, Error> {
        let request: QuizRequest =
            serde_json::from_value(body).expect("Could not parse quiz request");

        post_quiz_endpoint(State(QuizState::from_ref(state)), JsonBody(request))
            .await
            .map(|response| response.0)
    }

    #[tokio::test]
    async fn draws_from_all_categories() {
        let state = get_seeded_state(6);

        let got = draw(
            &state,
            json!({"previous_questions": [], "quiz_category": {"id": 0, "type": "click"}}),
        )
        .await
        .expect("Could not draw question");

        assert_eq!(got.question.id, 1);
    }

    #[tokio::test]
    async fn skips_previous_questions() {
        let state = get_seeded_state(6);

        let got = draw(
            &state,
            json!({"previous_questions": [1, 2], "quiz_category": {"id": 0, "type": "click"}}),
        )
        .await
        .expect("Could not draw question");

        assert_eq!(got.question.id, 3);
    }

    #[tokio::test]
    async fn draws_from_requested_category() {
        let state = get_seeded_state(12);

        let got = draw(
            &state,
            json!({"previous_questions": [], "quiz_category": {"id": SPORTS_ID.to_string(), "type": "Sports"}}),
        )
        .await
        .expect("Could not draw question");

        assert_eq!(got.question.category, SPORTS_ID);
    }

    #[tokio::test]
    async fn exhausted_quiz_is_unprocessable() {
        let state = get_seeded_state(6);
        let all_ids = get_all_questions(&state.db_connection.lock().unwrap())
            .unwrap()
            .into_iter()
            .map(|question| question.id)
            .collect::<Vec<_>>();

        let result = draw(
            &state,
            json!({"previous_questions": all_ids, "quiz_category": {"id": 0, "type": "click"}}),
        )
        .await;

        assert_eq!(result.err(), Some(Error::NoQuizQuestionAvailable));
    }

    #[tokio::test]
    async fn missing_category_is_unprocessable() {
        let state = get_seeded_state(6);

        let result = draw(&state, json!({"previous_questions": []})).await;

        assert!(matches!(result, Err(Error::Unprocessable(_))));
    }

    #[tokio::test]
    async fn unknown_category_has_no_questions() {
        let state = get_seeded_state(6);

        let result = draw(
            &state,
            json!({"previous_questions": [], "quiz_category": {"id": 999, "type": "Nope"}}),
        )
        .await;

        assert_eq!(result.err(), Some(Error::NoQuizQuestionAvailable));
    }
}
