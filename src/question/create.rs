//! The shared endpoint for creating and searching questions.
//!
//! `POST /questions` carries two operations. A body with a `searchTerm` key
//! is a search, even when the term is empty or null. Any other body is a
//! request to create a question.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    AppState, Error,
    extract::{JsonBody, QueryParams, deserialize_optional_lenient_i64},
    pagination::{PageQuery, PaginationConfig},
    question::{NewQuestion, Question, create_question, search_questions},
};

/// The body key that marks a request as a search.
const SEARCH_TERM_KEY: &str = "searchTerm";

/// The state needed for creating and searching questions.
#[derive(Debug, Clone)]
pub struct QuestionsPostState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for QuestionsPostState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// A substring search over question text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Any JSON value, see [SearchRequest::term].
    #[serde(default)]
    pub search_term: Value,
    /// Echoed back to the client untouched.
    #[serde(default)]
    pub current_category: Value,
}

impl SearchRequest {
    /// The text to search for. `null` searches with an empty term and other
    /// non-string values are matched by their JSON text, e.g. `1` as "1".
    pub fn term(&self) -> String {
        match &self.search_term {
            Value::Null => String::new(),
            Value::String(term) => term.clone(),
            other => other.to_string(),
        }
    }
}

/// A question to create. Every field is required, they are optional here so
/// that missing fields can be reported together.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i64")]
    pub category: Option<i64>,
}

impl CreateQuestionRequest {
    /// Check that every field is present.
    ///
    /// # Errors
    /// Returns [Error::MissingQuestionFields] naming each null or missing field.
    pub fn validate(self) -> Result<NewQuestion, Error> {
        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question,
                answer,
                difficulty,
                category,
            }),
            (question, answer, difficulty, category) => {
                let missing = [
                    ("question", question.is_none()),
                    ("answer", answer.is_none()),
                    ("difficulty", difficulty.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();

                Err(Error::MissingQuestionFields(missing))
            }
        }
    }
}

/// The two operations that share `POST /questions`.
#[derive(Debug)]
pub enum QuestionsPostRequest {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

impl TryFrom<Map<String, Value>> for QuestionsPostRequest {
    type Error = Error;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        let is_search = body.contains_key(SEARCH_TERM_KEY);
        let body = Value::Object(body);

        let request = if is_search {
            serde_json::from_value(body).map(QuestionsPostRequest::Search)
        } else {
            serde_json::from_value(body).map(QuestionsPostRequest::Create)
        };

        request.map_err(|error| Error::Unprocessable(error.to_string()))
    }
}

/// One page of search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// The number of matching questions across all pages.
    pub total_questions: u64,
    pub current_category: Value,
}

/// Create a question, or search questions if the body has a `searchTerm`.
///
/// Searches always succeed, even when nothing matches or the page is out of
/// range. Creation fails with an unprocessable error if a field is missing or
/// the question cannot be stored.
pub async fn post_questions_endpoint(
    State(state): State<QuestionsPostState>,
    QueryParams(query): QueryParams<PageQuery>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Response, Error> {
    match QuestionsPostRequest::try_from(body)? {
        QuestionsPostRequest::Search(request) => {
            let page = state.pagination_config.resolve_page(query.page.as_deref());
            search(&state, request, page).map(|results| Json(results).into_response())
        }
        QuestionsPostRequest::Create(request) => {
            create(&state, request).map(|()| Json(json!({"success": true})).into_response())
        }
    }
}

fn search(
    state: &QuestionsPostState,
    request: SearchRequest,
    page: i64,
) -> Result<SearchResults, Error> {
    let search_term = request.term();

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let matches = search_questions(&search_term, &connection).inspect_err(|error| {
        tracing::error!("Failed to search questions for {search_term:?}: {error}")
    })?;
    let total_questions = matches.len() as u64;

    Ok(SearchResults {
        questions: state.pagination_config.paginate(matches, page),
        total_questions,
        current_category: request.current_category,
    })
}

fn create(state: &QuestionsPostState, request: CreateQuestionRequest) -> Result<(), Error> {
    let new_question = request
        .validate()
        .inspect_err(|error| tracing::warn!("Rejected new question: {error}"))?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let question = create_question(&new_question, &connection)
        .inspect_err(|error| tracing::error!("Could not create question: {error}"))?;

    tracing::info!("Created question {}", question.id);

    Ok(())
}
