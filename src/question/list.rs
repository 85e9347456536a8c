//! Paginated question listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{CategoryMap, get_all_categories},
    extract::QueryParams,
    pagination::{PageQuery, PaginationConfig},
    question::{Question, count_questions, get_all_questions},
};

/// The state needed for listing questions.
#[derive(Debug, Clone)]
pub struct QuestionsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for QuestionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// One page of questions together with the data the question list view needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsPage {
    pub questions: Vec<Question>,
    /// The number of questions across all pages.
    pub total_questions: u64,
    pub categories: CategoryMap,
    /// The category name of the last question on the page.
    pub current_category: Option<String>,
}

/// Get a page of questions ordered by category and ID.
///
/// # Errors
/// Returns [Error::NotFound] if the page holds no questions, either because
/// the page is out of range or because there are no questions at all.
pub async fn get_questions_endpoint(
    State(state): State<QuestionsPageState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<QuestionsPage>, Error> {
    let page = state.pagination_config.resolve_page(query.page.as_deref());

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let questions = get_all_questions(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve questions: {error}"))?;
    let questions = state.pagination_config.paginate(questions, page);

    let Some(last_question) = questions.last() else {
        tracing::debug!("page {page} of questions is empty");
        return Err(Error::NotFound);
    };

    let total_questions = count_questions(&connection)?;
    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;
    let current_category = categories
        .name_of(last_question.category)
        .map(ToOwned::to_owned);

    Ok(Json(QuestionsPage {
        questions,
        total_questions,
        categories,
        current_category,
    }))
}
