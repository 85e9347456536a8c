//! Listing the questions that belong to one category.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    Error,
    category::{CategoriesState, CategoryId, get_category},
    extract::IdPath,
    question::{Question, count_questions, get_questions_by_category},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// The number of questions in every category, not just this one.
    pub total_questions: u64,
    /// The name of the requested category.
    pub current_category: String,
}

/// Get every question in a category, ordered by ID and not paginated.
///
/// # Errors
/// Returns [Error::NotFound] if the ID is not an integer or does not refer to
/// a category.
pub async fn get_category_questions_endpoint(
    State(state): State<CategoriesState>,
    IdPath(raw_category_id): IdPath<String>,
) -> Result<Json<CategoryQuestions>, Error> {
    let category_id: CategoryId = raw_category_id.trim().parse().map_err(|_| {
        tracing::debug!("category ID {raw_category_id:?} is not an integer");
        Error::NotFound
    })?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let category = get_category(category_id, &connection)?;
    let questions = get_questions_by_category(category.id, &connection).inspect_err(|error| {
        tracing::error!("Failed to retrieve questions for category {category_id}: {error}")
    })?;
    let total_questions = count_questions(&connection)?;

    Ok(Json(CategoryQuestions {
        questions,
        total_questions,
        current_category: category.kind,
    }))
}
