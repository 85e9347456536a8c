//! Category listing endpoint.

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
};

/// The state needed for the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoriesState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// List every category as a map from ID to name.
///
/// # Errors
/// Returns [Error::NotFound] if there are no categories.
pub async fn get_categories_endpoint(
    State(state): State<CategoriesState>,
) -> Result<Json<CategoriesResponse>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;

    if categories.is_empty() {
        tracing::warn!("There are no categories in the database");
        return Err(Error::NotFound);
    }

    Ok(Json(CategoriesResponse { categories }))
}
