//! Application router configuration.

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    category::{get_categories_endpoint, get_category_questions_endpoint},
    endpoints,
    not_found::get_404_not_found,
    question::{delete_question_endpoint, get_questions_endpoint, post_questions_endpoint},
    quiz::post_quiz_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint).post(post_questions_endpoint),
        )
        .route(endpoints::QUESTION, delete(delete_question_endpoint))
        .route(endpoints::QUIZZES, post(post_quiz_endpoint))
        .fallback(get_404_not_found)
        .layer(cors_layer())
        .with_state(state)
}

/// Allow the web UI to call the API from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}
