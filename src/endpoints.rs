//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/questions/{question_id}', use [format_endpoint].

/// The route for listing all categories.
pub const CATEGORIES: &str = "/categories";
/// The route for listing the questions in a single category.
pub const CATEGORY_QUESTIONS: &str = "/categories/{category_id}/questions";
/// The route for listing questions page by page, and for creating or
/// searching questions.
pub const QUESTIONS: &str = "/questions";
/// The route to delete a single question.
pub const QUESTION: &str = "/questions/{question_id}";
/// The route for drawing the next quiz question.
pub const QUIZZES: &str = "/quizzes";

/// Replace the first `{...}` parameter in `endpoint_path` with `id`, e.g.
/// `format_endpoint(QUESTION, 7)` gives `/questions/7`.
///
/// Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
