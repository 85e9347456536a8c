//! Core question domain types.

use serde::Serialize;

use crate::category::CategoryId;

/// Database identifier for a question.
pub type QuestionId = i64;

/// A quiz item with its answer, difficulty and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The question's database ID.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// How hard the question is, 1 being the easiest.
    pub difficulty: i64,
    /// The ID of the category the question belongs to.
    pub category: CategoryId,
}

/// The data for a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// How hard the question is, 1 being the easiest.
    pub difficulty: i64,
    /// The ID of an existing category.
    pub category: CategoryId,
}
