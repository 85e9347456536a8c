//! Trivia questions: storage, listing, creation, search and deletion.

mod create;
mod db;
mod delete;
mod domain;
mod list;

pub use create::{
    CreateQuestionRequest, QuestionsPostRequest, QuestionsPostState, SearchRequest,
    SearchResults, post_questions_endpoint,
};
pub use db::{
    count_questions, create_question, create_question_table, delete_question, get_all_questions,
    get_next_quiz_question, get_question, get_questions_by_category, search_questions,
};
pub use delete::{DeleteQuestionEndpointState, delete_question_endpoint};
pub use domain::{NewQuestion, Question, QuestionId};
pub use list::{QuestionsPage, QuestionsPageState, get_questions_endpoint};
