#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_content_type, json_body};

use rusqlite::Connection;

use crate::{
    AppState,
    category::{CategoryId, create_category},
    pagination::PaginationConfig,
    question::{NewQuestion, create_question},
};

/// The categories every seeded test database holds, in ID order.
pub(crate) const CATEGORY_NAMES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub(crate) const SCIENCE_ID: CategoryId = 1;
pub(crate) const ART_ID: CategoryId = 2;
pub(crate) const GEOGRAPHY_ID: CategoryId = 3;
pub(crate) const HISTORY_ID: CategoryId = 4;
pub(crate) const SPORTS_ID: CategoryId = 6;

/// Create an in-memory app state with the six standard categories and
/// `question_count` questions.
///
/// Question `i` (from zero) is "Question {i}" with ID `i + 1`, and is
/// assigned to the categories in turn, starting with Science.
pub(crate) fn get_seeded_state(question_count: usize) -> AppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = AppState::new(connection, PaginationConfig::default())
        .expect("Could not create app state");

    {
        let connection = state.db_connection.lock().unwrap();

        for name in CATEGORY_NAMES {
            create_category(name, &connection).expect("Could not create test category");
        }

        for i in 0..question_count {
            create_question(
                &NewQuestion {
                    question: format!("Question {i}"),
                    answer: format!("Answer {i}"),
                    difficulty: (i % 5) as i64 + 1,
                    category: (i % CATEGORY_NAMES.len()) as CategoryId + SCIENCE_ID,
                },
                &connection,
            )
            .expect("Could not create test question");
        }
    }

    state
}
