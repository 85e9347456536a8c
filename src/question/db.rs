//! Database operations for questions.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    category::CategoryId,
    question::{NewQuestion, Question, QuestionId},
};

const SELECT_COLUMNS: &str = "SELECT id, question, answer, difficulty, category FROM question";

/// Create a question and return it with its generated ID.
///
/// # Errors
/// Returns [Error::InvalidCategory] if the category does not exist.
pub fn create_question(question: &NewQuestion, connection: &Connection) -> Result<Question, Error> {
    connection.execute(
        "INSERT INTO question (question, answer, difficulty, category) VALUES (?1, ?2, ?3, ?4);",
        (
            &question.question,
            &question.answer,
            question.difficulty,
            question.category,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Question {
        id,
        question: question.question.clone(),
        answer: question.answer.clone(),
        difficulty: question.difficulty,
        category: question.category,
    })
}

/// Retrieve a single question by ID.
pub fn get_question(question_id: QuestionId, connection: &Connection) -> Result<Question, Error> {
    connection
        .prepare(&format!("{SELECT_COLUMNS} WHERE id = :id;"))?
        .query_row(&[(":id", &question_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all questions ordered by category and then ID.
pub fn get_all_questions(connection: &Connection) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY category ASC, id ASC;"))?
        .query_map([], map_row)?
        .map(|maybe_question| maybe_question.map_err(Error::from))
        .collect()
}

/// Retrieve the questions whose text contains `search_term`, ignoring case,
/// ordered by category and then ID.
///
/// The term is matched literally, `%` and `_` are not wildcards. Case folding
/// is done in Rust since SQLite's `lower` only folds ASCII letters.
pub fn search_questions(search_term: &str, connection: &Connection) -> Result<Vec<Question>, Error> {
    let search_term = search_term.to_lowercase();

    let questions = get_all_questions(connection)?
        .into_iter()
        .filter(|question| question.question.to_lowercase().contains(&search_term))
        .collect();

    Ok(questions)
}

/// Retrieve the questions in a category ordered by ID.
pub fn get_questions_by_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(&format!(
            "{SELECT_COLUMNS} WHERE category = :category ORDER BY id ASC;"
        ))?
        .query_map(&[(":category", &category_id)], map_row)?
        .map(|maybe_question| maybe_question.map_err(Error::from))
        .collect()
}

/// Find the question with the lowest ID that is not in `previous_questions`.
///
/// If `category_id` is `None` any category is eligible.
/// Returns `Ok(None)` when every eligible question has been used.
pub fn get_next_quiz_question(
    category_id: Option<CategoryId>,
    previous_questions: &[QuestionId],
    connection: &Connection,
) -> Result<Option<Question>, Error> {
    let previous_questions = serde_json::to_string(previous_questions)
        .map_err(|error| Error::Unprocessable(error.to_string()))?;

    let result = connection
        .prepare(&format!(
            "{SELECT_COLUMNS} \
            WHERE (:category IS NULL OR category = :category) \
            AND id NOT IN (SELECT value FROM json_each(:previous)) \
            ORDER BY id ASC LIMIT 1;"
        ))?
        .query_row(
            named_params! {
                ":category": category_id,
                ":previous": previous_questions,
            },
            map_row,
        );

    match result {
        Ok(question) => Ok(Some(question)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Count all questions.
pub fn count_questions(connection: &Connection) -> Result<u64, Error> {
    let count: i64 = connection.query_row("SELECT COUNT(id) FROM question;", [], |row| row.get(0))?;

    Ok(count as u64)
}

/// Delete a question by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingQuestion] if the question doesn't exist.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingQuestion);
    }

    Ok(())
}

/// Initialize the question table and indexes.
///
/// The category table must exist first.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER NOT NULL,
            category INTEGER NOT NULL,
            FOREIGN KEY(category) REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        difficulty: row.get(3)?,
        category: row.get(4)?,
    })
}

#[cfg(test)]
mod question_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        category::create_category,
        db::initialize,
        question::{
            NewQuestion, Question, count_questions, create_question, delete_question,
            get_all_questions, get_question,
        },
    };

    use super::{get_next_quiz_question, get_questions_by_category, search_questions};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        create_category("Science", &connection).expect("Could not create category");
        create_category("Art", &connection).expect("Could not create category");
        connection
    }

    fn insert(text: &str, category: i64, connection: &Connection) -> Question {
        create_question(
            &NewQuestion {
                question: text.to_owned(),
                answer: "42".to_owned(),
                difficulty: 3,
                category,
            },
            connection,
        )
        .expect("Could not create test question")
    }

    #[test]
    fn create_question_succeeds() {
        let connection = get_test_db_connection();

        let question = insert("What is the answer?", 1, &connection);

        assert!(question.id > 0);
        assert_eq!(get_question(question.id, &connection), Ok(question));
    }

    #[test]
    fn create_question_with_unknown_category_fails() {
        let connection = get_test_db_connection();

        let result = create_question(
            &NewQuestion {
                question: "Orphan?".to_owned(),
                answer: "Yes".to_owned(),
                difficulty: 1,
                category: 999,
            },
            &connection,
        );

        assert_eq!(result, Err(Error::InvalidCategory));
    }

    #[test]
    fn get_all_questions_orders_by_category_then_id() {
        let connection = get_test_db_connection();
        let art_first = insert("Art 1", 2, &connection);
        let science_first = insert("Science 1", 1, &connection);
        let art_second = insert("Art 2", 2, &connection);
        let science_second = insert("Science 2", 1, &connection);

        let got = get_all_questions(&connection).expect("Could not get questions");

        assert_eq!(got, [science_first, science_second, art_first, art_second]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let connection = get_test_db_connection();
        let want = insert("Whose autobiography is entitled 'I Know Why'?", 2, &connection);
        insert("What boxer's original name is Cassius Clay?", 1, &connection);

        let got = search_questions("TITLE", &connection).expect("Could not search questions");

        assert_eq!(got, [want]);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let connection = get_test_db_connection();
        let want = insert("Qui a écrit Éclair?", 1, &connection);
        insert("Who wrote Hamlet?", 1, &connection);

        let upper = search_questions("ÉCRIT", &connection).expect("Could not search questions");
        let lower = search_questions("éclair", &connection).expect("Could not search questions");

        assert_eq!(upper, [want.clone()]);
        assert_eq!(lower, [want]);
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let connection = get_test_db_connection();
        insert("No wildcards here", 1, &connection);
        let want = insert("100% sure?", 1, &connection);

        let got = search_questions("0%", &connection).expect("Could not search questions");

        assert_eq!(got, [want]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let connection = get_test_db_connection();
        insert("One", 1, &connection);
        insert("Two", 2, &connection);

        let got = search_questions("", &connection).expect("Could not search questions");

        assert_eq!(got.len(), 2);
    }

    #[test]
    fn get_questions_by_category_filters() {
        let connection = get_test_db_connection();
        let science = insert("Science 1", 1, &connection);
        insert("Art 1", 2, &connection);

        let got = get_questions_by_category(1, &connection).expect("Could not get questions");

        assert_eq!(got, [science]);
    }

    #[test]
    fn next_quiz_question_skips_previous() {
        let connection = get_test_db_connection();
        let first = insert("First", 1, &connection);
        let second = insert("Second", 2, &connection);

        let got = get_next_quiz_question(None, &[first.id], &connection)
            .expect("Could not draw question");

        assert_eq!(got, Some(second));
    }

    #[test]
    fn next_quiz_question_respects_category() {
        let connection = get_test_db_connection();
        insert("Science", 1, &connection);
        let art = insert("Art", 2, &connection);

        let got = get_next_quiz_question(Some(2), &[], &connection)
            .expect("Could not draw question");

        assert_eq!(got, Some(art));
    }

    #[test]
    fn next_quiz_question_is_none_when_exhausted() {
        let connection = get_test_db_connection();
        let first = insert("First", 1, &connection);
        let second = insert("Second", 1, &connection);

        let got = get_next_quiz_question(None, &[first.id, second.id], &connection)
            .expect("Could not draw question");

        assert_eq!(got, None);
    }

    #[test]
    fn count_questions_counts_all() {
        let connection = get_test_db_connection();
        insert("One", 1, &connection);
        insert("Two", 2, &connection);

        assert_eq!(count_questions(&connection), Ok(2));
    }

    #[test]
    fn delete_question_succeeds() {
        let connection = get_test_db_connection();
        let question = insert("Doomed", 1, &connection);

        let result = delete_question(question.id, &connection);

        assert!(result.is_ok());
        assert_eq!(get_question(question.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_question_with_invalid_id_returns_error() {
        let connection = get_test_db_connection();

        let result = delete_question(999999, &connection);

        assert_eq!(result, Err(Error::DeleteMissingQuestion));
    }
}
