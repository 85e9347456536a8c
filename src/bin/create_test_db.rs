use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use trivia_api::{NewQuestion, create_category, create_question, initialize_db};

/// A utility for creating a test database for the trivia API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, difficulty, category index into CATEGORIES)
const QUESTIONS: &[(&str, &str, i64, usize)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 4, 0),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 0),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        4,
        0,
    ),
    (
        "La Giaconda is better known as what?",
        "Mona Lisa",
        3,
        1,
    ),
    (
        "How many paintings did Van Gogh sell in his lifetime?",
        "One",
        4,
        1,
    ),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        1,
        1,
    ),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 2),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        3,
        2,
    ),
    (
        "The Taj Mahal is located in which Indian city?",
        "Agra",
        2,
        2,
    ),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        2,
        3,
    ),
    (
        "What boxer's original name is Cassius Clay?",
        "Muhammad Ali",
        1,
        3,
    ),
    (
        "Who invented Peanut Butter?",
        "George Washington Carver",
        2,
        3,
    ),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        4,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        3,
        5,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        4,
        5,
    ),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating categories...");

    let categories = CATEGORIES
        .iter()
        .map(|kind| create_category(kind, &conn))
        .collect::<Result<Vec<_>, _>>()?;

    println!("Creating questions...");

    for &(question, answer, difficulty, category_index) in QUESTIONS {
        create_question(
            &NewQuestion {
                question: question.to_owned(),
                answer: answer.to_owned(),
                difficulty,
                category: categories[category_index].id,
            },
            &conn,
        )?;
    }

    println!(
        "Success! Created {} categories and {} questions.",
        categories.len(),
        QUESTIONS.len()
    );

    Ok(())
}
