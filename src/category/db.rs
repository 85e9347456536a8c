//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryMap},
};

/// Create a category and return it with its generated ID.
///
/// Categories are seed data, no endpoint creates them.
pub fn create_category(kind: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO category (type) VALUES (?1);", (kind,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        kind: kind.to_owned(),
    })
}

/// Retrieve a single category by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no category with `category_id`.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, type FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(connection: &Connection) -> Result<CategoryMap, Error> {
    connection
        .prepare("SELECT id, type FROM category ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(Error::from))
        .collect::<Result<Vec<_>, _>>()
        .map(CategoryMap)
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}
