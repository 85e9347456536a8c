//! Question categories and the endpoints that list them.

mod db;
mod domain;
mod list;
mod questions;

pub use db::{create_category, create_category_table, get_all_categories, get_category};
pub use domain::{Category, CategoryId, CategoryMap};
pub use list::{CategoriesState, get_categories_endpoint};
pub use questions::{CategoryQuestions, get_category_questions_endpoint};
