//! Core category domain types.

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A named grouping for questions (e.g., 'Science', 'Art').
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// The category's database ID.
    pub id: CategoryId,
    /// The display name, stored in the `type` column.
    pub kind: String,
}

/// Categories rendered as a JSON object mapping the ID (as a string key) to
/// the display name, e.g. `{"1": "Science", "2": "Art"}`.
///
/// Keys are written in the order of the inner list, which is by ID when the
/// list comes from [crate::category::get_all_categories].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap(pub Vec<Category>);

impl CategoryMap {
    /// The display name of the category with `id`, if it is in the map.
    pub fn name_of(&self, id: CategoryId) -> Option<&str> {
        self.0
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.kind.as_str())
    }

    /// Whether there are no categories in the map.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id.to_string(), &category.kind)?;
        }
        map.end()
    }
}
