use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::error::RatingError;

/// Per-food metadata: the fixed cuisine and the current rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FoodRecord {
    pub(crate) cuisine: String,
    pub(crate) rating: i32,
}

/// Maps food names to their cuisine and current rating.
///
/// Built once during construction. Afterwards only ratings change; no food
/// is added, removed, or moved to another cuisine.
#[derive(Debug, Clone, Default)]
pub(crate) struct FoodRegistry {
    foods: HashMap<String, FoodRecord>,
}

impl FoodRegistry {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            foods: HashMap::with_capacity(capacity),
        }
    }

    /// Register a food. Fails if the name is already taken.
    pub(crate) fn register(
        &mut self,
        name: &str,
        cuisine: &str,
        rating: i32,
    ) -> Result<(), RatingError> {
        match self.foods.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(RatingError::DuplicateFood {
                name: name.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(FoodRecord {
                    cuisine: cuisine.to_owned(),
                    rating,
                });
                Ok(())
            }
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(name)
    }

    /// Store a new rating, returning the previous one.
    /// Returns `None` (and stores nothing) if the food is unknown.
    pub(crate) fn set_rating(&mut self, name: &str, rating: i32) -> Option<i32> {
        self.foods
            .get_mut(name)
            .map(|record| std::mem::replace(&mut record.rating, rating))
    }

    pub(crate) fn len(&self) -> usize {
        self.foods.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &FoodRecord)> {
        self.foods.iter().map(|(k, v)| (k.as_str(), v))
    }
}
