//! Serde support for [`FoodRatings`](crate::FoodRatings).
//!
//! An index is encoded as a flat list of `(name, cuisine, rating)` records
//! sorted by name, so equal indexes always encode to equal output. The
//! rankings are not stored: decoding rebuilds them through the same
//! validation as [`FoodRatingsBuilder::build`](crate::FoodRatingsBuilder::build),
//! which rejects duplicate foods.

use serde::{Deserialize, Serialize};

use crate::types::{FoodEntry, FoodRatings};
use crate::RatingError;

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializedFoodRatings {
    foods: Vec<SerializedFood>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedFood {
    name: String,
    cuisine: String,
    rating: i32,
}

impl From<FoodRatings> for SerializedFoodRatings {
    fn from(index: FoodRatings) -> Self {
        let mut foods: Vec<SerializedFood> = index
            .foods()
            .map(|(name, cuisine, rating)| SerializedFood {
                name: name.to_owned(),
                cuisine: cuisine.to_owned(),
                rating,
            })
            .collect();
        foods.sort_by(|a, b| a.name.cmp(&b.name));
        Self { foods }
    }
}

impl TryFrom<SerializedFoodRatings> for FoodRatings {
    type Error = RatingError;

    fn try_from(serialized: SerializedFoodRatings) -> Result<Self, Self::Error> {
        let entries = serialized
            .foods
            .into_iter()
            .map(|f| FoodEntry {
                name: f.name,
                cuisine: f.cuisine,
                rating: f.rating,
            })
            .collect();
        crate::build::build(entries)
    }
}
