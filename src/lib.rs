mod build;
#[cfg(feature = "serde")]
mod serial;
mod types;

pub use types::{FoodRatings, FoodRatingsBuilder, RatedFood, RatingError, SharedFoodRatings};
