mod entry;
mod error;
mod food_ratings;
mod food_registry;
mod ranking;
mod rated;
mod shared;

pub(crate) use entry::RankEntry;
pub use error::RatingError;
pub(crate) use food_ratings::FoodEntry;
pub use food_ratings::{FoodRatings, FoodRatingsBuilder};
pub(crate) use food_registry::FoodRegistry;
pub(crate) use ranking::CuisineRanking;
pub use rated::RatedFood;
pub use shared::SharedFoodRatings;
