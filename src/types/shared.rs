use std::sync::Arc;

use parking_lot::RwLock;

use super::error::RatingError;
use super::food_ratings::FoodRatings;

/// A cloneable, thread-safe handle to a [`FoodRatings`] index.
///
/// Rating changes hold the write lock for the whole remove-then-insert, so a
/// concurrent reader never sees a food missing from its cuisine or listed
/// twice.
#[derive(Debug, Clone)]
pub struct SharedFoodRatings {
    inner: Arc<RwLock<FoodRatings>>,
}

impl SharedFoodRatings {
    #[must_use]
    pub fn new(index: FoodRatings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// See [`FoodRatings::change_rating`].
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnknownFood`] if `food` is not in the index.
    pub fn change_rating(&self, food: &str, new_rating: i32) -> Result<(), RatingError> {
        self.inner.write().change_rating(food, new_rating)
    }

    /// See [`FoodRatings::highest_rated`]. Returns an owned name since the
    /// lock is released before returning.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnknownCuisine`] if `cuisine` is not in the index.
    pub fn highest_rated(&self, cuisine: &str) -> Result<String, RatingError> {
        self.inner.read().highest_rated(cuisine).map(str::to_owned)
    }

    /// Run `f` against a consistent view of the index.
    pub fn read<T>(&self, f: impl FnOnce(&FoodRatings) -> T) -> T {
        f(&self.inner.read())
    }

    /// Take the index back out, if this is the last handle to it.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged while other clones are still alive.
    pub fn into_inner(self) -> Result<FoodRatings, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<FoodRatings> for SharedFoodRatings {
    fn from(index: FoodRatings) -> Self {
        Self::new(index)
    }
}
