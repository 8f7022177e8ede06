use std::collections::HashMap;
use std::fmt;

use super::entry::RankEntry;
use super::error::RatingError;
use super::food_registry::FoodRegistry;
use super::rated::RatedFood;
use super::ranking::CuisineRanking;

/// One food as collected by [`FoodRatingsBuilder`], before validation.
#[derive(Debug, Clone)]
pub(crate) struct FoodEntry {
    pub(crate) name: String,
    pub(crate) cuisine: String,
    pub(crate) rating: i32,
}

/// Builder for constructing a [`FoodRatings`] index one food at a time.
///
/// # Example
///
/// ```
/// use foodrank::FoodRatingsBuilder;
///
/// let index = FoodRatingsBuilder::new()
///     .food("kimchi", "korean", 9)
///     .food("bulgogi", "korean", 7)
///     .food("sushi", "japanese", 19)
///     .build()
///     .unwrap();
///
/// assert_eq!(index.highest_rated("korean").unwrap(), "kimchi");
/// ```
#[derive(Debug, Default)]
pub struct FoodRatingsBuilder {
    entries: Vec<FoodEntry>,
}

impl FoodRatingsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a food with its cuisine and initial rating.
    #[must_use]
    pub fn food(mut self, name: &str, cuisine: &str, rating: i32) -> Self {
        self.entries.push(FoodEntry {
            name: name.to_owned(),
            cuisine: cuisine.to_owned(),
            rating,
        });
        self
    }

    /// Build the index.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::DuplicateFood`] if a food name was added twice.
    pub fn build(self) -> Result<FoodRatings, RatingError> {
        crate::build::build(self.entries)
    }
}

/// A rating index over foods grouped by cuisine.
///
/// Each cuisine keeps its foods in an ordered set sorted by rating
/// (descending) and then name (ascending), so updating a rating and finding
/// the top-rated food of a cuisine are both `O(log n)`.
///
/// The set of foods and their cuisines is fixed at construction; only ratings
/// change afterwards. Lookups with a food or cuisine that was never
/// constructed return a [`RatingError`] and leave the index untouched.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "crate::serial::SerializedFoodRatings",
        try_from = "crate::serial::SerializedFoodRatings"
    )
)]
pub struct FoodRatings {
    pub(crate) rankings: HashMap<String, CuisineRanking>,
    pub(crate) registry: FoodRegistry,
}

impl FoodRatings {
    /// Build an index from three parallel sequences: `foods[i]` belongs to
    /// `cuisines[i]` and starts with `ratings[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::LengthMismatch`] if the sequences differ in
    /// length and [`RatingError::DuplicateFood`] if a food appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use foodrank::FoodRatings;
    ///
    /// let mut index = FoodRatings::new(
    ///     ["kimchi", "miso", "sushi", "moussaka", "ramen", "bulgogi"],
    ///     ["korean", "japanese", "japanese", "greek", "japanese", "korean"],
    ///     [9, 12, 19, 20, 9, 7],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(index.highest_rated("japanese").unwrap(), "sushi");
    /// index.change_rating("kimchi", 4).unwrap();
    /// assert_eq!(index.highest_rated("korean").unwrap(), "bulgogi");
    /// ```
    pub fn new<F, C, R>(foods: F, cuisines: C, ratings: R) -> Result<Self, RatingError>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = i32>,
    {
        let entries = crate::build::zip_parallel(
            foods.into_iter().map(Into::into).collect(),
            cuisines.into_iter().map(Into::into).collect(),
            ratings.into_iter().collect(),
        )?;
        crate::build::build(entries)
    }

    /// Set the rating of `food`, moving it within its cuisine's ranking.
    ///
    /// Only the ranking of the food's own cuisine is touched. Setting the
    /// rating a food already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnknownFood`] if `food` was not part of the
    /// index at construction. The index is left unchanged.
    pub fn change_rating(&mut self, food: &str, new_rating: i32) -> Result<(), RatingError> {
        let Some(record) = self.registry.get(food) else {
            tracing::debug!(food, "rating change for unknown food");
            return Err(RatingError::UnknownFood {
                name: food.to_owned(),
            });
        };
        let old_rating = record.rating;

        tracing::trace!(
            food,
            cuisine = %record.cuisine,
            old_rating,
            new_rating,
            "changing rating"
        );

        if old_rating == new_rating {
            return Ok(());
        }

        let ranking = self
            .rankings
            .get_mut(record.cuisine.as_str())
            .expect("every registered food has a ranking for its cuisine");
        let replaced = ranking.replace(food, old_rating, new_rating);
        debug_assert!(replaced, "stale ranking entry for '{food}'");

        self.registry.set_rating(food, new_rating);
        Ok(())
    }

    /// The top-rated food of `cuisine`. Ties go to the lexicographically
    /// smallest name.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnknownCuisine`] if no food of `cuisine` was
    /// part of the index at construction.
    pub fn highest_rated(&self, cuisine: &str) -> Result<&str, RatingError> {
        self.rankings
            .get(cuisine)
            .and_then(CuisineRanking::top)
            .map(RankEntry::name)
            .ok_or_else(|| {
                tracing::debug!(cuisine, "top-rated lookup for unknown cuisine");
                RatingError::UnknownCuisine {
                    name: cuisine.to_owned(),
                }
            })
    }

    /// The current rating of `food`, or `None` if it is unknown.
    #[must_use]
    pub fn rating_of(&self, food: &str) -> Option<i32> {
        self.registry.get(food).map(|r| r.rating)
    }

    /// The cuisine of `food`, or `None` if it is unknown.
    #[must_use]
    pub fn cuisine_of(&self, food: &str) -> Option<&str> {
        self.registry.get(food).map(|r| r.cuisine.as_str())
    }

    /// All foods of `cuisine` in ranking order, best first.
    ///
    /// Returns `None` if the cuisine is unknown.
    #[must_use]
    pub fn ranking(&self, cuisine: &str) -> Option<impl Iterator<Item = RatedFood<'_>>> {
        self.rankings
            .get(cuisine)
            .map(|r| r.iter().map(|e| RatedFood::new(&e.name, e.rating)))
    }

    /// Every cuisine in the index, in no particular order.
    pub fn cuisines(&self) -> impl Iterator<Item = &str> {
        self.rankings.keys().map(String::as_str)
    }

    /// Every food as `(name, cuisine, rating)`, in no particular order.
    pub fn foods(&self) -> impl Iterator<Item = (&str, &str, i32)> {
        self.registry
            .iter()
            .map(|(name, r)| (name, r.cuisine.as_str(), r.rating))
    }

    /// The number of foods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The number of distinct cuisines.
    #[must_use]
    pub fn cuisine_count(&self) -> usize {
        self.rankings.len()
    }
}

impl fmt::Display for FoodRatings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FoodRatings({} foods, {} cuisines)",
            self.len(),
            self.cuisine_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FoodRatings {
        FoodRatingsBuilder::new()
            .food("kimchi", "korean", 9)
            .food("miso", "japanese", 12)
            .food("sushi", "japanese", 19)
            .food("moussaka", "greek", 20)
            .food("ramen", "japanese", 9)
            .food("bulgogi", "korean", 7)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_collects_foods() {
        let builder = FoodRatingsBuilder::new()
            .food("kimchi", "korean", 9)
            .food("miso", "japanese", 12);
        assert_eq!(builder.entries.len(), 2);
        assert_eq!(builder.entries[0].name, "kimchi");
        assert_eq!(builder.entries[1].cuisine, "japanese");
        assert_eq!(builder.entries[1].rating, 12);
    }

    #[test]
    fn new_and_builder_agree() {
        let from_new = FoodRatings::new(
            ["kimchi", "miso", "sushi", "moussaka", "ramen", "bulgogi"],
            ["korean", "japanese", "japanese", "greek", "japanese", "korean"],
            [9, 12, 19, 20, 9, 7],
        )
        .unwrap();
        let from_builder = sample();
        for cuisine in ["korean", "japanese", "greek"] {
            let a: Vec<_> = from_new.ranking(cuisine).unwrap().collect();
            let b: Vec<_> = from_builder.ranking(cuisine).unwrap().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn change_rating_updates_registry_and_ranking() {
        let mut index = sample();
        index.change_rating("ramen", 16).unwrap();
        assert_eq!(index.rating_of("ramen"), Some(16));
        let names: Vec<&str> = index
            .ranking("japanese")
            .unwrap()
            .map(|r| r.name())
            .collect();
        assert_eq!(names, vec!["sushi", "ramen", "miso"]);
    }

    #[test]
    fn change_rating_unknown_food_leaves_index_untouched() {
        let mut index = sample();
        let err = index.change_rating("pizza", 50).unwrap_err();
        assert_eq!(
            err,
            RatingError::UnknownFood {
                name: "pizza".into()
            }
        );
        assert_eq!(index.len(), 6);
        assert_eq!(index.highest_rated("greek").unwrap(), "moussaka");
    }

    #[test]
    fn highest_rated_unknown_cuisine() {
        let index = sample();
        assert!(matches!(
            index.highest_rated("italian"),
            Err(RatingError::UnknownCuisine { name }) if name == "italian"
        ));
    }

    #[test]
    fn accessors() {
        let index = sample();
        assert_eq!(index.cuisine_of("miso"), Some("japanese"));
        assert_eq!(index.cuisine_of("pizza"), None);
        assert_eq!(index.rating_of("pizza"), None);
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
        assert_eq!(index.cuisine_count(), 3);

        let mut cuisines: Vec<&str> = index.cuisines().collect();
        cuisines.sort_unstable();
        assert_eq!(cuisines, vec!["greek", "japanese", "korean"]);

        let mut foods: Vec<_> = index.foods().collect();
        foods.sort_unstable();
        assert_eq!(foods[0], ("bulgogi", "korean", 7));
        assert_eq!(foods.len(), 6);
    }

    #[test]
    fn ranking_unknown_cuisine_is_none() {
        assert!(sample().ranking("italian").is_none());
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "FoodRatings(6 foods, 3 cuisines)");
    }
}
