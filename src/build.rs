use std::collections::HashMap;

use crate::types::{CuisineRanking, FoodEntry, FoodRatings, FoodRegistry, RankEntry};
use crate::RatingError;

/// Validate builder entries and assemble the per-cuisine rankings.
pub(crate) fn build(entries: Vec<FoodEntry>) -> Result<FoodRatings, RatingError> {
    let mut registry = FoodRegistry::with_capacity(entries.len());
    let mut rankings: HashMap<String, CuisineRanking> = HashMap::new();

    for entry in entries {
        registry.register(&entry.name, &entry.cuisine, entry.rating)?;
        rankings
            .entry(entry.cuisine)
            .or_default()
            .insert(RankEntry::new(entry.rating, entry.name));
    }

    debug_assert_eq!(
        rankings.values().map(CuisineRanking::len).sum::<usize>(),
        registry.len(),
        "every food must have exactly one ranking entry",
    );

    tracing::debug!(
        foods = registry.len(),
        cuisines = rankings.len(),
        "built food ratings index"
    );

    Ok(FoodRatings { rankings, registry })
}

/// Zip three parallel sequences into builder entries.
pub(crate) fn zip_parallel(
    foods: Vec<String>,
    cuisines: Vec<String>,
    ratings: Vec<i32>,
) -> Result<Vec<FoodEntry>, RatingError> {
    if foods.len() != cuisines.len() || foods.len() != ratings.len() {
        return Err(RatingError::LengthMismatch {
            foods: foods.len(),
            cuisines: cuisines.len(),
            ratings: ratings.len(),
        });
    }

    Ok(foods
        .into_iter()
        .zip(cuisines)
        .zip(ratings)
        .map(|((name, cuisine), rating)| FoodEntry {
            name,
            cuisine,
            rating,
        })
        .collect())
}
