use std::cmp::Ordering;

/// A `(rating, food)` pair positioned inside its cuisine's ranking.
///
/// Ordered by rating descending, then name ascending, so the first entry of a
/// sorted collection is always the top-rated food.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RankEntry {
    pub(crate) rating: i32,
    pub(crate) name: String,
}

impl RankEntry {
    pub(crate) fn new(rating: i32, name: impl Into<String>) -> Self {
        Self {
            rating,
            name: name.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Ord for RankEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for RankEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
