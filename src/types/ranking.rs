use std::collections::BTreeSet;

use super::entry::RankEntry;

/// The ordered set of ranking entries for one cuisine.
///
/// Insert, remove-by-value and top lookup are all `O(log n)` in the number
/// of foods in the cuisine.
#[derive(Debug, Clone, Default)]
pub(crate) struct CuisineRanking {
    entries: BTreeSet<RankEntry>,
}

impl CuisineRanking {
    pub(crate) fn insert(&mut self, entry: RankEntry) -> bool {
        self.entries.insert(entry)
    }

    pub(crate) fn remove(&mut self, entry: &RankEntry) -> bool {
        self.entries.remove(entry)
    }

    /// Move `name` from `old` to `new` in one step.
    ///
    /// Returns whether the entry for `old` was present before the move.
    pub(crate) fn replace(&mut self, name: &str, old: i32, new: i32) -> bool {
        let mut entry = RankEntry::new(old, name);
        let present = self.remove(&entry);
        entry.rating = new;
        self.insert(entry);
        present
    }

    /// The highest-rated entry, ties broken by the smallest name.
    pub(crate) fn top(&self) -> Option<&RankEntry> {
        self.entries.first()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &RankEntry> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(pairs: &[(i32, &str)]) -> CuisineRanking {
        let mut r = CuisineRanking::default();
        for &(rating, name) in pairs {
            r.insert(RankEntry::new(rating, name));
        }
        r
    }

    #[test]
    fn empty_ranking_has_no_top() {
        let r = CuisineRanking::default();
        assert_eq!(r.len(), 0);
        assert_eq!(r.top(), None);
    }

    #[test]
    fn top_is_highest_rating() {
        let r = ranking(&[(12, "miso"), (19, "sushi"), (9, "ramen")]);
        assert_eq!(r.top().map(RankEntry::name), Some("sushi"));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn iter_follows_ranking_order() {
        let r = ranking(&[(5, "b"), (7, "c"), (5, "a")]);
        let names: Vec<&str> = r.iter().map(RankEntry::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn remove_requires_exact_pair() {
        let mut r = ranking(&[(9, "kimchi")]);
        assert!(!r.remove(&RankEntry::new(8, "kimchi")));
        assert!(r.remove(&RankEntry::new(9, "kimchi")));
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn replace_moves_entry() {
        let mut r = ranking(&[(9, "kimchi"), (7, "bulgogi")]);
        assert!(r.replace("kimchi", 9, 4));
        assert_eq!(r.len(), 2);
        assert_eq!(r.top().map(RankEntry::name), Some("bulgogi"));
    }

    #[test]
    fn replace_with_same_rating_keeps_single_entry() {
        let mut r = ranking(&[(9, "kimchi")]);
        assert!(r.replace("kimchi", 9, 9));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn replace_of_missing_entry_reports_absence() {
        let mut r = ranking(&[(9, "kimchi")]);
        assert!(!r.replace("kimchi", 3, 10));
        // The stale pair was never there, so both pairs now coexist.
        assert_eq!(r.len(), 2);
    }
}
