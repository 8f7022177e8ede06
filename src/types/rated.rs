use std::fmt;

/// A food as it appears in a cuisine's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RatedFood<'a> {
    name: &'a str,
    rating: i32,
}

impl fmt::Display for RatedFood<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rating)
    }
}

impl<'a> RatedFood<'a> {
    pub fn new(name: &'a str, rating: i32) -> Self {
        Self { name, rating }
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[must_use]
    pub fn rating(&self) -> i32 {
        self.rating
    }
}
