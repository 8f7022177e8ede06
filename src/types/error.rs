use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("input length mismatch: {foods} foods, {cuisines} cuisines, {ratings} ratings")]
    LengthMismatch {
        foods: usize,
        cuisines: usize,
        ratings: usize,
    },

    #[error("duplicate food '{name}'")]
    DuplicateFood { name: String },

    #[error("unknown food '{name}'")]
    UnknownFood { name: String },

    #[error("unknown cuisine '{name}'")]
    UnknownCuisine { name: String },
}
