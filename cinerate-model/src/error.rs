use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidMovie(String),
    InvalidRating(String),
    IncompleteCard(&'static str),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidMovie(msg) => {
                write!(f, "invalid movie: {msg}")
            }
            ModelError::InvalidRating(msg) => {
                write!(f, "invalid rating: {msg}")
            }
            ModelError::IncompleteCard(part) => {
                write!(f, "card is missing its {part}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
