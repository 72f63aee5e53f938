use thiserror::Error;

/// Failures of the manual movie lookup.
///
/// The display strings double as the inline messages shown in place of a
/// result; a non-success response is "not found" as far as the user is
/// concerned.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Movie not found.")]
    NotFound,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
