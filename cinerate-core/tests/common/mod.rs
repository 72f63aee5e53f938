//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use cinerate_core::search::{MovieLookup, SearchError};
use cinerate_model::{CardParts, MovieFound, Year};

/// Card pieces as the page renderer would supply them.
pub fn seed(movie_id: &str, title: &str) -> CardParts {
    rated_seed(movie_id, title, 0)
}

/// A pre-rendered card that already carries a rating.
pub fn rated_seed(movie_id: &str, title: &str, rating: u8) -> CardParts {
    CardParts {
        movie_id: Some(movie_id.to_string()),
        title: Some(title.to_string()),
        year: Some(Year::Number(2001)),
        poster_url: Some(format!("https://example.test/p/{movie_id}.jpg")),
        rating_value: Some(rating.to_string()),
    }
}

/// A search response for `id`.
pub fn movie(id: &str, title: &str) -> MovieFound {
    MovieFound {
        id: id.to_string(),
        title: title.to_string(),
        year: Some(Year::Number(1999)),
        poster_url: format!("https://example.test/p/{id}.jpg"),
    }
}

/// Lookup that replays a queue of prepared responses; once the queue is
/// empty every further search misses.
#[derive(Debug)]
pub struct ScriptedLookup {
    responses: Mutex<VecDeque<Result<MovieFound, SearchError>>>,
}

impl ScriptedLookup {
    pub fn new(
        responses: Vec<Result<MovieFound, SearchError>>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl MovieLookup for ScriptedLookup {
    async fn lookup(&self, _title: &str) -> Result<MovieFound, SearchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SearchError::NotFound))
    }
}
