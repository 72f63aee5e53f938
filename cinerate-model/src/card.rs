//! The card: one movie entry and its interactive state.

use crate::error::{ModelError, Result};
use crate::ids::{CardID, MovieID};
use crate::movie::{MovieFound, Year};
use crate::rating::Rating;

/// Where a card came from.
///
/// Origin decides whether a card may count toward the rated total: carousel
/// and promoted cards do; a search result never does, only its promoted
/// copy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CardOrigin {
    /// Rendered with the page as part of a genre carousel.
    Carousel,
    /// Transient result of a manual search.
    SearchResult,
    /// Copied out of a search result into the rated list.
    Promoted,
}

/// A single movie card.
///
/// `selected` is derived state: it tracks `rating > 0`, except for the
/// momentary poster-open window where a card is selected with rating still
/// zero to keep the star row visible. Such a card is still unrated for
/// gating and submission purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardID,
    pub movie_id: MovieID,
    pub title: String,
    pub year: Option<Year>,
    pub poster_url: String,
    pub rating: Rating,
    pub selected: bool,
    pub origin: CardOrigin,
}

impl Card {
    /// Transient card built from a search response.
    pub fn search_result(found: &MovieFound) -> Result<Self> {
        let movie_id = MovieID::from_string(found.id.clone())?;
        Ok(Card {
            id: CardID::new(),
            movie_id,
            title: found.title.clone(),
            year: found.year.clone(),
            poster_url: found.poster_url.clone(),
            rating: Rating::UNRATED,
            selected: false,
            origin: CardOrigin::SearchResult,
        })
    }

    /// Data-level copy used when a search result joins the rated list.
    ///
    /// The copy gets a fresh instance id, so it can never share widget
    /// state with the card it was copied from. The rating is whatever the
    /// source card holds at the moment of the copy.
    pub fn promoted_copy(&self) -> Self {
        Card {
            id: CardID::new(),
            origin: CardOrigin::Promoted,
            ..self.clone()
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating.is_rated()
    }

    /// Year text for display; blank when unknown.
    pub fn year_label(&self) -> String {
        self.year
            .as_ref()
            .map(Year::to_string)
            .unwrap_or_default()
    }
}

/// Pieces of a pre-rendered card, scraped before wiring.
///
/// Every piece is optional: a malformed card is reported and skipped at
/// initialization instead of failing the whole mount.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CardParts {
    pub movie_id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<Year>,
    pub poster_url: Option<String>,
    /// Raw value of the hidden rating field, when the markup has one.
    pub rating_value: Option<String>,
}

impl Card {
    /// Validate scraped pieces into a carousel card.
    ///
    /// This is the structural error boundary: any missing or malformed
    /// piece yields a [`ModelError`] for the caller to report, leaving
    /// other cards unaffected.
    pub fn from_parts(parts: CardParts) -> Result<Self> {
        let movie_id = parts
            .movie_id
            .ok_or(ModelError::IncompleteCard("movie identifier"))
            .and_then(MovieID::from_string)?;
        let title =
            parts.title.ok_or(ModelError::IncompleteCard("title"))?;
        let poster_url = parts
            .poster_url
            .ok_or(ModelError::IncompleteCard("poster"))?;
        let raw = parts
            .rating_value
            .ok_or(ModelError::IncompleteCard("rating field"))?;
        let value = raw.trim().parse::<u8>().map_err(|_| {
            ModelError::InvalidRating(format!("{raw:?} is not a number"))
        })?;
        let rating = Rating::new(value)?;

        Ok(Card {
            id: CardID::new(),
            movie_id,
            title,
            year: parts.year,
            poster_url,
            selected: rating.is_rated(),
            rating,
            origin: CardOrigin::Carousel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(movie_id: &str) -> CardParts {
        CardParts {
            movie_id: Some(movie_id.to_string()),
            title: Some("Heat".to_string()),
            year: Some(Year::Number(1995)),
            poster_url: Some("https://example.test/p/949.jpg".to_string()),
            rating_value: Some("0".to_string()),
        }
    }

    #[test]
    fn from_parts_builds_an_unrated_carousel_card() {
        let card = Card::from_parts(parts("949")).unwrap();
        assert_eq!(card.movie_id.as_str(), "949");
        assert_eq!(card.origin, CardOrigin::Carousel);
        assert_eq!(card.rating, Rating::UNRATED);
        assert!(!card.selected);
        assert_eq!(card.year_label(), "1995");
    }

    #[test]
    fn from_parts_honours_a_pre_filled_rating() {
        let mut pre_rated = parts("949");
        pre_rated.rating_value = Some("4".to_string());
        let card = Card::from_parts(pre_rated).unwrap();
        assert_eq!(card.rating.value(), 4);
        assert!(card.selected);
    }

    #[test]
    fn from_parts_reports_each_missing_piece() {
        let mut no_id = parts("949");
        no_id.movie_id = None;
        assert!(matches!(
            Card::from_parts(no_id),
            Err(ModelError::IncompleteCard("movie identifier"))
        ));

        let mut no_field = parts("949");
        no_field.rating_value = None;
        assert!(matches!(
            Card::from_parts(no_field),
            Err(ModelError::IncompleteCard("rating field"))
        ));

        let mut bad_value = parts("949");
        bad_value.rating_value = Some("four".to_string());
        assert!(matches!(
            Card::from_parts(bad_value),
            Err(ModelError::InvalidRating(_))
        ));
    }

    #[test]
    fn promoted_copy_is_independent() {
        let found = MovieFound {
            id: "603".to_string(),
            title: "The Matrix".to_string(),
            year: Some(Year::Number(1999)),
            poster_url: "https://example.test/p/603.jpg".to_string(),
        };
        let mut transient = Card::search_result(&found).unwrap();
        transient.rating = Rating::new(5).unwrap();
        transient.selected = true;

        let promoted = transient.promoted_copy();
        assert_ne!(promoted.id, transient.id);
        assert_eq!(promoted.movie_id, transient.movie_id);
        assert_eq!(promoted.rating, transient.rating);
        assert_eq!(promoted.origin, CardOrigin::Promoted);
    }
}
