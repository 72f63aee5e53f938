use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed identifier a movie carries across the catalogue, the
/// rendered page, and the submitted form fields.
///
/// The value comes from the catalogue provider and is treated as opaque;
/// the only requirement is that it is non-empty and stable per movie.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct MovieID(String);

impl MovieID {
    pub fn from_string(id: String) -> Result<Self, ModelError> {
        if id.trim().is_empty() {
            return Err(ModelError::InvalidMovie(
                "movie ID cannot be empty".to_string(),
            ));
        }
        Ok(MovieID(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MovieID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for card instances.
///
/// Distinct from [`MovieID`]: two cards showing the same movie (a search
/// result and its promoted copy, or the same title in two carousels) are
/// separate instances with separate widget state.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Copy,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct CardID(pub Uuid);

impl Default for CardID {
    fn default() -> Self {
        Self::new()
    }
}

impl CardID {
    pub fn new() -> Self {
        CardID(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for CardID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CardID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
