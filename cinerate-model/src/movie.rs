//! Wire types for the manual search endpoint.

use serde::{Deserialize, Serialize};

/// Release year as it appears on the wire.
///
/// Catalogue providers are inconsistent here: some send a number, some a
/// string, and some omit the field entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i32),
    Text(String),
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Number(year) => write!(f, "{year}"),
            Year::Text(year) => write!(f, "{year}"),
        }
    }
}

/// The single best match returned by the manual search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFound {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<Year>,
    pub poster_url: String,
}

impl MovieFound {
    /// Year text for display; blank when the provider omitted it.
    pub fn year_label(&self) -> String {
        self.year
            .as_ref()
            .map(Year::to_string)
            .unwrap_or_default()
    }
}
