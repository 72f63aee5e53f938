//! Search domain messages.

use cinerate_model::MovieFound;

/// Search domain messages.
#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    /// Submit the manual search box.
    QuerySubmitted(String),

    // Internal events
    /// A lookup completed with a match.
    ResultReceived { generation: u64, movie: MovieFound },
    /// A lookup failed or matched nothing.
    LookupFailed { generation: u64, message: String },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuerySubmitted(_) => "QuerySubmitted",
            Self::ResultReceived { .. } => "ResultReceived",
            Self::LookupFailed { .. } => "LookupFailed",
        }
    }
}
