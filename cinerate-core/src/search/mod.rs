//! Search domain: the manual movie lookup and its transient result.

pub mod error;
pub mod messages;
pub mod service;
pub mod types;
pub mod update;

pub use self::error::SearchError;
pub use self::messages::Message;
pub use self::service::{LookupService, MovieLookup};
pub use self::types::{ResultPane, SearchState};
pub use self::update::update;
