//! # Cinerate Core
//!
//! Card state and lifecycle engine for a movie-rating collection UI.
//!
//! ## Overview
//!
//! The engine keeps one user's rating session consistent:
//!
//! - **Card registry**: every card, pre-rendered or fetched, is wired
//!   exactly once and owns an independent star row
//! - **Star widget**: rating value, star fill, and the derived selection
//!   flag move together through a small state machine
//! - **Manual search**: one lookup per search, a single transient result,
//!   and a generation guard that discards superseded completions
//! - **Promotion**: a search result joins the rated list as a data-level
//!   copy; the transient original is retired on the spot
//! - **Gate and collector**: submission opens at the configured rating
//!   minimum and carries exactly the positively rated movies
//!
//! All mutation happens in synchronous `update` functions fed one message
//! at a time; the lookup request is the single async boundary.

pub mod board;
pub mod config;
pub mod genre;
pub mod messages;
pub mod notice;
pub mod runtime;
pub mod search;
pub mod state;

pub use config::{BoardConfig, ConfigError, SearchSettings};
pub use genre::{GenreQuota, GenreToggle};
pub use messages::{DomainMessage, Effect, UpdateOutcome};
pub use notice::{MessageRegion, Notice, NoticeKind};
pub use runtime::{Reaction, Runtime, update};
pub use state::State;
