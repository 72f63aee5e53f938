//! Search domain update logic.

use cinerate_model::{Card, MovieFound};

use crate::messages::{Effect, UpdateOutcome};
use crate::notice::{Notice, NoticeKind};
use crate::state::State;

use super::messages::Message;
use super::types::ResultPane;

pub fn update(state: &mut State, message: Message) -> UpdateOutcome {
    match message {
        Message::QuerySubmitted(query) => handle_query(state, query),
        Message::ResultReceived { generation, movie } => {
            handle_result(state, generation, movie)
        }
        Message::LookupFailed {
            generation,
            message,
        } => handle_failure(state, generation, message),
    }
}

/// Reject blank input, otherwise discard the previous result and issue
/// one lookup under a fresh generation.
fn handle_query(state: &mut State, raw: String) -> UpdateOutcome {
    let query = raw.trim().to_string();
    if query.is_empty() {
        return UpdateOutcome::effect(Effect::Prompt(
            "Please enter a movie title.".to_string(),
        ));
    }

    if let Some(discarded) = state.search.clear_pane() {
        state.registry.retire(discarded);
    }
    state.notices.resolve(NoticeKind::SearchFailure);

    let generation = state.search.next_generation();
    state.search.in_flight = true;
    state.search.pane = ResultPane::Pending {
        query: query.clone(),
    };

    tracing::info!(%query, generation, "issuing movie lookup");
    UpdateOutcome::effect(Effect::Lookup { query, generation })
}

fn handle_result(
    state: &mut State,
    generation: u64,
    movie: MovieFound,
) -> UpdateOutcome {
    if !state.search.is_current(generation) {
        tracing::debug!(generation, "discarding superseded lookup result");
        return UpdateOutcome::none();
    }
    state.search.in_flight = false;

    match Card::search_result(&movie) {
        Ok(card) => {
            tracing::info!(movie = %card.movie_id, title = %card.title, "search result rendered");
            state.registry.initialize(&card);
            state.search.pane = ResultPane::Found { card };
            state.notices.resolve(NoticeKind::SearchFailure);
        }
        Err(error) => {
            // The endpoint answered with a body the card cannot be built
            // from; surface it the same way as a miss.
            tracing::error!(%error, "lookup response failed validation");
            fail_pane(state, "Movie not found.".to_string());
        }
    }

    UpdateOutcome::none()
}

fn handle_failure(
    state: &mut State,
    generation: u64,
    message: String,
) -> UpdateOutcome {
    if !state.search.is_current(generation) {
        tracing::debug!(generation, "discarding superseded lookup failure");
        return UpdateOutcome::none();
    }
    state.search.in_flight = false;

    fail_pane(state, message);
    UpdateOutcome::none()
}

/// Show the inline failure and mirror it into the shared region. Rated
/// cards are untouched; the user may simply try again.
fn fail_pane(state: &mut State, message: String) {
    let text = format!("{message} Please try a different title.");
    state.search.pane = ResultPane::Failed {
        message: text.clone(),
    };
    state.notices.show(Notice::SearchFailure(text));
}
