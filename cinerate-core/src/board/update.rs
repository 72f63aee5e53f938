//! Board domain update logic.

use cinerate_model::{CardID, CardOrigin, Rating};

use crate::messages::{Effect, UpdateOutcome};
use crate::state::State;

use super::messages::Message;
use super::{collector, gate, promote, stars};

/// Which widget element the user clicked.
#[derive(Debug, Clone, Copy)]
enum Click {
    Star(Rating),
    Poster,
}

pub fn update(state: &mut State, message: Message) -> UpdateOutcome {
    match message {
        Message::StarClicked { card, value } => {
            apply_click(state, card, Click::Star(value))
        }
        Message::PosterClicked { card } => {
            apply_click(state, card, Click::Poster)
        }
        Message::PromoteRequested => promote::promote(state),
        Message::SubmitRequested => submit(state),
    }
}

/// Run one widget transition and keep the derived state in step.
///
/// Clicks on unregistered instances are dropped: only the registry hands
/// out interactive behavior, and it does so exactly once per card.
fn apply_click(state: &mut State, id: CardID, click: Click) -> UpdateOutcome {
    if !state.registry.is_initialized(id) {
        tracing::debug!(card = %id, "click on unregistered card ignored");
        return UpdateOutcome::none();
    }

    let (movie_id, rating, in_rated_list) = {
        let Some(row) = state.registry.row_mut(id) else {
            tracing::debug!(card = %id, "click on retired card ignored");
            return UpdateOutcome::none();
        };
        let card = match state.board.card_mut(id) {
            Some(card) => card,
            None => match state.search.found_card_mut() {
                Some(card) if card.id == id => card,
                _ => {
                    tracing::debug!(card = %id, "click on unknown card ignored");
                    return UpdateOutcome::none();
                }
            },
        };

        match click {
            Click::Star(value) => stars::set_rating(card, row, value),
            Click::Poster => stars::toggle_poster(card, row),
        }

        (
            card.movie_id.clone(),
            card.rating,
            card.origin != CardOrigin::SearchResult,
        )
    };

    // Transient results stay out of the map until promoted.
    if in_rated_list {
        state.board.record_rating(&movie_id, rating);
    }

    gate::evaluate(state);
    UpdateOutcome::none()
}

/// Gate, then collect: a failing gate blocks the submission and the
/// collector never runs.
fn submit(state: &mut State) -> UpdateOutcome {
    if !gate::is_satisfied(state) {
        tracing::info!(
            rated = gate::rated_count(state),
            needed = state.config.min_ratings,
            "submission blocked below the rating minimum"
        );
        return UpdateOutcome::none();
    }

    UpdateOutcome::effect(Effect::Submit {
        fields: collector::collect(state),
    })
}
