//! Moving a search result into the rated list.

use crate::messages::{Effect, UpdateOutcome};
use crate::state::State;

use super::gate;

/// Copy the current search result into the rated list and retire it.
///
/// The promoted card is a data-level copy with a fresh instance id,
/// registered on its own, so later interaction with it cannot touch the
/// discarded transient and vice versa. An unrated or unselected result is
/// rejected with a prompt and nothing changes; the result and its
/// promotion control stay in place for another attempt.
pub(crate) fn promote(state: &mut State) -> UpdateOutcome {
    let Some(transient) = state.search.found_card() else {
        tracing::debug!("promotion requested with no search result present");
        return UpdateOutcome::none();
    };

    if !transient.selected || !transient.is_rated() {
        return UpdateOutcome::effect(Effect::Prompt(
            "Please rate the movie before adding it!".to_string(),
        ));
    }

    let promoted = transient.promoted_copy();
    tracing::info!(
        movie = %promoted.movie_id,
        rating = %promoted.rating,
        "promoting search result into the rated list"
    );

    state
        .board
        .record_rating(&promoted.movie_id, promoted.rating);
    state.registry.initialize(&promoted);
    state.board.roster.push(promoted);

    if let Some(discarded) = state.search.clear_pane() {
        state.registry.retire(discarded);
    }

    gate::evaluate(state);
    UpdateOutcome::none()
}
