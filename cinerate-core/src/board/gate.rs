//! Minimum rated-count gate.

use crate::notice::{Notice, NoticeKind};
use crate::state::State;

/// Number of distinct movies currently rated above zero.
pub fn rated_count(state: &State) -> usize {
    state.board.ratings.len()
}

/// Check the gate and toggle the shortfall notice accordingly.
///
/// Reads the ratings map only; never mutates a card.
pub fn is_satisfied(state: &mut State) -> bool {
    let needed = state.config.min_ratings;
    let rated = rated_count(state);

    if rated < needed {
        state.notices.show(Notice::RatingShortfall(format!(
            "Please rate at least {needed} movies."
        )));
        false
    } else {
        state.notices.resolve(NoticeKind::RatingShortfall);
        true
    }
}

/// Re-run the gate for its message side effect, discarding the verdict.
pub(crate) fn evaluate(state: &mut State) {
    let _ = is_satisfied(state);
}
