//! Submission payload assembly.

use std::collections::HashSet;

use cinerate_model::MovieID;

use crate::state::State;

/// Form field name carrying a movie's rating.
pub fn field_name(movie_id: &MovieID) -> String {
    format!("rating_{movie_id}")
}

/// Build the exact submission payload.
///
/// One field per positively rated movie, ordered by first appearance in
/// the rated list; unrated movies contribute nothing, and a movie shown
/// on several cards contributes once.
pub fn collect(state: &State) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for card in &state.board.roster {
        if !seen.insert(&card.movie_id) {
            continue;
        }
        if let Some(rating) = state.board.ratings.get(&card.movie_id) {
            if rating.is_rated() {
                fields.push((field_name(&card.movie_id), rating.to_string()));
            }
        }
    }

    fields
}
