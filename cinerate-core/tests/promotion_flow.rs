//! Promotion: atomic copy into the rated list, rejections, replacement.

mod common;

use cinerate_core::board::{self, collector, gate};
use cinerate_core::search::{self, ResultPane};
use cinerate_core::{BoardConfig, DomainMessage, Effect, State, update};
use cinerate_model::{CardID, CardOrigin, Rating};

use common::{movie, rated_seed, seed};

/// Drive one successful search to completion and return the transient
/// card's id.
fn searched(state: &mut State, id: &str, title: &str) -> CardID {
    let effects = update(
        state,
        DomainMessage::Search(search::Message::QuerySubmitted(
            title.to_string(),
        )),
    )
    .effects;
    let Some(Effect::Lookup { generation, .. }) = effects.first() else {
        panic!("expected a lookup effect");
    };
    let generation = *generation;

    update(
        state,
        DomainMessage::Search(search::Message::ResultReceived {
            generation,
            movie: movie(id, title),
        }),
    );
    state.search.found_card().expect("result rendered").id
}

fn star(state: &mut State, card: CardID, value: u8) {
    update(
        state,
        DomainMessage::Board(board::Message::StarClicked {
            card,
            value: Rating::new(value).unwrap(),
        }),
    );
}

fn promote(state: &mut State) -> Vec<Effect> {
    update(
        state,
        DomainMessage::Board(board::Message::PromoteRequested),
    )
    .effects
}

#[test]
fn promoting_a_rated_result_is_atomic() {
    let mut state = State::new(BoardConfig::default());
    let transient = searched(&mut state, "603", "The Matrix");
    star(&mut state, transient, 4);

    let effects = promote(&mut state);

    assert!(effects.is_empty());
    assert_eq!(state.board.roster.len(), 1);
    let promoted = &state.board.roster[0];
    assert_eq!(promoted.movie_id.as_str(), "603");
    assert_eq!(promoted.rating.value(), 4);
    assert_eq!(promoted.origin, CardOrigin::Promoted);
    assert_ne!(promoted.id, transient);

    assert_eq!(state.search.pane, ResultPane::Empty);
    assert!(state.registry.row(transient).is_none());
    assert_eq!(gate::rated_count(&state), 1);
}

#[test]
fn an_unrated_result_is_rejected_with_a_prompt() {
    let mut state = State::new(BoardConfig::default());
    searched(&mut state, "603", "The Matrix");

    let effects = promote(&mut state);

    assert_eq!(
        effects,
        vec![Effect::Prompt(
            "Please rate the movie before adding it!".to_string()
        )]
    );
    assert!(state.board.roster.is_empty());
    // The result and its promotion control stay for another attempt.
    assert!(state.search.found_card().is_some());
}

#[test]
fn promotion_without_a_result_is_ignored() {
    let mut state = State::new(BoardConfig::default());
    let effects = promote(&mut state);

    assert!(effects.is_empty());
    assert!(state.board.roster.is_empty());
}

#[test]
fn a_second_search_replaces_the_first_result() {
    let mut state = State::new(BoardConfig::default());
    let first = searched(&mut state, "603", "The Matrix");
    star(&mut state, first, 5);

    let second = searched(&mut state, "78", "Blade Runner");
    assert!(state.registry.row(first).is_none());
    star(&mut state, second, 3);

    promote(&mut state);

    assert_eq!(state.board.roster.len(), 1);
    assert_eq!(state.board.roster[0].movie_id.as_str(), "78");
    assert_eq!(state.board.roster[0].rating.value(), 3);
}

#[test]
fn a_promoted_card_rates_independently() {
    let mut state = State::new(BoardConfig::default());
    let transient = searched(&mut state, "603", "The Matrix");
    star(&mut state, transient, 4);
    promote(&mut state);

    let promoted = state.board.roster[0].id;
    star(&mut state, promoted, 2);

    assert_eq!(state.board.roster[0].rating.value(), 2);
    let movie_id = state.board.roster[0].movie_id.clone();
    assert_eq!(
        state.board.ratings.get(&movie_id).map(|r| r.value()),
        Some(2)
    );
    assert_eq!(state.search.pane, ResultPane::Empty);
}

#[test]
fn promoting_an_already_rated_movie_counts_once() {
    let seeds = vec![rated_seed("603", "The Matrix", 5), seed("78", "Blade Runner")];
    let mut state = State::mount(BoardConfig::default(), seeds);
    assert_eq!(gate::rated_count(&state), 1);

    let transient = searched(&mut state, "603", "The Matrix");
    star(&mut state, transient, 3);
    promote(&mut state);

    assert_eq!(state.board.roster.len(), 3);
    assert_eq!(gate::rated_count(&state), 1);

    let fields = collector::collect(&state);
    assert_eq!(fields, vec![("rating_603".to_string(), "3".to_string())]);
}
