//! End-to-end sessions through the runtime with a scripted lookup.

mod common;

use cinerate_core::board::{self, gate};
use cinerate_core::search::{self, ResultPane};
use cinerate_core::{BoardConfig, DomainMessage, Reaction, Runtime};
use cinerate_model::Rating;

use common::{ScriptedLookup, movie, rated_seed};

#[tokio::test]
async fn a_full_session_reaches_submission() {
    let lookup = ScriptedLookup::new(vec![Ok(movie("438631", "Dune"))]);
    let seeds = (1..=4)
        .map(|i| rated_seed(&format!("m{i}"), &format!("Movie {i}"), 4))
        .collect();
    let mut runtime = Runtime::mount(BoardConfig::default(), seeds, lookup);

    // Four pre-rated cards are one short of the minimum.
    assert_eq!(gate::rated_count(&runtime.state), 4);
    assert!(!runtime.state.notices.is_empty());

    runtime
        .dispatch(DomainMessage::Search(search::Message::QuerySubmitted(
            "dune".to_string(),
        )))
        .await;
    let transient = runtime.state.search.found_card().unwrap().id;

    runtime
        .dispatch(DomainMessage::Board(board::Message::StarClicked {
            card: transient,
            value: Rating::new(5).unwrap(),
        }))
        .await;
    runtime
        .dispatch(DomainMessage::Board(board::Message::PromoteRequested))
        .await;

    assert_eq!(gate::rated_count(&runtime.state), 5);
    assert!(runtime.state.notices.is_empty());

    let reactions = runtime
        .dispatch(DomainMessage::Board(board::Message::SubmitRequested))
        .await;
    let [Reaction::Submitted(fields)] = reactions.as_slice() else {
        panic!("expected a submission, got {reactions:?}");
    };

    assert_eq!(fields.len(), 5);
    assert!(
        fields.contains(&("rating_438631".to_string(), "5".to_string()))
    );
}

#[tokio::test]
async fn a_failed_lookup_leaves_rated_state_alone() {
    let lookup = ScriptedLookup::new(Vec::new());
    let seeds = vec![rated_seed("m1", "Movie 1", 5)];
    let mut runtime = Runtime::mount(BoardConfig::default(), seeds, lookup);

    runtime
        .dispatch(DomainMessage::Search(search::Message::QuerySubmitted(
            "nonsense".to_string(),
        )))
        .await;

    assert!(matches!(
        runtime.state.search.pane,
        ResultPane::Failed { .. }
    ));
    assert_eq!(gate::rated_count(&runtime.state), 1);
    assert_eq!(runtime.state.board.roster.len(), 1);
}

#[tokio::test]
async fn promoting_an_unrated_result_prompts_through_the_runtime() {
    let lookup = ScriptedLookup::new(vec![Ok(movie("603", "The Matrix"))]);
    let mut runtime =
        Runtime::mount(BoardConfig::default(), Vec::new(), lookup);

    runtime
        .dispatch(DomainMessage::Search(search::Message::QuerySubmitted(
            "matrix".to_string(),
        )))
        .await;
    let reactions = runtime
        .dispatch(DomainMessage::Board(board::Message::PromoteRequested))
        .await;

    assert_eq!(
        reactions,
        vec![Reaction::Prompted(
            "Please rate the movie before adding it!".to_string()
        )]
    );
    assert!(runtime.state.search.found_card().is_some());
    assert!(runtime.state.board.roster.is_empty());
}
