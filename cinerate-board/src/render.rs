//! Text rendering of a session, as a pure function of the state.

use cinerate_core::State;
use cinerate_core::board::{StarRow, gate};
use cinerate_core::search::ResultPane;
use cinerate_model::Card;

/// Render the whole board: rated list, search pane, message region.
pub fn board(state: &State) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "== Your ratings ({} of {} rated) ==\n",
        gate::rated_count(state),
        state.config.min_ratings
    ));

    if state.board.roster.is_empty() {
        out.push_str("  (no cards mounted)\n");
    }
    for (index, card) in state.board.roster.iter().enumerate() {
        let row = state.registry.row(card.id);
        out.push_str(&card_line(index + 1, card, row));
    }

    out.push_str("-- Search --\n");
    match &state.search.pane {
        ResultPane::Empty => out.push_str("  (no result)\n"),
        ResultPane::Pending { query } => {
            out.push_str(&format!("  Searching for {query:?}...\n"));
        }
        ResultPane::Found { card } => {
            out.push_str("  Movie found:\n");
            let row = state.registry.row(card.id);
            out.push_str(&card_line_label("result", card, row));
            out.push_str("  (promote it with `promote`)\n");
        }
        ResultPane::Failed { message } => {
            out.push_str(&format!("  {message}\n"));
        }
    }

    if let Some(notice) = state.notices.current() {
        out.push_str(&format!("!! {}\n", notice.text()));
    }

    out
}

fn card_line(index: usize, card: &Card, row: Option<&StarRow>) -> String {
    card_line_label(&format!("{index:>2}"), card, row)
}

fn card_line_label(
    label: &str,
    card: &Card,
    row: Option<&StarRow>,
) -> String {
    let marker = if card.selected { "[x]" } else { "[ ]" };
    let year = card.year_label();
    let year = if year.is_empty() {
        String::new()
    } else {
        format!(" ({year})")
    };

    format!(
        "  {label}. {marker} {title}{year}  {stars}\n",
        title = card.title,
        stars = stars_text(row),
    )
}

/// Star slots in display order, highest value first.
fn stars_text(row: Option<&StarRow>) -> String {
    match row {
        Some(row) => row
            .stars()
            .iter()
            .map(|star| if star.filled { '★' } else { '☆' })
            .collect(),
        None => String::new(),
    }
}
