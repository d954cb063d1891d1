use flipdeck_lib::sources::Quote;

use super::state::{CardState, State};

/// The quote under the pager's current position, if any.
pub fn get_current_quote(state: &State) -> Option<Quote> {
    state.deck.get(state.position).ok().cloned()
}

/// Interaction state for the current card, defaulting when the card has
/// never been touched.
pub fn get_current_card_state(state: &State) -> CardState {
    state
        .card_states
        .get(&state.position)
        .copied()
        .unwrap_or_default()
}

/// 1-based progress through the deck for display, None when empty.
pub fn get_progress(state: &State) -> Option<(usize, usize)> {
    if state.deck.is_empty() {
        None
    } else {
        Some((state.position + 1, state.deck.len()))
    }
}
