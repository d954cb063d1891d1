use nanoid::nanoid;
use std::fs;

use flipdeck_lib::{
    deck::{Deck, OrderPolicy},
    sources::Quote,
};

use crate::ui::store::state::{CardState, FooterState, ViewID};

use super::*;

fn setup() -> (Reducer, State, String) {
    fs::create_dir_all("generated").unwrap();
    let tmp_path = format!("generated/{}.yml", nanoid!());
    let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
    let reducer = Reducer::new(conf_manager);
    (reducer, State::default(), tmp_path)
}

fn tear_down(conf_path: String) {
    fs::remove_file(conf_path).unwrap();
}

fn deck(n: usize) -> Deck {
    let quotes = (0..n)
        .map(|i| Quote {
            quote: format!("quote {i}"),
            author: format!("author {i}"),
            theme: None,
        })
        .collect();
    Deck::new(quotes, OrderPolicy::Preserved)
}

#[test]
fn toggling_like_twice_restores_original_state() {
    let (reducer, state, conf_path) = setup();

    let original = CardState::default();
    assert_eq!(original.like_count(), "");

    let state = reducer.reduce(state, Action::ToggleLike(0));
    let liked = state.card_states.get(&0).unwrap();
    assert!(liked.liked);
    assert_eq!(liked.like_count(), "1");

    let state = reducer.reduce(state, Action::ToggleLike(0));
    let unliked = state.card_states.get(&0).unwrap();
    assert_eq!(*unliked, original);
    assert_eq!(unliked.like_count(), "");

    tear_down(conf_path);
}

#[test]
fn each_bookmark_transition_emits_exactly_one_notification() {
    let (reducer, state, conf_path) = setup();

    let state = reducer.reduce(state, Action::ToggleBookmark(3));
    assert!(state.card_states.get(&3).unwrap().bookmarked);
    assert_eq!(state.message, Some(BOOKMARKED_MESSAGE.to_string()));

    let state = reducer.reduce(state, Action::ToggleBookmark(3));
    assert!(!state.card_states.get(&3).unwrap().bookmarked);
    assert_eq!(state.message, Some(BOOKMARK_REMOVED_MESSAGE.to_string()));

    // unrelated actions do not re-emit the notification
    let state = reducer.reduce(state, Action::NextCard);
    assert!(state.message.is_none());

    tear_down(conf_path);
}

#[test]
fn toggling_footer_flips_between_collapsed_and_expanded() {
    let (reducer, state, conf_path) = setup();

    assert_eq!(CardState::default().footer, FooterState::Collapsed);

    let state = reducer.reduce(state, Action::ToggleFooter(1));
    assert_eq!(
        state.card_states.get(&1).unwrap().footer,
        FooterState::Expanded
    );

    let state = reducer.reduce(state, Action::ToggleFooter(1));
    assert_eq!(
        state.card_states.get(&1).unwrap().footer,
        FooterState::Collapsed
    );

    tear_down(conf_path);
}

#[test]
fn card_state_survives_scrolling_away_and_back() {
    let (reducer, mut state, conf_path) = setup();
    state.deck = deck(3);

    let state = reducer.reduce(state, Action::ToggleLike(0));
    let state = reducer.reduce(state, Action::NextCard);
    let state = reducer.reduce(state, Action::NextCard);
    let state = reducer.reduce(state, Action::JumpToFirst);

    assert_eq!(state.position, 0);
    assert!(state.card_states.get(&0).unwrap().liked);

    tear_down(conf_path);
}

#[test]
fn navigation_clamps_to_the_deck_bounds() {
    let (reducer, mut state, conf_path) = setup();
    state.deck = deck(2);

    // cannot move past the last card
    let state = reducer.reduce(state, Action::NextCard);
    assert_eq!(state.position, 1);
    let state = reducer.reduce(state, Action::NextCard);
    assert_eq!(state.position, 1);

    // cannot move before the first card
    let state = reducer.reduce(state, Action::PreviousCard);
    assert_eq!(state.position, 0);
    let state = reducer.reduce(state, Action::PreviousCard);
    assert_eq!(state.position, 0);

    tear_down(conf_path);
}

#[test]
fn navigation_is_a_noop_on_an_empty_deck() {
    let (reducer, state, conf_path) = setup();

    let state = reducer.reduce(state, Action::NextCard);
    assert_eq!(state.position, 0);

    let state = reducer.reduce(state, Action::PreviousCard);
    assert_eq!(state.position, 0);

    tear_down(conf_path);
}

#[test]
fn jump_to_first_resets_position() {
    let (reducer, mut state, conf_path) = setup();
    state.deck = deck(5);
    state.position = 4;

    let state = reducer.reduce(state, Action::JumpToFirst);
    assert_eq!(state.position, 0);

    tear_down(conf_path);
}

#[test]
fn update_all_quotes_swaps_the_deck_atomically() {
    let (reducer, mut state, conf_path) = setup();
    state.deck = deck(2);
    state.position = 1;
    state.loading = true;
    state
        .card_states
        .insert(1, CardState {
            footer: FooterState::Expanded,
            liked: true,
            bookmarked: false,
        });

    let state = reducer.reduce(state, Action::UpdateAllQuotes(deck(4)));

    assert_eq!(state.deck.len(), 4);
    assert_eq!(state.position, 0);
    assert!(state.card_states.is_empty());
    assert!(!state.loading);

    tear_down(conf_path);
}

#[test]
fn failed_load_leaves_the_deck_untouched() {
    let (reducer, mut state, conf_path) = setup();
    state.deck = deck(2);

    // the loader only clears the loading flag on failure
    let state = reducer.reduce(state, Action::SetLoading(false));

    assert_eq!(state.deck.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());

    tear_down(conf_path);
}

#[test]
fn update_config_persists_through_the_manager() {
    let (reducer, state, conf_path) = setup();

    let mut config = state.config.clone();
    config.theme = "Red".to_string();

    let state = reducer.reduce(state, Action::UpdateConfig(config.clone()));
    assert_eq!(state.config.theme, "Red");

    // a fresh manager on the same path sees the persisted change
    let manager = ConfigManager::new(conf_path.as_str());
    assert_eq!(manager.get_by_id("default").unwrap().theme, "Red");

    tear_down(conf_path);
}

#[test]
fn view_select_toggle_and_view_update() {
    let (reducer, state, conf_path) = setup();

    let state = reducer.reduce(state, Action::ToggleViewSelect);
    assert!(state.render_view_select);

    let state = reducer.reduce(state, Action::UpdateView(ViewID::Config));
    assert_eq!(state.view_id, ViewID::Config);

    let state = reducer.reduce(state, Action::ToggleViewSelect);
    assert!(!state.render_view_select);

    tear_down(conf_path);
}
