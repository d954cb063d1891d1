use std::sync::{Arc, Mutex};

use crate::{
    config::ConfigManager,
    ui::colors::{Colors, Theme},
};

use super::{
    action::Action,
    state::{FooterState, State},
};

pub const BOOKMARKED_MESSAGE: &str = "Quote Bookmarked";
pub const BOOKMARK_REMOVED_MESSAGE: &str = "Bookmark Removed";

pub struct Reducer {
    config_manager: Arc<Mutex<ConfigManager>>,
}

impl Reducer {
    pub fn new(config_manager: Arc<Mutex<ConfigManager>>) -> Self {
        Self { config_manager }
    }

    pub fn reduce(&self, prev_state: State, action: Action) -> State {
        match action {
            Action::SetError(err) => {
                let mut state = prev_state.clone();
                state.error = err;
                state
            }
            Action::SetCommandInProgress(value) => {
                let mut state = prev_state.clone();
                state.cmd_in_progress = value;
                state
            }
            Action::ToggleViewSelect => {
                let mut state = prev_state.clone();
                state.render_view_select = !state.render_view_select;
                state
            }
            Action::UpdateView(id) => {
                let mut state = prev_state.clone();
                state.view_id = id;
                state
            }
            Action::UpdateMessage(message) => {
                let mut state = prev_state.clone();
                state.message = message;
                state
            }
            Action::PreviewTheme(theme) => {
                let mut state = prev_state.clone();
                state.colors = Colors::new(
                    theme.to_palette(state.true_color_enabled),
                    state.true_color_enabled,
                );
                state
            }
            Action::UpdateConfig(config) => {
                let mut state = prev_state.clone();
                let mut manager = self.config_manager.lock().unwrap();
                manager.update_config(config.clone());
                state.config = config;
                state
            }
            Action::SetConfig(config_id) => {
                let mut state = prev_state.clone();
                if let Some(conf) = self
                    .config_manager
                    .lock()
                    .unwrap()
                    .get_by_id(config_id.as_str())
                {
                    let theme = Theme::from_string(&conf.theme);
                    state.config = conf;
                    state.colors = Colors::new(
                        theme.to_palette(state.true_color_enabled),
                        state.true_color_enabled,
                    );
                }
                state
            }
            Action::CreateAndSetConfig(config) => {
                let mut state = prev_state.clone();
                let mut manager = self.config_manager.lock().unwrap();
                manager.create(&config);
                let theme = Theme::from_string(&config.theme);
                state.config = config.clone();
                state.colors = Colors::new(
                    theme.to_palette(state.true_color_enabled),
                    state.true_color_enabled,
                );
                state
            }
            Action::UpdateAllQuotes(deck) => {
                // whole-deck swap: positions no longer name the same
                // quotes, so card interaction state resets with it
                let mut state = prev_state.clone();
                state.deck = deck;
                state.position = 0;
                state.card_states.clear();
                state.loading = false;
                state
            }
            Action::SetLoading(value) => {
                let mut state = prev_state.clone();
                state.loading = value;
                state
            }
            Action::NextCard => {
                let mut state = prev_state.clone();
                if !state.deck.is_empty() && state.position + 1 < state.deck.len() {
                    state.position += 1;
                }
                state.message = None;
                state
            }
            Action::PreviousCard => {
                let mut state = prev_state.clone();
                state.position = state.position.saturating_sub(1);
                state.message = None;
                state
            }
            Action::JumpToFirst => {
                let mut state = prev_state.clone();
                state.position = 0;
                state.message = None;
                state
            }
            Action::ToggleFooter(position) => {
                let mut state = prev_state.clone();
                let card = state.card_states.entry(position).or_default();
                card.footer = match card.footer {
                    FooterState::Collapsed => FooterState::Expanded,
                    FooterState::Expanded => FooterState::Collapsed,
                };
                state
            }
            Action::ToggleLike(position) => {
                let mut state = prev_state.clone();
                let card = state.card_states.entry(position).or_default();
                card.liked = !card.liked;
                state
            }
            Action::ToggleBookmark(position) => {
                let mut state = prev_state.clone();
                let card = state.card_states.entry(position).or_default();
                card.bookmarked = !card.bookmarked;
                state.message = if card.bookmarked {
                    Some(String::from(BOOKMARKED_MESSAGE))
                } else {
                    Some(String::from(BOOKMARK_REMOVED_MESSAGE))
                };
                state
            }
        }
    }
}

#[cfg(test)]
#[path = "./tests/reducer_tests.rs"]
mod tests;
