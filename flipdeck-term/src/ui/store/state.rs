use core::fmt;
use std::collections::HashMap;

use flipdeck_lib::deck::Deck;

use crate::{
    config::Config,
    ui::{
        colors::{Colors, Theme},
        events::types::Command,
    },
};

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum ViewID {
    Main,
    Deck,
    Config,
    ViewSelect,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Whether a card's footer bar is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterState {
    #[default]
    Collapsed,
    Expanded,
}

/// Per-card interaction state, keyed by deck position in [`State`].
///
/// Explicit fields rather than view defaults or color proxies, so the
/// state survives scrolling away and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub footer: FooterState,
    pub liked: bool,
    pub bookmarked: bool,
}

impl CardState {
    /// Display string for the like counter.
    pub fn like_count(&self) -> &'static str {
        if self.liked {
            "1"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub error: Option<String>,
    pub render_view_select: bool,
    pub view_id: ViewID,
    pub config: Config,
    pub deck: Deck,
    pub position: usize,
    pub card_states: HashMap<usize, CardState>,
    pub colors: Colors,
    pub message: Option<String>,
    pub loading: bool,
    pub cmd_in_progress: Option<Command>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        let theme = Theme::from_string(&config.theme);

        Self {
            true_color_enabled: false,
            error: None,
            render_view_select: false,
            view_id: ViewID::Deck,
            colors: Colors::new(theme.to_palette(false), false),
            config,
            deck: Deck::default(),
            position: 0,
            card_states: HashMap::new(),
            message: None,
            loading: true,
            cmd_in_progress: None,
        }
    }
}
