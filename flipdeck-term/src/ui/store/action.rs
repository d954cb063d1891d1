use flipdeck_lib::deck::Deck;

use crate::{
    config::Config,
    ui::{colors::Theme, events::types::Command},
};

use super::state::ViewID;

#[derive(Debug)]
pub enum Action {
    SetError(Option<String>),
    SetCommandInProgress(Option<Command>),
    ToggleViewSelect,
    UpdateView(ViewID),
    UpdateMessage(Option<String>),
    PreviewTheme(Theme),
    UpdateConfig(Config),
    SetConfig(String),
    CreateAndSetConfig(Config),
    UpdateAllQuotes(Deck),
    SetLoading(bool),
    NextCard,
    PreviousCard,
    JumpToFirst,
    ToggleFooter(usize),
    ToggleLike(usize),
    ToggleBookmark(usize),
}
