//! The pager: one card at a time, flipped vertically.

use log::*;
use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::{
    components::card::Card,
    events::types::{Command, Event},
    share::export_card,
    store::{
        action::Action,
        derived::{get_current_card_state, get_current_quote, get_progress},
        state::{State, ViewID},
        store::Store,
    },
};

use super::traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View};

const LEGEND: &str =
    "(j/k) flip | (enter) footer | (l) like | (b) bookmark | (s) share | (r) first | (R) refresh";

pub struct DeckView {
    store: Arc<Store>,
    // last rendered card area, so share captures match the on-screen size
    card_area: RefCell<Rect>,
}

impl DeckView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            card_area: RefCell::new(Rect::default()),
        }
    }

    fn render_placeholder(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let text = if ctx.state.loading {
            "Fetching quotes…"
        } else {
            "No quotes to show - press (R) to refresh or check your source settings"
        };

        let mut lines: Vec<Line> = Vec::new();
        let top_pad = (area.height as usize).saturating_sub(1) / 2;
        for _ in 0..top_pad {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(text));

        let placeholder = Paragraph::new(lines)
            .centered()
            .style(Style::new().fg(ctx.state.colors.card_fg));

        placeholder.render(area, buf);
    }

    fn handle_share(&self, ctx: &CustomWidgetContext) {
        let state = &ctx.state;

        if let Some(quote) = get_current_quote(state) {
            let image = export_card(
                &quote,
                &get_current_card_state(state),
                get_progress(state),
                &state.colors,
                *self.card_area.borrow(),
            );

            if let Err(e) = ctx.events.send(Event::ExecCommand(Command::Share(image))) {
                error!("failed to queue share command: {e}");
            }
        }
    }
}

impl View for DeckView {
    fn id(&self) -> ViewID {
        ViewID::Deck
    }

    fn legend(&self, _state: &State) -> &str {
        LEGEND
    }
}

impl CustomWidgetRef for DeckView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let state = &ctx.state;

        match get_current_quote(state) {
            Some(quote) => {
                *self.card_area.borrow_mut() = area;

                let card = Card::new(quote, get_current_card_state(state))
                    .progress(get_progress(state));

                card.render(area, buf, ctx);
            }
            None => self.render_placeholder(area, buf, ctx),
        }
    }
}

impl EventHandler for DeckView {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let CrossTermEvent::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            let position = ctx.state.position;
            let has_cards = !ctx.state.deck.is_empty();

            match key.code {
                KeyCode::Char('j') | KeyCode::Down | KeyCode::PageDown => {
                    self.store.dispatch(Action::NextCard);
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp => {
                    self.store.dispatch(Action::PreviousCard);
                    handled = true;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if has_cards {
                        self.store.dispatch(Action::ToggleFooter(position));
                        handled = true;
                    }
                }
                KeyCode::Char('l') => {
                    if has_cards {
                        self.store.dispatch(Action::ToggleLike(position));
                        handled = true;
                    }
                }
                KeyCode::Char('b') => {
                    if has_cards {
                        self.store.dispatch(Action::ToggleBookmark(position));
                        handled = true;
                    }
                }
                KeyCode::Char('r') => {
                    self.store.dispatch(Action::JumpToFirst);
                    handled = true;
                }
                KeyCode::Char('R') => {
                    if let Err(e) = ctx.events.send(Event::Refresh) {
                        error!("failed to queue refresh: {e}");
                    }
                    handled = true;
                }
                KeyCode::Char('s') => {
                    if has_cards {
                        self.handle_share(ctx);
                        handled = true;
                    }
                }
                _ => {}
            }
        }

        handled
    }
}
