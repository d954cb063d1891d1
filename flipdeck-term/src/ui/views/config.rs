use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
};

use flipdeck_lib::deck::OrderPolicy;

use crate::{
    config::SourceKind,
    ui::{
        colors::Theme,
        components::{
            field::Field,
            header::Header,
            input::{Input, InputState},
        },
        store::{
            action::Action,
            state::{State, ViewID},
            store::Store,
        },
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

const THEMES: [Theme; 4] = [Theme::Blue, Theme::Emerald, Theme::Indigo, Theme::Red];
const SOURCES: [SourceKind; 3] = [SourceKind::Asset, SourceKind::Remote, SourceKind::Builtin];
const ORDERS: [OrderPolicy; 2] = [OrderPolicy::Shuffled, OrderPolicy::Preserved];

const LEGEND: &str = "(j/k) field | (h/l) cycle | (e) edit | (enter) save";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    Source,
    RemoteUrl,
    AssetPath,
    Order,
    Theme,
}

pub struct ConfigView {
    store: Arc<Store>,
    focus: RefCell<Focus>,
    source_index: RefCell<usize>,
    order_index: RefCell<usize>,
    theme_index: RefCell<usize>,
    remote_url_state: RefCell<InputState>,
    asset_path_state: RefCell<InputState>,
}

impl ConfigView {
    pub fn new(store: Arc<Store>) -> Self {
        let state = store.get_state();
        let config = &state.config;

        let theme = Theme::from_string(&config.theme);
        let (theme_idx, _) = THEMES
            .iter()
            .enumerate()
            .find(|(_, t)| **t == theme)
            .unwrap();

        let (source_idx, _) = SOURCES
            .iter()
            .enumerate()
            .find(|(_, s)| **s == config.source)
            .unwrap();

        let (order_idx, _) = ORDERS
            .iter()
            .enumerate()
            .find(|(_, o)| **o == config.order)
            .unwrap();

        Self {
            store,
            focus: RefCell::new(Focus::Source),
            source_index: RefCell::new(source_idx),
            order_index: RefCell::new(order_idx),
            theme_index: RefCell::new(theme_idx),
            remote_url_state: RefCell::new(InputState {
                editing: false,
                value: config.remote_url.clone(),
            }),
            asset_path_state: RefCell::new(InputState {
                editing: false,
                value: config.asset_path.clone(),
            }),
        }
    }

    fn focus_next(&self) {
        let next = match *self.focus.borrow() {
            Focus::Source => Focus::RemoteUrl,
            Focus::RemoteUrl => Focus::AssetPath,
            Focus::AssetPath => Focus::Order,
            Focus::Order => Focus::Theme,
            Focus::Theme => Focus::Source,
        };
        *self.focus.borrow_mut() = next;
    }

    fn focus_previous(&self) {
        let previous = match *self.focus.borrow() {
            Focus::Source => Focus::Theme,
            Focus::RemoteUrl => Focus::Source,
            Focus::AssetPath => Focus::RemoteUrl,
            Focus::Order => Focus::AssetPath,
            Focus::Theme => Focus::Order,
        };
        *self.focus.borrow_mut() = previous;
    }

    fn editing(&self) -> bool {
        self.remote_url_state.borrow().editing || self.asset_path_state.borrow().editing
    }

    fn begin_editing(&self) {
        match *self.focus.borrow() {
            Focus::RemoteUrl => self.remote_url_state.borrow_mut().editing = true,
            Focus::AssetPath => self.asset_path_state.borrow_mut().editing = true,
            _ => {}
        }
    }

    fn stop_editing(&self) {
        self.remote_url_state.borrow_mut().editing = false;
        self.asset_path_state.borrow_mut().editing = false;
    }

    fn push_input_char(&self, char: char) {
        match *self.focus.borrow() {
            Focus::RemoteUrl => self.remote_url_state.borrow_mut().value.push(char),
            Focus::AssetPath => self.asset_path_state.borrow_mut().value.push(char),
            _ => {}
        };
    }

    fn pop_input_char(&self) {
        match *self.focus.borrow() {
            Focus::RemoteUrl => {
                self.remote_url_state.borrow_mut().value.pop();
            }
            Focus::AssetPath => {
                self.asset_path_state.borrow_mut().value.pop();
            }
            _ => {}
        };
    }

    fn cycle(&self, forward: bool) {
        match *self.focus.borrow() {
            Focus::Source => {
                let count = SOURCES.len();
                let idx = *self.source_index.borrow();
                *self.source_index.borrow_mut() =
                    if forward { (idx + 1) % count } else { (idx + count - 1) % count };
            }
            Focus::Order => {
                let count = ORDERS.len();
                let idx = *self.order_index.borrow();
                *self.order_index.borrow_mut() =
                    if forward { (idx + 1) % count } else { (idx + count - 1) % count };
            }
            Focus::Theme => {
                let count = THEMES.len();
                let idx = *self.theme_index.borrow();
                let new_idx = if forward { (idx + 1) % count } else { (idx + count - 1) % count };
                *self.theme_index.borrow_mut() = new_idx;
                // live preview on the card behind the settings
                self.store
                    .dispatch(Action::PreviewTheme(THEMES[new_idx].clone()));
            }
            _ => {}
        }
    }

    fn set_config(&self, state: &State) {
        let mut config = state.config.clone();
        config.source = SOURCES[*self.source_index.borrow()];
        config.order = ORDERS[*self.order_index.borrow()];
        config.theme = THEMES[*self.theme_index.borrow()].clone().to_string();
        config.remote_url = self.remote_url_state.borrow().value.clone();
        config.asset_path = self.asset_path_state.borrow().value.clone();
        self.store.dispatch(Action::UpdateConfig(config));
    }
}

impl View for ConfigView {
    fn id(&self) -> ViewID {
        ViewID::Config
    }

    fn legend(&self, _state: &State) -> &str {
        LEGEND
    }
}

impl CustomWidgetRef for ConfigView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let focus = *self.focus.borrow();

        let [label_area, source_area, url_area, asset_area, order_area, theme_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
            ])
            .areas(area);

        let header = Header::new("Settings".to_string());
        header.render(label_area, buf, ctx);

        let source = Field::new(
            "Source".to_string(),
            SOURCES[*self.source_index.borrow()].to_string(),
        )
        .focused(focus == Focus::Source);
        source.render(source_area, buf, ctx);

        let url = Input::new("Remote URL".to_string()).focused(focus == Focus::RemoteUrl);
        url.render(url_area, buf, &mut self.remote_url_state.borrow_mut(), ctx);

        let asset = Input::new("Asset path".to_string()).focused(focus == Focus::AssetPath);
        asset.render(asset_area, buf, &mut self.asset_path_state.borrow_mut(), ctx);

        let order = Field::new(
            "Order".to_string(),
            ORDERS[*self.order_index.borrow()].to_string(),
        )
        .focused(focus == Focus::Order);
        order.render(order_area, buf, ctx);

        let theme = Field::new(
            "Theme".to_string(),
            THEMES[*self.theme_index.borrow()].to_string(),
        )
        .focused(focus == Focus::Theme);
        theme.render(theme_area, buf, ctx);
    }
}

impl EventHandler for ConfigView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            if self.editing() {
                match key.code {
                    KeyCode::Esc => {
                        self.stop_editing();
                        handled = true;
                    }
                    KeyCode::Enter => {
                        self.stop_editing();
                        self.set_config(&ctx.state);
                        handled = true;
                    }
                    KeyCode::Backspace => {
                        self.pop_input_char();
                        handled = true;
                    }
                    KeyCode::Char(c) => {
                        self.push_input_char(c);
                        handled = true;
                    }
                    _ => {}
                }

                return handled;
            }

            match key.code {
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                    self.focus_next();
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.focus_previous();
                    handled = true;
                }
                KeyCode::Char('h') | KeyCode::Left => {
                    self.cycle(false);
                    handled = true;
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.cycle(true);
                    handled = true;
                }
                KeyCode::Char('e') => {
                    self.begin_editing();
                    handled = true;
                }
                KeyCode::Enter => {
                    self.set_config(&ctx.state);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}
