use std::{cell::RefCell, sync::Arc};

use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::Rect,
};

use crate::ui::{
    components::table::{self, Table},
    store::{action::Action, state::ViewID, store::Store},
};

use super::traits::{CustomWidgetContext, CustomWidgetRef, EventHandler, View};

pub struct ViewSelect {
    store: Arc<Store>,
    view_ids: Vec<ViewID>,
    table: RefCell<Table>,
}

impl ViewSelect {
    pub fn new(view_ids: Vec<ViewID>, padding: usize, store: Arc<Store>) -> Self {
        let mut spacer = String::from("");

        if padding > 0 {
            for _ in 0..padding {
                spacer += " ";
            }
        }

        let table_items = view_ids
            .clone()
            .iter()
            .map(|v| vec![format!("{}{}", spacer, v.to_string())])
            .collect_vec();

        let mut table_select = Table::new(
            table_items,
            None,
            vec![15; view_ids.len()],
            table::DEFAULT_ITEM_HEIGHT,
        );

        table_select.next();

        Self {
            store,
            view_ids,
            table: RefCell::new(table_select),
        }
    }

    fn next(&self) {
        self.table.borrow_mut().next();
    }

    fn previous(&self) {
        self.table.borrow_mut().previous();
    }

    fn handle_selected(&self) {
        let i = self.table.borrow().selected();
        if let Some(selected) = i {
            let id = self.view_ids[selected].clone();
            self.store.dispatch(Action::UpdateView(id));
            self.store.dispatch(Action::ToggleViewSelect);
        }
    }
}

impl View for ViewSelect {
    fn id(&self) -> ViewID {
        ViewID::ViewSelect
    }
}

impl EventHandler for ViewSelect {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if !ctx.state.render_view_select {
            return false;
        }

        let mut handled = false;

        match evt {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('j') | KeyCode::Down => {
                            self.next();
                            handled = true;
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            self.previous();
                            handled = true;
                        }
                        KeyCode::Esc => {
                            if ctx.state.render_view_select {
                                self.store.dispatch(Action::ToggleViewSelect);
                                handled = true;
                            }
                        }
                        KeyCode::Enter => {
                            self.handle_selected();
                            handled = true;
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }

        handled
    }
}

impl CustomWidgetRef for ViewSelect {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        self.table.borrow().render_ref(area, buf, ctx);
    }
}

#[cfg(test)]
mod tests {
    use nanoid::nanoid;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};
    use std::{
        fs,
        sync::{mpsc, Mutex},
    };

    use crate::config::ConfigManager;

    use super::*;

    fn setup() -> (ViewSelect, Arc<Store>, String) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
        let store = Arc::new(Store::new(conf_manager));
        let view = ViewSelect::new(vec![ViewID::Deck, ViewID::Config], 2, Arc::clone(&store));
        (view, store, tmp_path)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    fn press(view: &ViewSelect, store: &Arc<Store>, code: KeyCode) -> bool {
        let channel = mpsc::channel();
        let ctx = CustomWidgetContext {
            state: store.get_state(),
            app_area: Rect::new(0, 0, 80, 24),
            events: channel.0,
        };

        let evt = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        view.process_event(&evt, &ctx)
    }

    #[test]
    fn ignores_events_when_hidden() {
        let (view, store, conf_path) = setup();
        assert!(!press(&view, &store, KeyCode::Enter));
        tear_down(conf_path);
    }

    #[test]
    fn selecting_a_view_updates_the_store() {
        let (view, store, conf_path) = setup();

        store.dispatch(Action::ToggleViewSelect);

        press(&view, &store, KeyCode::Char('j'));
        assert!(press(&view, &store, KeyCode::Enter));

        let state = store.get_state();
        assert_eq!(state.view_id, ViewID::Config);
        assert!(!state.render_view_select);

        tear_down(conf_path);
    }

    #[test]
    fn escape_closes_the_popover() {
        let (view, store, conf_path) = setup();

        store.dispatch(Action::ToggleViewSelect);
        assert!(press(&view, &store, KeyCode::Esc));
        assert!(!store.get_state().render_view_select);

        tear_down(conf_path);
    }
}
