use color_eyre::eyre::Result;
use log::*;
use mockall_double::double;
use std::sync::{
    mpsc::{Receiver, Sender},
    Arc, Mutex,
};

use crate::ui::store::{action::Action, store::Store};

use super::types::{Command as AppCommand, Event};

#[double]
use super::commander::Commander;

pub struct EventManager {
    rx: Arc<Mutex<Receiver<Event>>>,
    refresh_tx: Sender<()>,
    store: Arc<Store>,
    commander: Commander,
}

impl EventManager {
    pub fn new(rx: Receiver<Event>, refresh_tx: Sender<()>, store: Arc<Store>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
            refresh_tx,
            store,
            commander: Commander::new(),
        }
    }

    pub fn start_event_loop(&self) -> Result<()> {
        ctrlc::set_handler(move || debug!("captured ctrl-c in event thread"))
            .expect("Error setting Ctrl-C handler");

        let rx = Arc::clone(&self.rx);

        loop {
            let locked_rx = rx.lock().unwrap();
            if let Ok(evt) = locked_rx.recv() {
                // event loop
                match evt {
                    Event::ExecCommand(cmd) => {
                        self.handle_cmd(cmd);
                    }
                    Event::Refresh => {
                        self.handle_refresh();
                    }
                    Event::Quit => break,
                }
            }
        }

        Ok(())
    }

    fn handle_refresh(&self) {
        self.store.dispatch(Action::SetLoading(true));
        self.store
            .dispatch(Action::UpdateMessage(Some(String::from(
                "Refreshing quotes…",
            ))));

        if self.refresh_tx.send(()).is_err() {
            warn!("quote loader is gone, refresh dropped");
            self.store.dispatch(Action::SetLoading(false));
        }
    }

    fn handle_cmd(&self, cmd: AppCommand) {
        let state = self.store.get_state();

        if state.cmd_in_progress.is_some() {
            return;
        }

        self.store
            .dispatch(Action::SetCommandInProgress(Some(cmd.clone())));

        match cmd {
            AppCommand::Share(image) => match self.commander.share(image) {
                Ok(path) => {
                    self.store.dispatch(Action::UpdateMessage(Some(format!(
                        "Card saved to {}",
                        path.display()
                    ))));
                }
                Err(e) => {
                    self.store.dispatch(Action::SetError(Some(e.to_string())));
                }
            },
        }

        self.store.dispatch(Action::SetCommandInProgress(None));
    }
}

#[cfg(test)]
mod tests {
    use nanoid::nanoid;
    use std::{fs, path::PathBuf, sync::mpsc};

    use crate::{config::ConfigManager, ui::share::CardImage};

    use super::*;

    fn new_with_commander(
        rx: Arc<Mutex<Receiver<Event>>>,
        refresh_tx: Sender<()>,
        store: Arc<Store>,
        commander: Commander,
    ) -> EventManager {
        EventManager {
            rx,
            refresh_tx,
            store,
            commander,
        }
    }

    fn setup(commander: Commander) -> (Arc<Store>, EventManager, Receiver<()>, String) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
        let store = Arc::new(Store::new(conf_manager));
        let (_tx, rx) = mpsc::channel::<Event>();
        let (refresh_tx, refresh_rx) = mpsc::channel::<()>();
        let evt_manager = new_with_commander(
            Arc::new(Mutex::new(rx)),
            refresh_tx,
            Arc::clone(&store),
            commander,
        );
        (store, evt_manager, refresh_rx, tmp_path)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    fn image() -> CardImage {
        CardImage {
            width: 10,
            height: 4,
            lines: vec!["a card".to_string()],
        }
    }

    #[test]
    fn share_failure_surfaces_as_error() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_share()
            .returning(|_| Err(Box::from("mock error")));

        let (store, evt_manager, _refresh_rx, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Share(image()));

        let state = store.get_state();
        assert!(state.error.is_some());
        assert!(state.cmd_in_progress.is_none());

        tear_down(conf_path);
    }

    #[test]
    fn share_success_reports_the_saved_path() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_share()
            .returning(|_| Ok(PathBuf::from("generated/card.txt")));

        let (store, evt_manager, _refresh_rx, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Share(image()));

        let state = store.get_state();
        assert!(state.error.is_none());
        assert_eq!(
            state.message,
            Some("Card saved to generated/card.txt".to_string())
        );

        tear_down(conf_path);
    }

    #[test]
    fn in_progress_command_blocks_new_commands() {
        let mut mock_commander = Commander::default();
        mock_commander.expect_share().times(0);

        let (store, evt_manager, _refresh_rx, conf_path) = setup(mock_commander);

        store.dispatch(Action::SetCommandInProgress(Some(AppCommand::Share(
            image(),
        ))));

        evt_manager.handle_cmd(AppCommand::Share(image()));

        tear_down(conf_path);
    }

    #[test]
    fn refresh_signals_the_loader_and_sets_loading() {
        let mock_commander = Commander::default();
        let (store, evt_manager, refresh_rx, conf_path) = setup(mock_commander);

        evt_manager.handle_refresh();

        assert!(refresh_rx.try_recv().is_ok());
        let state = store.get_state();
        assert!(state.loading);
        assert!(state.message.is_some());

        tear_down(conf_path);
    }

    #[test]
    fn refresh_with_dead_loader_clears_loading() {
        let mock_commander = Commander::default();
        let (store, evt_manager, refresh_rx, conf_path) = setup(mock_commander);

        drop(refresh_rx);
        evt_manager.handle_refresh();

        let state = store.get_state();
        assert!(!state.loading);

        tear_down(conf_path);
    }
}
