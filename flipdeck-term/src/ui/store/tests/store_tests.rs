use nanoid::nanoid;
use std::fs;

use super::*;

fn setup() -> (Store, String) {
    fs::create_dir_all("generated").unwrap();
    let tmp_path = format!("generated/{}.yml", nanoid!());
    let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
    let store = Store::new(conf_manager);
    (store, tmp_path)
}

fn tear_down(conf_path: String) {
    fs::remove_file(conf_path).unwrap();
}

#[test]
fn test_new() {
    let (store, conf_path) = setup();
    assert!(store.state.lock().is_ok());
    tear_down(conf_path);
}

#[test]
fn dispatch_swaps_state() {
    let (store, conf_path) = setup();

    assert!(store.get_state().message.is_none());

    store.dispatch(Action::UpdateMessage(Some("hello".to_string())));
    assert_eq!(store.get_state().message, Some("hello".to_string()));

    store.dispatch(Action::UpdateMessage(None));
    assert!(store.get_state().message.is_none());

    tear_down(conf_path);
}

#[test]
fn starts_on_deck_view_with_empty_deck() {
    let (store, conf_path) = setup();

    let state = store.get_state();
    assert_eq!(state.view_id, ViewID::Deck);
    assert!(state.deck.is_empty());
    assert!(state.loading);

    tear_down(conf_path);
}
