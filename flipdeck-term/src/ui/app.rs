use color_eyre::eyre::{Context, Result};
use core::time;
use log::*;
use ratatui::{
    backend::TestBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event as CrossTermEvent, KeyCode,
            KeyModifiers,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    prelude::CrosstermBackend,
    Terminal,
};
use std::{
    cell::RefCell,
    io::{self, Stdout},
    sync::{mpsc::Sender, Arc},
};

use super::{
    events::types::Event,
    store::store::Store,
    views::{
        main::MainView,
        traits::{CustomWidgetContext, View},
    },
};

type Backend = CrosstermBackend<Stdout>;

pub struct App {
    terminal: RefCell<Terminal<Backend>>,
    // here to enable unit tests - not an ideal solution but okay for now
    test_terminal: Option<Terminal<TestBackend>>,
    store: Arc<Store>,
    main_view: Box<dyn View>,
    event_loop_sender: Sender<Event>,
}

pub fn create_app(tx: Sender<Event>, store: Arc<Store>) -> Result<App> {
    // setup terminal
    enable_raw_mode().wrap_err("failed to enter raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .wrap_err("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).wrap_err("failed to create terminal")?;
    Ok(App::new(tx, terminal, store))
}

impl App {
    fn new(tx: Sender<Event>, terminal: Terminal<Backend>, store: Arc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            test_terminal: None,
            store: Arc::clone(&store),
            main_view: Box::new(MainView::new(store, tx.clone())),
            event_loop_sender: tx,
        }
    }

    // only exposed in tests to enable unit testing App
    // not an ideal solution but okay for now
    #[cfg(test)]
    fn new_test(
        tx: Sender<Event>,
        terminal: Terminal<Backend>,
        test_terminal: Terminal<TestBackend>,
        store: Arc<Store>,
    ) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            test_terminal: Some(test_terminal),
            store: Arc::clone(&store),
            main_view: Box::new(MainView::new(store, tx.clone())),
            event_loop_sender: tx,
        }
    }

    pub fn launch(&self) -> Result<()> {
        self.start_app_loop()?;
        self.exit()?;
        Ok(())
    }

    fn start_app_loop(&self) -> Result<()> {
        loop {
            let state = self.store.get_state();

            let mut ctx = CustomWidgetContext {
                state: state.clone(),
                app_area: Rect::default(),
                events: self.event_loop_sender.clone(),
            };

            if self.test_terminal.is_some() {
                // app is under test - just draw once and exit
                // not an ideal solution but okay for now
                let mut terminal = self.test_terminal.clone().unwrap();
                let _ = terminal.draw(|f| {
                    ctx = CustomWidgetContext {
                        state,
                        app_area: f.area(),
                        events: self.event_loop_sender.clone(),
                    };
                    self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx)
                });
                return Ok(());
            }

            self.terminal.borrow_mut().draw(|f| {
                ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                    events: self.event_loop_sender.clone(),
                };
                self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx)
            })?;

            // Use poll here so we don't block the thread, this will allow
            // rendering of quotes from the loader as they arrive
            if let Ok(has_event) = event::poll(time::Duration::from_millis(60)) {
                if has_event {
                    let evt = event::read()?;

                    let handled = self.main_view.process_event(&evt, &ctx);

                    match evt {
                        CrossTermEvent::Key(key) => match key.code {
                            KeyCode::Char('q') => {
                                // allow overriding q key
                                if !handled {
                                    self.event_loop_sender.send(Event::Quit)?;
                                    return Ok(());
                                }
                            }
                            KeyCode::Char('c') => {
                                // do not allow overriding ctrl-c
                                if key.modifiers == KeyModifiers::CONTROL {
                                    info!("APP RECEIVED CONTROL-C SEQUENCE");
                                    self.event_loop_sender.send(Event::Quit)?;
                                    return Ok(());
                                }
                            }
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }
        }
    }

    fn exit(&self) -> Result<()> {
        if self.test_terminal.is_none() {
            let mut terminal = self.terminal.borrow_mut();
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            terminal.show_cursor()?;
        }
        Ok(())
    }
}
