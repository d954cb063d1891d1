use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use config::{Config, ConfigManager, SourceKind};
use directories::ProjectDirs;
use flipdeck_lib::{
    deck::{Deck, OrderPolicy},
    sources::{
        asset::AssetSource,
        builtin::BuiltinSource,
        cached::{CachedSource, CACHE_EXPIRY},
        remote::RemoteSource,
        QuoteSource,
    },
};
use log::*;
use simplelog;
use std::{
    fs,
    path::PathBuf,
    sync::{
        mpsc::{channel, Receiver},
        Arc, Mutex, Weak,
    },
    thread::{self, JoinHandle},
};

use ui::{
    app, events,
    store::{action::Action, store::Store},
};

mod config;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Only prints logs foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Quote source to load: asset, remote, or builtin
    #[arg(short, long)]
    source: Option<String>,

    /// Override the remote quotes URL
    #[arg(short, long)]
    url: Option<String>,

    /// Override the bundled asset path
    #[arg(short, long)]
    asset: Option<String>,

    /// Keep the source order instead of shuffling once per load
    #[arg(long, default_value_t = false)]
    preserve_order: bool,
}

fn initialize_logger(args: &Args) {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

fn get_project_config_path() -> String {
    let project_dir = ProjectDirs::from("", "", "flipdeck").unwrap();
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir).unwrap();
    config_dir.join("config.yml").to_str().unwrap().to_string()
}

fn get_project_cache_path() -> PathBuf {
    let project_dir = ProjectDirs::from("", "", "flipdeck").unwrap();
    let cache_dir = project_dir.cache_dir();
    fs::create_dir_all(cache_dir).unwrap();
    cache_dir.to_path_buf()
}

fn process_load(source: &dyn QuoteSource, policy: OrderPolicy, store: &Weak<Store>, refresh: bool) {
    let result = if refresh {
        source.refresh()
    } else {
        source.load()
    };

    // the UI may have torn down while the load was in flight
    let Some(store) = store.upgrade() else {
        debug!("store released, dropping load result");
        return;
    };

    match result {
        Ok(quotes) => {
            debug!("loaded {} quotes", quotes.len());
            store.dispatch(Action::UpdateAllQuotes(Deck::new(quotes, policy)));
        }
        Err(e) => {
            // an empty deck renders as a placeholder, never a crash
            warn!("failed to load quotes: {e}");
            store.dispatch(Action::SetLoading(false));
        }
    }
}

fn monitor_quotes(
    source: Box<dyn QuoteSource>,
    policy: OrderPolicy,
    store: Weak<Store>,
    refresh_rx: Receiver<()>,
) -> JoinHandle<()> {
    info!("starting quote loader");

    thread::spawn(move || {
        process_load(source.as_ref(), policy, &store, false);

        while refresh_rx.recv().is_ok() {
            if store.upgrade().is_none() {
                break;
            }
            process_load(source.as_ref(), policy, &store, true);
        }

        debug!("quote loader exiting");
    })
}

fn build_source(config: &Config) -> Box<dyn QuoteSource> {
    match config.source {
        SourceKind::Asset => Box::new(AssetSource::new(&config.asset_path)),
        SourceKind::Remote => Box::new(CachedSource::new(
            RemoteSource::new(&config.remote_url),
            get_project_cache_path(),
            CACHE_EXPIRY,
        )),
        SourceKind::Builtin => Box::new(BuiltinSource::new()),
    }
}

fn init(args: &Args) -> Result<(Config, Arc<Store>)> {
    let config_path = get_project_config_path();
    let config_manager = Arc::new(Mutex::new(ConfigManager::new(&config_path)));
    let store = Arc::new(Store::new(Arc::clone(&config_manager)));

    let mut config = store.get_state().config;
    let mut overridden = false;

    if let Some(source) = &args.source {
        let kind = config::parse_source_kind(source)
            .ok_or_else(|| eyre!("unknown quote source: {source}"))?;
        config.source = kind;
        overridden = true;
    }

    if let Some(url) = &args.url {
        config.remote_url = url.clone();
        overridden = true;
    }

    if let Some(asset) = &args.asset {
        config.asset_path = asset.clone();
        overridden = true;
    }

    if args.preserve_order {
        config.order = OrderPolicy::Preserved;
        overridden = true;
    }

    if overridden {
        store.dispatch(Action::UpdateConfig(config.clone()));
    }

    Ok((config, store))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args);

    let (config, store) = init(&args)?;
    let source = build_source(&config);

    let (refresh_tx, refresh_rx) = channel();

    // don't join this handle - the loader lives for the life of the process
    monitor_quotes(source, config.order, Arc::downgrade(&store), refresh_rx);

    if args.debug {
        loop {}
    }

    let app_channel = channel();

    let event_manager =
        events::manager::EventManager::new(app_channel.1, refresh_tx, Arc::clone(&store));

    let application = app::create_app(app_channel.0, store)?;

    let handle = thread::spawn(move || event_manager.start_event_loop());

    application.launch()?;
    handle.join().unwrap()
}
