use std::env;

use flipdeck_lib::{
    deck::{Deck, OrderPolicy},
    sources::{asset::AssetSource, QuoteSource},
};

fn main() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("failed to initialize logger");

    let path = env::args()
        .nth(1)
        .unwrap_or(String::from("assets/quotes.json"));

    let source = AssetSource::new(&path);
    let quotes = source.load().expect("cannot read quote asset");
    let deck = Deck::new(quotes, OrderPolicy::Preserved);

    println!("loaded {} quotes from {path}", deck.len());

    for quote in deck.iter() {
        println!("\"{}\"\n  ~ {}\n", quote.quote, quote.author);
    }
}
