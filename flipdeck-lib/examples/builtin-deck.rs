use flipdeck_lib::{
    deck::{Deck, OrderPolicy},
    sources::{builtin::BuiltinSource, QuoteSource},
};

fn main() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("failed to initialize logger");

    let source = BuiltinSource::new();
    let quotes = source.load().expect("builtin source cannot fail");
    let deck = Deck::new(quotes, OrderPolicy::Shuffled);

    for quote in deck.iter() {
        println!("\"{}\"\n  ~ {}\n", quote.quote, quote.author);
    }
}
