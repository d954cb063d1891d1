//! Compiled-in quote source
//!
//! Three parallel arrays indexed in lockstep: headings (attribution),
//! contents (quote text), and footnotes (category tag). The arrays must
//! stay the same length; the test below flags any drift.

use super::{Quote, QuoteSource, SourceError};

const HEADINGS: [&str; 8] = [
    "Theodore Roosevelt",
    "Eleanor Roosevelt",
    "Confucius",
    "Maya Angelou",
    "Walt Disney",
    "Nelson Mandela",
    "Seneca",
    "Amelia Earhart",
];

const CONTENTS: [&str; 8] = [
    "Believe you can and you're halfway there.",
    "The future belongs to those who believe in the beauty of their dreams.",
    "It does not matter how slowly you go as long as you do not stop.",
    "You will face many defeats in life, but never let yourself be defeated.",
    "The way to get started is to quit talking and begin doing.",
    "It always seems impossible until it's done.",
    "Luck is what happens when preparation meets opportunity.",
    "The most effective way to do it, is to do it.",
];

const FOOTNOTES: [&str; 8] = [
    "Confidence",
    "Dreams",
    "Perseverance",
    "Resilience",
    "Action",
    "Perseverance",
    "Preparation",
    "Action",
];

/// Serves the compiled-in quote list. Never fails.
pub struct BuiltinSource {}

impl BuiltinSource {
    /// Creates the builtin source.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Quote>, SourceError> {
        let quotes = (0..CONTENTS.len())
            .map(|i| Quote {
                quote: CONTENTS[i].to_string(),
                author: HEADINGS[i].to_string(),
                theme: Some(FOOTNOTES[i].to_string()),
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_arrays_stay_in_lockstep() {
        assert_eq!(HEADINGS.len(), CONTENTS.len());
        assert_eq!(FOOTNOTES.len(), CONTENTS.len());
    }

    #[test]
    fn loads_well_formed_quotes() {
        let quotes = BuiltinSource::new().load().unwrap();

        assert_eq!(quotes.len(), CONTENTS.len());

        for q in quotes.iter() {
            assert!(!q.quote.is_empty());
            assert!(!q.author.is_empty());
            assert!(q.theme.is_some());
        }
    }
}
