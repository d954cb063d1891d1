//! The deck: an ordered quote collection with indexed access
//!
//! Ordering is decided once, at construction. A shuffled deck is never
//! re-shuffled for the lifetime of the value.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::sources::Quote;

/// How a deck orders its quotes at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderPolicy {
    /// Shuffle once when the deck is built.
    #[default]
    Shuffled,
    /// Keep the source order.
    Preserved,
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error produced when a deck is indexed outside `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckError {
    /// The offending index.
    pub index: usize,
    /// The deck length at the time of the call.
    pub len: usize,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "deck index out of range: index {0}, len {1}",
            self.index, self.len
        )
    }
}

impl Error for DeckError {}

/// An ordered, immutable collection of quotes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    quotes: Vec<Quote>,
}

impl Deck {
    /// Builds a deck from loaded quotes, applying the order policy
    /// exactly once.
    pub fn new(mut quotes: Vec<Quote>, policy: OrderPolicy) -> Self {
        if policy == OrderPolicy::Shuffled {
            quotes.shuffle(&mut rand::rng());
        }

        Self { quotes }
    }

    /// Number of quotes in the deck.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when the deck holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Returns the quote at `index`, or a [`DeckError`] outside
    /// `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&Quote, DeckError> {
        self.quotes.get(index).ok_or(DeckError {
            index,
            len: self.quotes.len(),
        })
    }

    /// Iterates the quotes in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}

#[cfg(test)]
#[path = "./tests/deck_tests.rs"]
mod tests;
