//! Library package for loading and ordering motivational quote decks
//!
//! Quote records come from one of several interchangeable sources — a
//! bundled JSON asset, a remote JSON endpoint, or a compiled-in list —
//! and are collected into a [`deck::Deck`] that applies a one-time
//! ordering policy and exposes indexed access.
//!
//! # Examples
//!
//! ## Builtin deck
//!
//! ```bash
//! cargo run --example builtin-deck
//! ```
//!
//! ## Asset deck
//!
//! ```bash
//! cargo run --example asset-deck -- path/to/quotes.json
//! ```

#![deny(missing_docs)]
pub mod deck;
pub mod sources;
