//! Share capture
//!
//! Captures a card's current visual state into an off-screen buffer at
//! the card's on-screen dimensions, with the transient key-hint chrome
//! excluded. The capture is a second render pass parameterized with the
//! hide flag, so the live card is never mutated - there is no
//! hide/restore pairing to get wrong when a capture fails.

use ratatui::{buffer::Buffer, layout::Rect};

use flipdeck_lib::sources::Quote;

use crate::ui::{colors::Colors, components::card::Card, store::state::CardState};

/// A captured card, ready to hand to the share surface.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CardImage {
    pub width: u16,
    pub height: u16,
    pub lines: Vec<String>,
}

impl CardImage {
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn export_card(
    quote: &Quote,
    card_state: &CardState,
    progress: Option<(usize, usize)>,
    colors: &Colors,
    size: Rect,
) -> CardImage {
    let capture = Rect::new(0, 0, size.width, size.height);
    let mut buf = Buffer::empty(capture);

    let card = Card::new(quote.clone(), *card_state)
        .progress(progress)
        .chrome(false);

    card.draw(capture, &mut buf, colors);

    let mut lines: Vec<String> = Vec::new();

    for y in capture.top()..capture.bottom() {
        let mut line = String::new();
        for x in capture.left()..capture.right() {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    CardImage {
        width: capture.width,
        height: capture.height,
        lines,
    }
}
