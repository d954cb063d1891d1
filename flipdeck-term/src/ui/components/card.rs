//! The quote card widget
//!
//! Renders one quote as a full card: wrapped body text, attribution
//! heading, optional category tag, the like/share/bookmark footer bar
//! when revealed, and the transient key-hint chrome. Rendering is a pure
//! function of `(Quote, CardState, Colors)` and never mutates any of
//! them, so the pager can re-render the same position as often as it
//! likes.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use flipdeck_lib::sources::Quote;

use crate::ui::{
    colors::Colors,
    store::state::{CardState, FooterState},
    views::traits::{CustomWidget, CustomWidgetContext},
};

/// Key hints shown on the live card and excluded from share captures.
pub const CHROME_HINT: &str = "(s) share  (r) first";

const LIKED_GLYPH: &str = "♥";
const UNLIKED_GLYPH: &str = "♡";
const BOOKMARKED_GLYPH: &str = "⚑";
const UNBOOKMARKED_GLYPH: &str = "⚐";

pub struct Card {
    quote: Quote,
    card_state: CardState,
    progress: Option<(usize, usize)>,
    chrome: bool,
}

impl Card {
    pub fn new(quote: Quote, card_state: CardState) -> Self {
        Self {
            quote,
            card_state,
            progress: None,
            chrome: true,
        }
    }

    pub fn progress(mut self, progress: Option<(usize, usize)>) -> Self {
        self.progress = progress;
        self
    }

    pub fn chrome(mut self, chrome: bool) -> Self {
        self.chrome = chrome;
        self
    }

    /// Renders the card without a context, so the share exporter can
    /// capture into an off-screen buffer.
    pub fn draw(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, colors: &Colors) {
        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .style(Style::new().bg(colors.card_bg))
            .padding(Padding::horizontal(2));

        if let Some((current, total)) = self.progress {
            block = block.title_top(Line::from(format!(" {current}/{total} ")).right_aligned());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let footer_height: u16 = match self.card_state.footer {
            FooterState::Expanded => 2,
            FooterState::Collapsed => 0,
        };
        let chrome_height: u16 = if self.chrome { 1 } else { 0 };

        let [content_area, footer_area, chrome_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(footer_height),
            Constraint::Length(chrome_height),
        ])
        .areas(inner);

        self.render_content(content_area, buf, colors);

        if footer_height > 0 {
            self.render_footer_bar(footer_area, buf, colors);
        }

        if chrome_height > 0 {
            let chrome = Paragraph::new(Line::from(CHROME_HINT))
                .right_aligned()
                .style(Style::new().fg(colors.tag_fg));
            chrome.render(chrome_area, buf);
        }
    }

    fn render_content(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, colors: &Colors) {
        let heading_color = if self.card_state.bookmarked {
            colors.bookmarked_fg
        } else {
            colors.heading_fg
        };

        let heading_style = Style::new().fg(heading_color).add_modifier(Modifier::BOLD);

        let body = format!("\u{201c}{}\u{201d}", self.quote.quote);
        let mut lines: Vec<Line> = wrap_text(&body, area.width as usize)
            .into_iter()
            .map(Line::from)
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("~ {}", self.quote.author),
            heading_style,
        ));

        // vertically center the quote block inside the content area
        let top_pad = (area.height as usize).saturating_sub(lines.len()) / 2;
        for _ in 0..top_pad {
            lines.insert(0, Line::raw(""));
        }

        let content = Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(colors.card_fg));

        content.render(area, buf);

        if let Some(tag) = &self.quote.theme {
            let tag_line = Paragraph::new(Line::from(format!("[{tag}]")))
                .right_aligned()
                .style(Style::new().fg(colors.tag_fg));
            let tag_area = Rect { height: 1, ..area };
            tag_line.render(tag_area, buf);
        }
    }

    fn render_footer_bar(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, colors: &Colors) {
        let like_glyph = if self.card_state.liked {
            LIKED_GLYPH
        } else {
            UNLIKED_GLYPH
        };

        let bookmark_glyph = if self.card_state.bookmarked {
            BOOKMARKED_GLYPH
        } else {
            UNBOOKMARKED_GLYPH
        };

        let like_style = if self.card_state.liked {
            Style::new().fg(colors.like_fg)
        } else {
            Style::new().fg(colors.card_fg)
        };

        let bookmark_style = if self.card_state.bookmarked {
            Style::new().fg(colors.bookmarked_fg)
        } else {
            Style::new().fg(colors.card_fg)
        };

        let divider = "─".repeat(area.width as usize);

        let icons = Line::from(vec![
            Span::styled(
                format!("{} {}", like_glyph, self.card_state.like_count()),
                like_style,
            ),
            Span::raw("    "),
            Span::styled("↗ share", Style::new().fg(colors.card_fg)),
            Span::raw("    "),
            Span::styled(bookmark_glyph, bookmark_style),
        ])
        .centered();

        let bar = Paragraph::new(vec![
            Line::styled(divider, Style::new().fg(colors.border_color)),
            icons,
        ]);

        bar.render(area, buf);
    }
}

impl CustomWidget for Card {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        self.draw(area, buf, &ctx.state.colors)
    }
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current);
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use crate::ui::{store::state::State, test_util::buffer_text};

    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn quote() -> Quote {
        Quote {
            quote: "Believe you can and you're halfway there.".to_string(),
            author: "Theodore Roosevelt".to_string(),
            theme: Some("Confidence".to_string()),
        }
    }

    fn render(card: Card) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let state = State::default();
        let channel = std::sync::mpsc::channel();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: frame.area(),
                    events: channel.0,
                };

                card.render(frame.area(), frame.buffer_mut(), &ctx);
            })
            .unwrap();

        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn renders_quote_heading_and_tag() {
        let card = Card::new(quote(), CardState::default()).progress(Some((3, 12)));
        let content = render(card);

        assert!(content.contains("Believe you can and"));
        assert!(content.contains("~ Theodore Roosevelt"));
        assert!(content.contains("[Confidence]"));
        assert!(content.contains("3/12"));
    }

    #[test]
    fn chrome_hint_is_present_on_the_live_card() {
        let card = Card::new(quote(), CardState::default());
        let content = render(card);
        assert!(content.contains(CHROME_HINT));
    }

    #[test]
    fn chrome_hint_can_be_excluded() {
        let card = Card::new(quote(), CardState::default()).chrome(false);
        let content = render(card);
        assert!(!content.contains(CHROME_HINT));
    }

    #[test]
    fn collapsed_footer_hides_the_bar() {
        let card = Card::new(quote(), CardState::default());
        let content = render(card);
        assert!(!content.contains("↗ share"));
    }

    #[test]
    fn expanded_footer_shows_like_count_and_glyphs() {
        let mut card_state = CardState::default();
        card_state.footer = FooterState::Expanded;
        card_state.liked = true;

        let card = Card::new(quote(), card_state);
        let content = render(card);

        assert!(content.contains("♥ 1"));
        assert!(content.contains("↗ share"));
        assert!(content.contains("⚐"));
    }

    #[test]
    fn toggled_off_like_clears_the_count() {
        let mut card_state = CardState::default();
        card_state.footer = FooterState::Expanded;

        let card = Card::new(quote(), card_state);
        let content = render(card);

        assert!(content.contains("♡"));
        assert!(!content.contains("♥ 1"));
    }

    #[test]
    fn wraps_long_text_at_word_boundaries() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_handles_zero_width() {
        assert!(wrap_text("anything", 0).is_empty());
    }
}
