use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Read-only labeled value. Cycle fields render through this with a
/// focus marker so the user can tell which row h/l will act on.
pub struct Field {
    label: String,
    value: String,
    focused: bool,
}

impl Field {
    pub fn new(label: String, value: String) -> Self {
        Self {
            label,
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl CustomWidget for Field {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let label_style = Style::new()
            .fg(ctx.state.colors.label)
            .add_modifier(Modifier::BOLD);

        let value_style = if self.focused {
            Style::new().fg(ctx.state.colors.input_editing)
        } else {
            Style::new().fg(ctx.state.colors.card_fg)
        };

        let marker = if self.focused { "▸ " } else { "  " };

        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", self.label), label_style),
            Span::styled(self.value.clone(), value_style),
        ]);

        Paragraph::new(line).render(area, buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::{store::state::State, test_util::buffer_text};

    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn renders_field_component() {
        let field = Field::new("Source".to_string(), "Asset".to_string()).focused(true);
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        let state = State::default();
        let channel = std::sync::mpsc::channel();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: frame.area(),
                    events: channel.0,
                };

                field.render(frame.area(), frame.buffer_mut(), &ctx);
            })
            .unwrap();

        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Source: Asset"));
        assert!(content.contains("▸"));
    }
}
