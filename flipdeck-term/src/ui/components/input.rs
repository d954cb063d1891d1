use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

/// Editable labeled value. The caller owns the [`InputState`] and feeds
/// key events into it; this widget only draws.
pub struct Input {
    label: String,
    focused: bool,
}

impl Input {
    pub fn new(label: String) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        let label_style = Style::new()
            .fg(ctx.state.colors.label)
            .add_modifier(Modifier::BOLD);

        let value_style = if state.editing {
            Style::new().fg(ctx.state.colors.input_editing)
        } else if self.focused {
            Style::new()
                .fg(ctx.state.colors.card_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(ctx.state.colors.card_fg)
        };

        let marker = if self.focused { "▸ " } else { "  " };
        let cursor = if state.editing { "█" } else { "" };

        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", self.label), label_style),
            Span::styled(format!("{}{}", state.value, cursor), value_style),
        ]);

        Paragraph::new(line).render(area, buf)
    }
}
