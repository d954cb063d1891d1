//! Scrollable table component with selection support.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{
        Cell, HighlightSpacing, Row, ScrollbarState, StatefulWidget, Table as RatatuiTable,
        TableState,
    },
};
use std::cell::RefCell;

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef};

use super::scrollbar::ScrollBar;

/// Default height for table rows.
pub const DEFAULT_ITEM_HEIGHT: usize = 3;

/// Scrollable table with optional headers, row selection, and scrollbar.
pub struct Table {
    headers: Option<Vec<String>>,
    items: Vec<Vec<String>>,
    item_height: usize,
    column_sizes: Vec<u16>,
    centering_breaks: String,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Table {
    pub fn new(
        items: Vec<Vec<String>>,
        headers: Option<Vec<String>>,
        column_sizes: Vec<u16>,
        item_height: usize,
    ) -> Self {
        let mut scroll_height = item_height;

        if !items.is_empty() {
            scroll_height = (items.len() - 1) * item_height;
        }

        // line break - hacky way of centering the text in each cell
        let mut line_break_count = item_height / 2;
        let mut line_breaks = String::from("");

        if line_break_count > 1 && line_break_count % 2 == 0 {
            line_break_count -= 1;
        }

        for _ in 0..line_break_count {
            line_breaks += "\n";
        }

        Self {
            headers,
            column_sizes,
            items,
            item_height,
            centering_breaks: line_breaks,
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(ScrollbarState::new(scroll_height)),
        }
    }

    /// Returns the currently selected row index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    /// Moves selection to the next row.
    pub fn next(&mut self) -> usize {
        let i = match self.table_state.borrow().selected() {
            // don't wrap
            Some(i) => {
                if i + 1 > self.items.len() - 1 {
                    self.items.len() - 1
                } else {
                    i + 1
                }
            }
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));

        let new_scroll_state = self
            .scroll_state
            .borrow_mut()
            .position(i * self.item_height);

        self.scroll_state = RefCell::new(new_scroll_state);

        i
    }

    /// Moves selection to the previous row.
    pub fn previous(&mut self) -> usize {
        let i = match self.table_state.borrow().selected() {
            // prevent wrap with saturating_sub
            Some(i) => i.saturating_sub(1),
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));

        let new_scroll_state = self.scroll_state.borrow().position(i * self.item_height);

        self.scroll_state = RefCell::new(new_scroll_state);

        i
    }
}

impl CustomWidgetRef for Table {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let selected_style = Style::default()
            .fg(ctx.state.colors.input_editing)
            .add_modifier(Modifier::BOLD);

        let rows = self.items.iter().map(|item| {
            item.iter()
                .map(|content| {
                    Cell::from(Text::from(format!(
                        "{}{}",
                        self.centering_breaks, content
                    )))
                })
                .collect::<Row>()
                .style(Style::new().fg(ctx.state.colors.card_fg))
                .height(self.item_height as u16)
        });

        let widths = self
            .column_sizes
            .iter()
            .map(|w| Constraint::Length(*w))
            .collect::<Vec<Constraint>>();

        let mut table = RatatuiTable::new(rows, widths)
            .row_highlight_style(selected_style)
            .highlight_spacing(HighlightSpacing::Always);

        if let Some(headers) = &self.headers {
            let header_row = headers
                .iter()
                .map(|h| Cell::from(Text::from(h.clone())))
                .collect::<Row>()
                .style(
                    Style::new()
                        .fg(ctx.state.colors.label)
                        .add_modifier(Modifier::BOLD),
                )
                .height(1);
            table = table.header(header_row);
        }

        StatefulWidget::render(table, area, buf, &mut self.table_state.borrow_mut());

        let scrollbar = ScrollBar::new();
        scrollbar.render(area, buf, &mut self.scroll_state.borrow_mut(), ctx);
    }
}
