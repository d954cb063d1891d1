use std::sync::mpsc::Sender;

use ratatui::{crossterm::event::Event, layout::Rect};

use crate::ui::{
    events::types::Event as AppEvent,
    store::state::{State, ViewID},
};

/// Render context handed to every widget: a state snapshot, the total
/// app area (for popover math), and a channel into the event loop.
pub struct CustomWidgetContext {
    pub state: State,
    pub app_area: Rect,
    pub events: Sender<AppEvent>,
}

pub trait EventHandler {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool;
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized;
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> &str {
        ""
    }
    fn override_main_legend(&self, _state: &State) -> bool {
        false
    }
}
