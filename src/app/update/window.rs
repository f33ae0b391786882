//! Window message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::chart_bar::BarEvent;
use crate::ui::widgets::chart_bar::viewport_width;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(size) => {
                tracing::debug!("Main window shown at {:?}", size);
                self.ui.window_size = *size;
                let bar = &mut self.ui.chart_bar;
                bar.handle_event(BarEvent::Resized(viewport_width(size.width)));
                bar.handle_event(BarEvent::Shown);
                Some(self.sync_scroll_position())
            }

            Message::WindowResized(size) => {
                self.ui.window_size = *size;
                self.core.settings.window.width = size.width;
                self.core.settings.window.height = size.height;
                self.ui
                    .chart_bar
                    .handle_event(BarEvent::Resized(viewport_width(size.width)));
                Some(self.sync_scroll_position())
            }

            Message::WindowFocused(focused) => {
                self.ui.window_focused = *focused;
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.chart_hover.tick(Instant::now());
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Saving settings and exiting");
                // no selection notifications while shutting down
                self.ui.chart_bar.disconnect();
                self.persist_settings();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
