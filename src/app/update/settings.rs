//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                self.persist_settings();
                Some(Task::none())
            }

            Message::UpdateHoverAnimations(enabled) => {
                self.core.settings.display.hover_animations = *enabled;
                if !enabled {
                    self.ui.chart_hover.clear();
                }
                self.persist_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
