//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance from the saved settings
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let (app, boot) = Self::with_settings(settings, Settings::file_path());

        // 1. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: app.ui.window_size,
            min_size: Some(iced::Size::new(240.0, 160.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "chartbar".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 2. Load system fonts off the UI thread
        let init_task = Task::batch([
            open_window.discard(),
            boot,
            Task::perform(helpers::init_font_system(), |result| match result {
                Ok(font_system) => Message::FontSystemReady(font_system),
                Err(e) => Message::FontSystemFailed(e.to_string()),
            }),
        ]);

        (app, init_task)
    }

    /// Build the state without opening a window
    ///
    /// The returned task announces the restored selection.
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> (Self, Task<Message>) {
        let ui = UiState::new(&settings);
        let restored = settings.charts.current;
        let mut app = Self {
            core: CoreState::new(settings, settings_path),
            ui,
        };

        let boot = match restored.map(|index| app.ui.chart_bar.select(index)) {
            Some(Ok(Some(message))) => Task::done(message),
            Some(Err(e)) => {
                tracing::warn!("Ignoring saved chart selection: {}", e);
                Task::none()
            }
            _ => Task::none(),
        };

        (app, boot)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title follows the current chart
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match self.ui.chart_bar.current_label() {
            Some(label) => format!("Chartbar - {}", label),
            None => "Chartbar".to_string(),
        }
    }

    /// Subscriptions for window events and hover animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Window lifecycle and focus
        let window_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Window(iced::window::Event::Opened { size, .. }) => {
                Some(Message::WindowOpened(size))
            }
            iced::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused(true)),
            iced::Event::Window(iced::window::Event::Unfocused) => {
                Some(Message::WindowFocused(false))
            }
            _ => None,
        });

        // 2. Resize and close
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 3. Animation subscription (only while a hover fade runs)
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([window_sub, resize_sub, close_request_sub, animation_sub])
    }
}
