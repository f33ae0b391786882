//! Application state definitions

use std::path::PathBuf;

use iced::Size;

use crate::app::Message;
use crate::features::chart_bar::{BarEvent, ChartBar, FixedAdvance};
use crate::features::Settings;
use crate::ui::animation::HoverAnimations;
use crate::ui::widgets::chart_bar::viewport_width;

/// Main application state
pub struct App {
    /// Settings and services
    pub core: CoreState,
    /// UI state (chart bar, input, window)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    /// Where settings are saved; `None` disables persistence
    pub settings_path: Option<PathBuf>,
}

/// UI state
pub struct UiState {
    pub chart_bar: ChartBar<Message>,
    pub chart_hover: HoverAnimations<usize>,
    /// Chart name being typed
    pub name_input: String,
    pub window_size: Size,
    pub window_focused: bool,
}

impl CoreState {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self {
            settings,
            settings_path,
        }
    }
}

impl UiState {
    /// Build the chart bar from the saved chart list
    pub fn new(settings: &Settings) -> Self {
        let window_size = Size::new(settings.window.width, settings.window.height);

        let mut chart_bar = ChartBar::new(FixedAdvance::default());
        chart_bar.connect(Message::CurrentIndexChanged);
        chart_bar.handle_event(BarEvent::Resized(viewport_width(window_size.width)));
        for name in &settings.charts.names {
            chart_bar.add(name.clone());
        }

        Self {
            chart_bar,
            chart_hover: HoverAnimations::new(),
            name_input: String::new(),
            window_size,
            window_focused: true,
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.chart_hover.is_animating()
    }
}

impl App {
    /// Copy the chart bar contents back into settings
    pub fn sync_chart_settings(&mut self) {
        let charts = &mut self.core.settings.charts;
        charts.names = self
            .ui
            .chart_bar
            .buttons()
            .iter()
            .map(|b| b.label.clone())
            .collect();
        charts.current = self.ui.chart_bar.current_index();
    }

    /// Sync and save settings, logging failures
    pub fn persist_settings(&mut self) {
        self.sync_chart_settings();
        let Some(path) = &self.core.settings_path else {
            return;
        };
        if let Err(e) = self.core.settings.save_to_file(path) {
            tracing::warn!("Failed to save settings to {}: {}", path.display(), e);
        }
    }
}
