//! Chart bar message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::chart_bar::{BarEvent, ChartBarError, ShapedMetrics};
use crate::ui::widgets::SCROLL_ID;

impl App {
    /// Handle chart bar and chart editing messages
    pub fn handle_chart_bar(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ChartClicked(index) => Some(self.select_chart(*index)),

            Message::CurrentIndexChanged(index) => {
                tracing::info!(
                    "Current chart changed to {} ({:?})",
                    index,
                    self.ui.chart_bar.current_label()
                );
                self.persist_settings();
                Some(Task::none())
            }

            Message::ScrollLeft => {
                self.ui.chart_bar.scroll_left();
                Some(self.sync_scroll_position())
            }

            Message::ScrollRight => {
                self.ui.chart_bar.scroll_right();
                Some(self.sync_scroll_position())
            }

            Message::BarScrolled(x) => {
                self.ui.chart_bar.set_scroll_offset(*x);
                Some(Task::none())
            }

            Message::BarPointerEntered => {
                self.ui.chart_bar.handle_event(BarEvent::PointerEntered);
                Some(Task::none())
            }

            Message::BarPointerLeft => {
                self.ui.chart_bar.handle_event(BarEvent::PointerLeft);
                self.ui.chart_hover.set_hovered(None);
                Some(Task::none())
            }

            Message::HoverChart(index) => {
                if self.core.settings.display.hover_animations {
                    self.ui.chart_hover.set_hovered(Some(*index));
                }
                Some(Task::none())
            }

            Message::UnhoverChart(index) => {
                self.ui.chart_hover.leave(index);
                Some(Task::none())
            }

            Message::NameInputChanged(value) => {
                self.ui.name_input = value.clone();
                Some(Task::none())
            }

            Message::AddChart => {
                let Some(name) = self.take_name_input() else {
                    return Some(Task::none());
                };
                let index = self.ui.chart_bar.add(name);
                self.persist_settings();

                // first chart becomes current
                let select = if self.ui.chart_bar.current_index().is_none() {
                    self.select_chart(index)
                } else {
                    Task::none()
                };
                Some(Task::batch([select, self.sync_scroll_position()]))
            }

            Message::RenameChart => {
                let Some(index) = self.ui.chart_bar.current_index() else {
                    return Some(Task::none());
                };
                let Some(name) = self.take_name_input() else {
                    return Some(Task::none());
                };
                if let Err(e) = self.ui.chart_bar.set_text(index, name) {
                    log_rejected("rename", &e);
                }
                self.persist_settings();
                Some(self.sync_scroll_position())
            }

            Message::RemoveChart => {
                let Some(index) = self.ui.chart_bar.current_index() else {
                    return Some(Task::none());
                };
                match self.ui.chart_bar.remove(index) {
                    Ok(removed) => tracing::info!("Removed chart {:?}", removed.label),
                    Err(e) => {
                        log_rejected("remove", &e);
                        return Some(Task::none());
                    }
                }
                // hover keys are indices, which just shifted
                self.ui.chart_hover.clear();
                self.persist_settings();

                let select = if self.ui.chart_bar.is_empty() {
                    Task::none()
                } else {
                    let next = index.min(self.ui.chart_bar.len() - 1);
                    self.select_chart(next)
                };
                Some(Task::batch([select, self.sync_scroll_position()]))
            }

            Message::ClearCharts => {
                self.ui.chart_bar.clear();
                self.ui.chart_hover.clear();
                self.persist_settings();
                Some(self.sync_scroll_position())
            }

            Message::FontSystemReady(font_system) => {
                tracing::info!("Re-measuring chart labels with system fonts");
                self.ui
                    .chart_bar
                    .remeasure(ShapedMetrics::new(font_system.clone()));
                Some(self.sync_scroll_position())
            }

            Message::FontSystemFailed(error) => {
                tracing::warn!("Keeping estimated label widths: {}", error);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Select through the router and forward its notification
    fn select_chart(&mut self, index: usize) -> Task<Message> {
        match self.ui.chart_bar.select(index) {
            Ok(Some(notification)) => Task::done(notification),
            Ok(None) => Task::none(),
            Err(e) => {
                log_rejected("select", &e);
                Task::none()
            }
        }
    }

    /// Move the scrollable to the absolute offset held by the chart bar
    ///
    /// Returned after every change to the buttons or the viewport, since the
    /// scrollable would otherwise keep its old position against new content.
    pub(super) fn sync_scroll_position(&self) -> Task<Message> {
        iced::widget::operation::scroll_to(
            iced::widget::Id::new(SCROLL_ID),
            iced::widget::scrollable::AbsoluteOffset {
                x: Some(self.ui.chart_bar.scroll_offset()),
                y: Some(0.0),
            },
        )
    }

    /// Trimmed chart name from the input, clearing it
    fn take_name_input(&mut self) -> Option<String> {
        let name = self.ui.name_input.trim().to_string();
        if name.is_empty() {
            return None;
        }
        self.ui.name_input.clear();
        Some(name)
    }
}

fn log_rejected(operation: &str, error: &ChartBarError) {
    tracing::warn!("Chart {} rejected: {}", operation, error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::features::chart_bar::SCROLL_STEP;

    fn app(names: &[&str], current: Option<usize>) -> App {
        let mut settings = Settings::default();
        settings.charts.names = names.iter().map(|n| n.to_string()).collect();
        settings.charts.current = current;
        App::with_settings(settings, None).0
    }

    fn labels(app: &App) -> Vec<&str> {
        app.ui
            .chart_bar
            .buttons()
            .iter()
            .map(|b| b.label.as_str())
            .collect()
    }

    #[test]
    fn test_restores_saved_selection() {
        let app = app(&["Home", "Diary", "Analysis"], Some(2));
        assert_eq!(app.ui.chart_bar.current_index(), Some(2));
    }

    #[test]
    fn test_invalid_saved_selection_is_ignored() {
        let app = app(&["Home"], Some(7));
        assert_eq!(app.ui.chart_bar.current_index(), None);
    }

    #[test]
    fn test_click_selects_and_syncs_settings() {
        let mut app = app(&["A", "B"], None);
        let _ = app.update(Message::ChartClicked(1));
        assert_eq!(app.ui.chart_bar.current_index(), Some(1));

        let _ = app.update(Message::CurrentIndexChanged(1));
        assert_eq!(app.core.settings.charts.current, Some(1));
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut app = app(&["A", "B"], Some(0));
        let _ = app.update(Message::ChartClicked(9));
        assert_eq!(app.ui.chart_bar.current_index(), Some(0));
    }

    #[test]
    fn test_add_uses_trimmed_input() {
        let mut app = app(&[], None);
        let _ = app.update(Message::NameInputChanged("  Ride  ".to_string()));
        let _ = app.update(Message::AddChart);
        assert_eq!(labels(&app), ["Ride"]);
        assert_eq!(app.ui.chart_bar.current_index(), Some(0));
        assert!(app.ui.name_input.is_empty());

        // blank input adds nothing
        let _ = app.update(Message::NameInputChanged("   ".to_string()));
        let _ = app.update(Message::AddChart);
        assert_eq!(app.ui.chart_bar.len(), 1);
    }

    #[test]
    fn test_rename_current() {
        let mut app = app(&["A", "B"], Some(1));
        let _ = app.update(Message::NameInputChanged("Power".to_string()));
        let _ = app.update(Message::RenameChart);
        assert_eq!(labels(&app), ["A", "Power"]);
        assert_eq!(app.core.settings.charts.names, ["A", "Power"]);
    }

    #[test]
    fn test_remove_current_selects_neighbour() {
        let mut app = app(&["A", "B", "C"], Some(2));
        let _ = app.update(Message::RemoveChart);
        assert_eq!(labels(&app), ["A", "B"]);
        assert_eq!(app.ui.chart_bar.current_index(), Some(1));

        let _ = app.update(Message::ChartClicked(0));
        let _ = app.update(Message::RemoveChart);
        assert_eq!(labels(&app), ["B"]);
        assert_eq!(app.ui.chart_bar.current_index(), Some(0));
    }

    #[test]
    fn test_clear() {
        let mut app = app(&["A", "B"], Some(0));
        let _ = app.update(Message::ClearCharts);
        assert!(app.ui.chart_bar.is_empty());
        assert!(app.core.settings.charts.names.is_empty());
        assert_eq!(app.core.settings.charts.current, None);
    }

    #[test]
    fn test_scrollers_track_window_width() {
        let names = ["Home", "Diary", "Analysis", "Train", "Critical Power"];
        let mut app = app(&names, None);

        let _ = app.update(Message::WindowResized(iced::Size::new(2000.0, 600.0)));
        assert!(!app.ui.chart_bar.state().scrollers_visible);

        let _ = app.update(Message::WindowResized(iced::Size::new(120.0, 600.0)));
        assert!(app.ui.chart_bar.state().scrollers_visible);

        let _ = app.update(Message::ScrollRight);
        assert!(app.ui.chart_bar.scroll_offset() > 0.0);
        let _ = app.update(Message::ScrollLeft);
        assert_eq!(app.ui.chart_bar.scroll_offset(), 0.0);
    }

    /// Ten 10-character charts in a 206px window: visible 160px
    fn scrolled_app() -> App {
        let names = ["Chart Name"; 10];
        let mut app = app(&names, Some(0));
        let _ = app.update(Message::WindowResized(iced::Size::new(206.0, 600.0)));
        app.ui.chart_bar.remeasure(crate::features::chart_bar::FixedAdvance::new(5.0));
        app
    }

    #[test]
    fn test_wheel_scroll_updates_offset() {
        let mut app = scrolled_app();
        let max = app.ui.chart_bar.state().max_offset();
        assert!(max > 200.0);

        let _ = app.update(Message::BarScrolled(max));
        assert_eq!(app.ui.chart_bar.scroll_offset(), max);

        // one step back from the wheel position, not from the start
        let _ = app.update(Message::ScrollLeft);
        assert_eq!(app.ui.chart_bar.scroll_offset(), max - SCROLL_STEP);

        let _ = app.update(Message::BarScrolled(max * 4.0));
        assert_eq!(app.ui.chart_bar.scroll_offset(), max);
    }

    #[test]
    fn test_edits_keep_offset_in_range() {
        let mut app = scrolled_app();
        let max = app.ui.chart_bar.state().max_offset();
        let _ = app.update(Message::BarScrolled(max));

        // growing the content keeps the absolute position
        let _ = app.update(Message::NameInputChanged("Critical Power".to_string()));
        let _ = app.update(Message::AddChart);
        assert!(app.ui.chart_bar.state().max_offset() > max);
        assert_eq!(app.ui.chart_bar.scroll_offset(), max);
        let _ = app.update(Message::ScrollLeft);
        assert_eq!(app.ui.chart_bar.scroll_offset(), max - SCROLL_STEP);

        // shrinking it pulls the position back inside
        let _ = app.update(Message::BarScrolled(f32::MAX));
        let _ = app.update(Message::NameInputChanged("X".to_string()));
        let _ = app.update(Message::RenameChart);
        let _ = app.update(Message::RemoveChart);
        let state = app.ui.chart_bar.state();
        assert!(app.ui.chart_bar.scroll_offset() <= state.max_offset());

        let _ = app.update(Message::ClearCharts);
        assert_eq!(app.ui.chart_bar.scroll_offset(), 0.0);
    }

    #[test]
    fn test_late_unhover_keeps_neighbour_hovered() {
        let mut app = app(&["A", "B"], None);
        let _ = app.update(Message::HoverChart(1));
        let _ = app.update(Message::HoverChart(0));
        let _ = app.update(Message::UnhoverChart(1));
        assert!(app.ui.chart_hover.is_hovered(&0));

        let _ = app.update(Message::UnhoverChart(0));
        assert!(!app.ui.chart_hover.is_hovered(&0));
    }
}
