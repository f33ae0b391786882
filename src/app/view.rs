//! Application view

use iced::widget::{Space, button, column, container, row, text, text_input, toggler};
use iced::{Alignment, Element, Fill, Padding};

use super::{App, Message};
use crate::ui::theme;
use crate::ui::widgets::chart_bar;

impl App {
    /// Build the main window: chart bar on top, current chart below
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let bar = chart_bar(
            self.ui.chart_bar.buttons(),
            self.ui.chart_bar.state(),
            Message::ChartClicked,
        )
        .focused(self.ui.window_focused)
        .hover(&self.ui.chart_hover, Message::HoverChart, Message::UnhoverChart)
        .on_scroll(Message::ScrollLeft, Message::ScrollRight)
        .on_scrolled(Message::BarScrolled)
        .on_pointer(Message::BarPointerEntered, Message::BarPointerLeft);

        let page = container(
            column![self.current_chart_view(), self.controls_view()]
                .spacing(24)
                .max_width(640),
        )
        .padding(Padding::new(32.0))
        .center_x(Fill)
        .height(Fill);

        container(column![bar, page])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }

    fn current_chart_view(&self) -> Element<'_, Message> {
        let title = match self.ui.chart_bar.current_label() {
            Some(label) => text(label).size(28),
            None => text("No chart selected")
                .size(28)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        };

        let summary = text(format!(
            "{} charts, {:.0}px of {:.0}px",
            self.ui.chart_bar.len(),
            self.ui.chart_bar.state().content_width,
            self.ui.chart_bar.state().viewport_width,
        ))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        column![title, summary].spacing(6).into()
    }

    fn controls_view(&self) -> Element<'_, Message> {
        let has_name = !self.ui.name_input.trim().is_empty();
        let has_current = self.ui.chart_bar.current_index().is_some();

        let input = text_input("Chart name", &self.ui.name_input)
            .on_input(Message::NameInputChanged)
            .on_submit(Message::AddChart)
            .padding(8)
            .size(14);

        let actions = row![
            button(text("Add").size(14))
                .padding(Padding::new(6.0).left(14.0).right(14.0))
                .style(theme::primary_button)
                .on_press_maybe(has_name.then_some(Message::AddChart)),
            button(text("Rename").size(14))
                .padding(Padding::new(6.0).left(14.0).right(14.0))
                .style(theme::secondary_button)
                .on_press_maybe((has_name && has_current).then_some(Message::RenameChart)),
            button(text("Remove").size(14))
                .padding(Padding::new(6.0).left(14.0).right(14.0))
                .style(theme::secondary_button)
                .on_press_maybe(has_current.then_some(Message::RemoveChart)),
            Space::new().width(Fill),
            button(text("Clear").size(14))
                .padding(Padding::new(6.0).left(14.0).right(14.0))
                .style(theme::secondary_button)
                .on_press_maybe((!self.ui.chart_bar.is_empty()).then_some(Message::ClearCharts)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let display = &self.core.settings.display;
        let toggles = row![
            text("Dark mode").size(13),
            toggler(display.dark_mode)
                .on_toggle(Message::UpdateDarkMode)
                .size(20),
            Space::new().width(24),
            text("Hover animations").size(13),
            toggler(display.hover_animations)
                .on_toggle(Message::UpdateHoverAnimations)
                .size(20),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(column![input, actions, toggles].spacing(16))
            .padding(Padding::new(16.0))
            .width(Fill)
            .style(theme::controls_panel)
            .into()
    }
}
