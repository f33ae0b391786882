//! Chart bar widget
//!
//! Renders a [`ChartBar`](crate::features::ChartBar) as
//! `[left scroller] [scrolling row of buttons] [right scroller]` on a
//! vertical gradient with hairlines top and bottom.
//!
//! # Design
//!
//! Uses generic Message type; every interaction is reported through a
//! callback so the widget holds no state of its own. Button `i` is wired to
//! `on_select(i)` when the view is built, so indices always match the
//! current order of the model.

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Font, Length, Padding};

use crate::features::chart_bar::{
    BUTTON_FONT_SIZE, BUTTON_SPACING, BarState, ChartButton, SCROLLER_WIDTH,
};
use crate::ui::animation::HoverAnimations;
use crate::ui::{icons, theme};

/// Id of the inner scrollable, used for programmatic scrolling
pub const SCROLL_ID: &str = "chart_bar_scroll";

/// Total bar height including hairlines
pub const BAR_HEIGHT: f32 = 23.0;

/// Horizontal contents margin on each side of the bar
pub const BAR_MARGIN: f32 = 3.0;

const BUTTON_HEIGHT: f32 = 19.0;
const SCROLLER_ICON_SIZE: f32 = 14.0;

/// Builder for the chart bar element
pub struct ChartBarView<'a, Message> {
    buttons: &'a [ChartButton],
    state: BarState,
    focused: bool,
    hover: Option<&'a HoverAnimations<usize>>,
    on_select: Box<dyn Fn(usize) -> Message + 'a>,
    on_hover: Option<HoverCallbacks<'a, Message>>,
    on_scrolled: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_scroll_left: Option<Message>,
    on_scroll_right: Option<Message>,
    on_enter: Option<Message>,
    on_leave: Option<Message>,
}

struct HoverCallbacks<'a, Message> {
    enter: Box<dyn Fn(usize) -> Message + 'a>,
    leave: Box<dyn Fn(usize) -> Message + 'a>,
}

/// Start building a chart bar view
pub fn chart_bar<'a, Message>(
    buttons: &'a [ChartButton],
    state: BarState,
    on_select: impl Fn(usize) -> Message + 'a,
) -> ChartBarView<'a, Message> {
    ChartBarView {
        buttons,
        state,
        focused: true,
        hover: None,
        on_select: Box::new(on_select),
        on_hover: None,
        on_scrolled: None,
        on_scroll_left: None,
        on_scroll_right: None,
        on_enter: None,
        on_leave: None,
    }
}

impl<'a, Message: Clone + 'a> ChartBarView<'a, Message> {
    /// Whether the host window has focus (selects the gradient shade)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Per-button hover fades
    ///
    /// Enter and leave both carry the button index, so a leave that arrives
    /// after the neighbour's enter can be told apart.
    pub fn hover(
        mut self,
        animations: &'a HoverAnimations<usize>,
        on_enter: impl Fn(usize) -> Message + 'a,
        on_leave: impl Fn(usize) -> Message + 'a,
    ) -> Self {
        self.hover = Some(animations);
        self.on_hover = Some(HoverCallbacks {
            enter: Box::new(on_enter),
            leave: Box::new(on_leave),
        });
        self
    }

    /// Report the strip's absolute x offset whenever it scrolls
    pub fn on_scrolled(mut self, on_scrolled: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_scrolled = Some(Box::new(on_scrolled));
        self
    }

    pub fn on_scroll(mut self, left: Message, right: Message) -> Self {
        self.on_scroll_left = Some(left);
        self.on_scroll_right = Some(right);
        self
    }

    /// Pointer entering/leaving the whole bar
    pub fn on_pointer(mut self, enter: Message, leave: Message) -> Self {
        self.on_enter = Some(enter);
        self.on_leave = Some(leave);
        self
    }

    fn chart_button(&self, index: usize, chart: &'a ChartButton) -> Element<'a, Message> {
        let checked = chart.checked;
        let hover_progress = self.hover.map(|h| h.progress(&index)).unwrap_or(0.0);

        let label = container(
            text(chart.label.as_str())
                .size(BUTTON_FONT_SIZE)
                .font(Font {
                    weight: theme::BUTTON_WEIGHT,
                    ..Default::default()
                }),
        )
        .center_x(Fill)
        .center_y(Fill);

        let btn = button(label)
            .width(chart.width)
            .height(BUTTON_HEIGHT)
            .padding(0)
            .style(move |theme, status| theme::chart_button(theme, status, checked, hover_progress))
            .on_press((self.on_select)(index));

        match &self.on_hover {
            Some(on_hover) => mouse_area(btn)
                .on_enter((on_hover.enter)(index))
                .on_exit((on_hover.leave)(index))
                .into(),
            None => btn.into(),
        }
    }

    fn scroller(&self, icon: &'static str, on_press: Option<Message>) -> Element<'a, Message> {
        let arrow = svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(SCROLLER_ICON_SIZE)
            .height(SCROLLER_ICON_SIZE)
            .style(|theme, status| svg::Style {
                color: Some(match status {
                    svg::Status::Hovered => theme::text_primary(theme),
                    _ => theme::text_muted(theme),
                }),
            });

        button(container(arrow).center_x(Fill).center_y(Fill))
            .width(SCROLLER_WIDTH)
            .height(SCROLLER_WIDTH)
            .padding(0)
            .style(theme::scroller_button)
            .on_press_maybe(on_press)
            .into()
    }

    pub fn view(mut self) -> Element<'a, Message> {
        let buttons = row(self
            .buttons
            .iter()
            .enumerate()
            .map(|(index, chart)| self.chart_button(index, chart)))
        .spacing(BUTTON_SPACING)
        .padding(Padding::new(0.0).left(BUTTON_SPACING).right(BUTTON_SPACING))
        .align_y(Alignment::Center);

        let mut strip = scrollable(buttons)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .id(iced::widget::Id::new(SCROLL_ID))
            .width(Fill)
            .height(Fill);

        if let Some(on_scrolled) = self.on_scrolled.take() {
            strip = strip.on_scroll(move |viewport| on_scrolled(viewport.absolute_offset().x));
        }

        let content: Element<'a, Message> = if self.state.scrollers_visible {
            row![
                self.scroller(icons::CHEVRON_LEFT, self.on_scroll_left.clone()),
                strip,
                self.scroller(icons::CHEVRON_RIGHT, self.on_scroll_right.clone()),
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            strip.into()
        };

        let inner_height = Length::Fixed(BAR_HEIGHT - 2.0);
        let focused = self.focused;

        let body = container(content)
            .width(Fill)
            .height(inner_height)
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(BAR_MARGIN).right(BAR_MARGIN));

        let bar = container(column![
            container(Space::new().width(Fill).height(1))
                .style(|theme| theme::hairline(theme::chart_bar_top_line(theme))),
            body,
            container(Space::new().width(Fill).height(1))
                .style(|theme| theme::hairline(theme::chart_bar_bottom_line(theme))),
        ])
        .width(Fill)
        .height(BAR_HEIGHT)
        .style(move |theme| iced::widget::container::Style {
            background: Some(theme::chart_bar_background(theme, focused)),
            ..Default::default()
        });

        match (self.on_enter, self.on_leave) {
            (Some(enter), Some(leave)) => mouse_area(bar).on_enter(enter).on_exit(leave).into(),
            _ => bar.into(),
        }
    }
}

impl<'a, Message: Clone + 'a> From<ChartBarView<'a, Message>> for Element<'a, Message> {
    fn from(view: ChartBarView<'a, Message>) -> Self {
        view.view()
    }
}

/// Viewport width available to the bar's scroll area for a window width
pub fn viewport_width(window_width: f32) -> f32 {
    (window_width - 2.0 * BAR_MARGIN).max(0.0)
}
