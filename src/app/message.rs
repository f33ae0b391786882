//! Application messages

use iced::Size;

use crate::features::chart_bar::SharedFontSystem;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Chart Bar ============
    /// Chart button at index was clicked
    ChartClicked(usize),
    /// Selection router notification: the current chart changed
    CurrentIndexChanged(usize),
    /// Left scroller pressed
    ScrollLeft,
    /// Right scroller pressed
    ScrollRight,
    /// The strip was scrolled in the view; carries the absolute x offset
    BarScrolled(f32),
    /// Pointer entered the bar
    BarPointerEntered,
    /// Pointer left the bar
    BarPointerLeft,
    /// Pointer entered the chart button at index
    HoverChart(usize),
    /// Pointer left the chart button at index
    UnhoverChart(usize),

    // ============ Chart Editing ============
    /// Chart name input changed
    NameInputChanged(String),
    /// Append a chart named after the input
    AddChart,
    /// Rename the current chart to the input
    RenameChart,
    /// Remove the current chart
    RemoveChart,
    /// Remove all charts
    ClearCharts,

    // ============ Window ============
    /// Main window opened with its initial size
    WindowOpened(Size),
    /// Main window resized
    WindowResized(Size),
    /// Main window gained or lost focus
    WindowFocused(bool),
    /// Close button pressed
    RequestClose,
    /// Animation frame
    AnimationTick,

    // ============ Fonts ============
    /// System fonts loaded for label measurement
    FontSystemReady(SharedFontSystem),
    /// System fonts could not be loaded
    FontSystemFailed(String),

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateHoverAnimations(bool),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChartClicked(i) => write!(f, "ChartClicked({})", i),
            Self::CurrentIndexChanged(i) => write!(f, "CurrentIndexChanged({})", i),
            Self::ScrollLeft => write!(f, "ScrollLeft"),
            Self::ScrollRight => write!(f, "ScrollRight"),
            Self::BarPointerEntered => write!(f, "BarPointerEntered"),
            Self::BarPointerLeft => write!(f, "BarPointerLeft"),
            Self::BarScrolled(x) => write!(f, "BarScrolled({})", x),
            Self::HoverChart(i) => write!(f, "HoverChart({})", i),
            Self::UnhoverChart(i) => write!(f, "UnhoverChart({})", i),
            Self::NameInputChanged(s) => write!(f, "NameInputChanged({:?})", s),
            Self::AddChart => write!(f, "AddChart"),
            Self::RenameChart => write!(f, "RenameChart"),
            Self::RemoveChart => write!(f, "RemoveChart"),
            Self::ClearCharts => write!(f, "ClearCharts"),
            Self::WindowOpened(size) => write!(f, "WindowOpened({:?})", size),
            Self::WindowResized(size) => write!(f, "WindowResized({:?})", size),
            Self::WindowFocused(focused) => write!(f, "WindowFocused({})", focused),
            Self::RequestClose => write!(f, "RequestClose"),
            Self::AnimationTick => write!(f, "AnimationTick"),
            Self::FontSystemReady(_) => write!(f, "FontSystemReady(..)"),
            Self::FontSystemFailed(e) => write!(f, "FontSystemFailed({})", e),
            Self::UpdateDarkMode(v) => write!(f, "UpdateDarkMode({})", v),
            Self::UpdateHoverAnimations(v) => write!(f, "UpdateHoverAnimations({})", v),
        }
    }
}
