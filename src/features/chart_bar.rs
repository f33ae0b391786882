//! Chart bar state - the scrollable row of chart buttons
//!
//! Owns the ordered button list, the selection, the viewport/content
//! geometry and the horizontal scroll offset. Rendering lives in
//! `crate::ui::widgets::chart_bar`; this module has no iced dependency so
//! every operation can be exercised without a window.

mod metrics;
mod selection;

pub use metrics::{BUTTON_FONT_SIZE, FixedAdvance, ShapedMetrics, SharedFontSystem, TextMetrics};
pub use selection::SelectionRouter;

/// Horizontal padding added to the measured label width
pub const BUTTON_PADDING: f32 = 20.0;

/// Gap between neighbouring buttons (also used as the leading gap)
pub const BUTTON_SPACING: f32 = 2.0;

/// Amount a single scroller click moves the viewport
pub const SCROLL_STEP: f32 = 120.0;

/// Width of one scroller control
pub const SCROLLER_WIDTH: f32 = 20.0;

/// A single selectable chart button
#[derive(Debug, Clone, PartialEq)]
pub struct ChartButton {
    pub label: String,
    /// Fixed display width (label width + padding)
    pub width: f32,
    pub checked: bool,
}

impl ChartButton {
    fn new(label: String, metrics: &dyn TextMetrics) -> Self {
        let width = button_width(&label, metrics);
        Self {
            label,
            width,
            checked: false,
        }
    }
}

fn button_width(label: &str, metrics: &dyn TextMetrics) -> f32 {
    metrics.measure(label).ceil() + BUTTON_PADDING
}

/// Layout snapshot produced by [`ChartBar::recompute_layout`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarState {
    /// Leading gap + sum of button widths and spacing
    pub content_width: f32,
    /// Width available to the scroll area
    pub viewport_width: f32,
    pub scrollers_visible: bool,
}

impl BarState {
    /// Width actually showing buttons once the scrollers take their room
    pub fn visible_width(&self) -> f32 {
        if self.scrollers_visible {
            (self.viewport_width - 2.0 * SCROLLER_WIDTH).max(0.0)
        } else {
            self.viewport_width
        }
    }

    /// Largest valid scroll offset
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.visible_width()).max(0.0)
    }
}

/// Host events that trigger a tidy-up of the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarEvent {
    /// The bar was resized; carries the new viewport width
    Resized(f32),
    Shown,
    PointerEntered,
    PointerLeft,
}

/// Errors reported by chart bar operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartBarError {
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ChartBarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartBarError::IndexOutOfRange { index, len } => {
                write!(f, "Button index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for ChartBarError {}

/// Scrollable bar of mutually exclusive chart buttons
///
/// `T` is the notification type produced by the [`SelectionRouter`] when
/// the current index changes (the application `Message` in the host).
pub struct ChartBar<T> {
    buttons: Vec<ChartButton>,
    state: BarState,
    scroll_offset: f32,
    metrics: Box<dyn TextMetrics>,
    router: SelectionRouter<T>,
}

impl<T> std::fmt::Debug for ChartBar<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBar")
            .field("buttons", &self.buttons)
            .field("state", &self.state)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl<T> ChartBar<T> {
    /// Create an empty bar measuring labels with `metrics`
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self {
            buttons: Vec::new(),
            state: BarState::default(),
            scroll_offset: 0.0,
            metrics: Box::new(metrics),
            router: SelectionRouter::new(),
        }
    }

    /// Register the single listener for current index changes
    pub fn connect(&mut self, listener: impl Fn(usize) -> T + 'static) {
        self.router.connect(listener);
    }

    /// Drop the listener; selections still update the checked flags
    pub fn disconnect(&mut self) {
        self.router.disconnect();
    }

    pub fn buttons(&self) -> &[ChartButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn state(&self) -> BarState {
        self.state
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Index of the checked button, if any
    pub fn current_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.checked)
    }

    /// Label of the checked button, if any
    pub fn current_label(&self) -> Option<&str> {
        self.current_index().map(|i| self.buttons[i].label.as_str())
    }

    /// Append a button; returns its index
    pub fn add(&mut self, label: impl Into<String>) -> usize {
        let button = ChartButton::new(label.into(), self.metrics.as_ref());
        tracing::debug!("Adding chart button {:?} ({}px)", button.label, button.width);
        self.buttons.push(button);
        self.recompute_layout();
        self.buttons.len() - 1
    }

    /// Relabel and resize the button at `index`
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), ChartBarError> {
        self.check_index(index)?;
        let label = text.into();
        let width = button_width(&label, self.metrics.as_ref());
        let button = &mut self.buttons[index];
        button.label = label;
        button.width = width;
        self.recompute_layout();
        Ok(())
    }

    /// Remove the button at `index`; later buttons shift down by one
    pub fn remove(&mut self, index: usize) -> Result<ChartButton, ChartBarError> {
        self.check_index(index)?;
        let removed = self.buttons.remove(index);
        tracing::debug!("Removed chart button {:?} at {}", removed.label, index);
        self.recompute_layout();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
        self.scroll_offset = 0.0;
        self.recompute_layout();
    }

    /// Make `index` the current button and notify the listener
    pub fn select(&mut self, index: usize) -> Result<Option<T>, ChartBarError> {
        self.router.on_button_clicked(&mut self.buttons, index)
    }

    /// Re-measure every label, e.g. once real font metrics are available
    pub fn remeasure(&mut self, metrics: impl TextMetrics + 'static) {
        self.metrics = Box::new(metrics);
        for button in &mut self.buttons {
            button.width = button_width(&button.label, self.metrics.as_ref());
        }
        self.recompute_layout();
    }

    /// Route a host event to the tidy-up logic
    pub fn handle_event(&mut self, event: BarEvent) {
        if let BarEvent::Resized(width) = event {
            // position is kept; only scroller visibility changes
            self.state.viewport_width = width.max(0.0);
        }
        self.recompute_layout();
    }

    /// Recompute content width and scroller visibility
    pub fn recompute_layout(&mut self) -> BarState {
        let content_width = BUTTON_SPACING
            + self
                .buttons
                .iter()
                .map(|b| b.width + BUTTON_SPACING)
                .sum::<f32>();

        let scrollers_visible = content_width > self.state.viewport_width;
        if scrollers_visible != self.state.scrollers_visible {
            tracing::debug!(
                "Chart bar scrollers {} (content {}px, viewport {}px)",
                if scrollers_visible { "shown" } else { "hidden" },
                content_width,
                self.state.viewport_width
            );
        }

        self.state.content_width = content_width;
        self.state.scrollers_visible = scrollers_visible;
        self.scroll_offset = if scrollers_visible {
            self.scroll_offset.clamp(0.0, self.state.max_offset())
        } else {
            0.0
        };
        self.state
    }

    /// Adopt an offset reported by the view, e.g. after wheel scrolling
    pub fn set_scroll_offset(&mut self, offset: f32) -> f32 {
        self.scroll_offset = if self.state.scrollers_visible {
            offset.clamp(0.0, self.state.max_offset())
        } else {
            0.0
        };
        self.scroll_offset
    }

    /// Move the viewport towards the first button; returns the new offset
    pub fn scroll_left(&mut self) -> f32 {
        self.scroll_offset = (self.scroll_offset - SCROLL_STEP).max(0.0);
        self.scroll_offset
    }

    /// Move the viewport towards the last button; returns the new offset
    pub fn scroll_right(&mut self) -> f32 {
        self.scroll_offset = (self.scroll_offset + SCROLL_STEP).min(self.state.max_offset());
        self.scroll_offset
    }

    fn check_index(&self, index: usize) -> Result<(), ChartBarError> {
        if index < self.buttons.len() {
            Ok(())
        } else {
            Err(ChartBarError::IndexOutOfRange {
                index,
                len: self.buttons.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10px per character so widths are easy to reason about
    fn bar() -> ChartBar<usize> {
        let mut bar = ChartBar::new(FixedAdvance::new(10.0));
        bar.connect(|index| index);
        bar
    }

    fn checked(bar: &ChartBar<usize>) -> Vec<usize> {
        bar.buttons()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.checked)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut bar = bar();
        for label in ["Home", "Diary", "Analysis", "Train"] {
            bar.add(label);
        }
        assert_eq!(bar.len(), 4);
        let labels: Vec<_> = bar.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Diary", "Analysis", "Train"]);
        assert_eq!(bar.buttons()[0].width, 40.0 + BUTTON_PADDING);
    }

    #[test]
    fn test_select_scenario() {
        let mut bar = bar();
        bar.add("A");
        bar.add("B");

        let emitted = bar.select(1).unwrap();
        assert_eq!(emitted, Some(1));
        assert!(bar.buttons()[1].checked);
        assert!(!bar.buttons()[0].checked);
        assert_eq!(bar.current_index(), Some(1));
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut bar = bar();
        for label in ["A", "B", "C"] {
            bar.add(label);
        }
        bar.select(0).unwrap();
        bar.select(2).unwrap();
        assert_eq!(checked(&bar), vec![2]);
    }

    #[test]
    fn test_out_of_range_errors() {
        let mut bar = bar();
        bar.add("A");

        let err = ChartBarError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(bar.select(3).unwrap_err(), err);
        assert_eq!(bar.set_text(3, "X").unwrap_err(), err);
        assert_eq!(bar.remove(3).unwrap_err(), err);
        assert_eq!(bar.len(), 1);
        assert!(checked(&bar).is_empty());
    }

    #[test]
    fn test_remove_reindexes() {
        let mut bar = bar();
        for label in ["A", "B", "C", "D"] {
            bar.add(label);
        }
        bar.select(3).unwrap();

        let removed = bar.remove(1).unwrap();
        assert_eq!(removed.label, "B");
        assert_eq!(bar.len(), 3);
        // checked state travels with its button
        assert_eq!(bar.current_index(), Some(2));
        assert_eq!(bar.current_label(), Some("D"));

        // clicking the new index 1 now means "C"
        assert_eq!(bar.select(1).unwrap(), Some(1));
        assert_eq!(bar.current_label(), Some("C"));
    }

    #[test]
    fn test_remove_checked_leaves_none() {
        let mut bar = bar();
        bar.add("A");
        bar.add("B");
        bar.select(0).unwrap();
        bar.remove(0).unwrap();
        assert_eq!(bar.current_index(), None);
    }

    #[test]
    fn test_scrollers_follow_content_width() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(100.0));
        assert!(!bar.state().scrollers_visible);

        // 2 + (30 + 2) = 34
        bar.add("A");
        assert_eq!(bar.state().content_width, 34.0);
        assert!(!bar.state().scrollers_visible);

        // 34 + 32 + 32 = 98, still fits
        bar.add("B");
        bar.add("C");
        assert_eq!(bar.state().content_width, 98.0);
        assert!(!bar.state().scrollers_visible);

        bar.add("D");
        assert_eq!(bar.state().content_width, 130.0);
        assert!(bar.state().scrollers_visible);

        bar.handle_event(BarEvent::Resized(130.0));
        assert!(!bar.state().scrollers_visible);
    }

    #[test]
    fn test_set_text_resizes() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(60.0));
        bar.add("A");
        assert!(!bar.state().scrollers_visible);

        bar.set_text(0, "Critical Power").unwrap();
        assert_eq!(bar.buttons()[0].label, "Critical Power");
        assert_eq!(bar.buttons()[0].width, 140.0 + BUTTON_PADDING);
        assert!(bar.state().scrollers_visible);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(200.0));
        for _ in 0..10 {
            bar.add("Chart");
        }
        // 10 * (70 + 2) + 2 = 722, visible = 200 - 40 = 160
        let max = bar.state().max_offset();
        assert_eq!(max, 562.0);

        assert_eq!(bar.scroll_left(), 0.0);
        assert_eq!(bar.scroll_right(), SCROLL_STEP);
        for _ in 0..10 {
            bar.scroll_right();
        }
        assert_eq!(bar.scroll_offset(), max);
        bar.scroll_left();
        assert_eq!(bar.scroll_offset(), max - SCROLL_STEP);
    }

    #[test]
    fn test_hiding_scrollers_resets_offset() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(100.0));
        for _ in 0..5 {
            bar.add("Chart");
        }
        bar.scroll_right();
        assert!(bar.scroll_offset() > 0.0);

        bar.handle_event(BarEvent::Resized(1000.0));
        assert_eq!(bar.scroll_offset(), 0.0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(150.0));
        for _ in 0..6 {
            bar.add("Chart");
        }
        for _ in 0..10 {
            bar.scroll_right();
        }
        bar.remove(0).unwrap();
        bar.handle_event(BarEvent::PointerLeft);
        assert!(bar.scroll_offset() <= bar.state().max_offset());
    }

    #[test]
    fn test_show_and_enter_recompute_stale_layout() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(100.0));
        bar.add("A");
        assert!(!bar.state().scrollers_visible);

        // grow the content behind the bar's back, as a relabel would
        bar.buttons[0].width = 300.0;
        assert!(!bar.state().scrollers_visible);

        bar.handle_event(BarEvent::Shown);
        assert!(bar.state().scrollers_visible);
        assert_eq!(bar.state().content_width, 304.0);

        bar.buttons[0].width = 30.0;
        bar.handle_event(BarEvent::PointerEntered);
        assert!(!bar.state().scrollers_visible);
        assert_eq!(bar.state().content_width, 34.0);
    }

    #[test]
    fn test_reported_offset_is_clamped() {
        let mut bar = bar();
        bar.handle_event(BarEvent::Resized(200.0));
        assert_eq!(bar.set_scroll_offset(50.0), 0.0);

        for _ in 0..10 {
            bar.add("Chart");
        }
        assert_eq!(bar.set_scroll_offset(300.0), 300.0);
        assert_eq!(bar.set_scroll_offset(9000.0), 562.0);
        assert_eq!(bar.set_scroll_offset(-5.0), 0.0);

        // a wheel scroll to the end, then one step back
        bar.set_scroll_offset(562.0);
        assert_eq!(bar.scroll_left(), 562.0 - SCROLL_STEP);
    }

    #[test]
    fn test_disconnect() {
        let mut bar = bar();
        bar.add("A");
        bar.add("B");
        assert_eq!(bar.select(1).unwrap(), Some(1));

        bar.disconnect();
        assert_eq!(bar.select(0).unwrap(), None);
        assert_eq!(bar.current_index(), Some(0));
    }

    #[test]
    fn test_clear() {
        let mut bar = bar();
        bar.add("A");
        bar.add("B");
        bar.select(0).unwrap();
        bar.clear();
        assert!(bar.is_empty());
        assert_eq!(bar.current_index(), None);
        assert_eq!(bar.state().content_width, BUTTON_SPACING);
    }

    #[test]
    fn test_remeasure() {
        let mut bar = bar();
        bar.add("Ride");
        bar.remeasure(FixedAdvance::new(5.0));
        assert_eq!(bar.buttons()[0].width, 20.0 + BUTTON_PADDING);
        assert_eq!(bar.state().content_width, 2.0 + 40.0 + 2.0);
    }
}
