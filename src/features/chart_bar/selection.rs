//! Click routing for chart buttons
//!
//! Each button reports its own index when clicked; the router checks that
//! index, updates the checked flags and hands the new current index to the
//! one registered listener.

use super::{ChartBarError, ChartButton};

type Listener<T> = Box<dyn Fn(usize) -> T>;

/// Maps button clicks to a single current-index notification
pub struct SelectionRouter<T> {
    listener: Option<Listener<T>>,
}

impl<T> Default for SelectionRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionRouter<T> {
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Register the listener, replacing any previous one
    pub fn connect(&mut self, listener: impl Fn(usize) -> T + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn disconnect(&mut self) {
        self.listener = None;
    }

    /// Check exactly the button at `index` and notify the listener
    ///
    /// Returns the listener's output, or `None` when nothing is connected.
    /// The buttons are left untouched if `index` is out of range.
    pub fn on_button_clicked(
        &self,
        buttons: &mut [ChartButton],
        index: usize,
    ) -> Result<Option<T>, ChartBarError> {
        if index >= buttons.len() {
            return Err(ChartBarError::IndexOutOfRange {
                index,
                len: buttons.len(),
            });
        }

        for (i, button) in buttons.iter_mut().enumerate() {
            button.checked = i == index;
        }

        Ok(self.listener.as_ref().map(|listener| listener(index)))
    }
}
