//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly; interactions are
//! reported through generic Message callbacks.

pub mod chart_bar;

pub use chart_bar::{SCROLL_ID, chart_bar};
