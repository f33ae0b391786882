//! UI module for the chart bar application
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI pieces without business logic
//! - **Theme** (`theme`): Colors, gradients and widget styles
//! - **Animation** (`animation`): Hover transitions

pub mod animation;
pub mod icons;
pub mod theme;
pub mod widgets;
