//! Animation helpers built on `iced_anim`

mod hover;

pub use hover::HoverAnimations;
