//! Hover fade for chart buttons using iced_anim
//!
//! The pointer can only be over one button at a time, so only the hovered
//! button and the one fading out are tracked.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Exclusive hover state with fade in/out
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    /// Currently hovered key (fading in)
    active_key: Option<K>,
    active_anim: Animated<f32>,
    /// Previously hovered key (fading out)
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Set the hovered key; `None` un-hovers everything
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // whatever was hovered starts fading from its current value
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Interpolated hover value for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_hovered(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    /// Un-hover `key` unless another key has already taken over
    pub fn leave(&mut self, key: &K) {
        if self.is_hovered(key) {
            self.set_hovered(None);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Drop all state, e.g. after the keys were re-indexed
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Advance both animations; call on every animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        if self.fading_key.is_some()
            && !self.fading_anim.is_animating()
            && *self.fading_anim.value() < 0.01
        {
            self.fading_key = None;
        }
    }
}
