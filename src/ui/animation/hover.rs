//! Hover preview animation for editable star widgets
//!
//! Tracks which star the pointer rests on and eases a highlight in while the
//! pointer is over the widget. Moving between stars keeps the highlight, so
//! only entering and leaving the widget animate.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover animation duration (200ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Create hover easing with custom duration
fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Hovered star position plus its highlight animation
#[derive(Debug)]
pub struct HoverPreview {
    /// Star position under the pointer
    hovered: Option<usize>,
    /// Last hovered position, kept while the highlight fades out
    fading: Option<usize>,
    highlight: Animated<f32>,
}

impl Default for HoverPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverPreview {
    pub fn new() -> Self {
        Self {
            hovered: None,
            fading: None,
            highlight: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move the pointer onto star `index`, or off the widget with `None`
    pub fn set_hovered(&mut self, index: Option<usize>) {
        if self.hovered == index {
            return;
        }

        match (self.hovered, index) {
            // Entered the widget
            (None, Some(_)) => {
                self.fading = None;
                self.highlight.update(1.0.into());
            }
            // Left the widget, keep drawing the last preview while fading
            (Some(old), None) => {
                self.fading = Some(old);
                self.highlight.update(0.0.into());
            }
            // Moved between stars
            _ => {}
        }

        self.hovered = index;
    }

    /// Star position whose preview should be drawn
    pub fn hovered(&self) -> Option<usize> {
        self.hovered.or_else(|| {
            if self.is_animating() {
                self.fading
            } else {
                None
            }
        })
    }

    /// Highlight progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.highlight.value()
    }

    /// Check if the highlight is currently easing
    pub fn is_animating(&self) -> bool {
        self.highlight.is_animating()
    }

    /// Forget the hover state, e.g. after a click committed the rating
    pub fn clear(&mut self) {
        self.hovered = None;
        self.fading = None;
        self.highlight = Animated::transition(0.0, hover_easing());
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.highlight.tick(now);
        if !self.highlight.is_animating() && self.hovered.is_none() {
            self.fading = None;
        }
    }
}
