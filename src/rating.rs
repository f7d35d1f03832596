//! Rating model - framework-free state behind the star widget
//!
//! The model owns the numeric rating and derives the five-slot star
//! sequence from it. Rendering lives in `crate::ui::widgets::star_rating`;
//! nothing in this module depends on iced.
//!
//! Structure:
//! - stars.rs: Star categories and the rating-to-sequence mapping
//! - widget.rs: `RatingWidget` state, setters and change listeners

mod stars;
mod widget;

pub use stars::{
    HALF_STAR_THRESHOLD, MAX_RATING, STAR_COUNT, StarKind, StarSequence, compute_stars,
    sanitize_rating,
};
pub use widget::{ListenerId, RatingChange, RatingWidget};

/// Errors returned by rating interactions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// The widget only displays a rating and does not accept input
    ReadOnly,
    /// A click targeted a star position outside `0..STAR_COUNT`
    StarOutOfRange(usize),
}

impl std::fmt::Display for RatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingError::ReadOnly => write!(f, "rating is read-only"),
            RatingError::StarOutOfRange(index) => write!(
                f,
                "star index {} out of range (0..{})",
                index, STAR_COUNT
            ),
        }
    }
}

impl std::error::Error for RatingError {}
