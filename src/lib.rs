//! star-rating - a five-star rating display/input widget for iced
//!
//! The rating model (`rating`) is framework-free: it derives the star
//! sequence, enforces the input rules and notifies listeners. The `ui`
//! module draws it with iced.

pub mod features;
pub mod i18n;
pub mod rating;
pub mod ui;

pub use rating::{RatingChange, RatingError, RatingWidget, StarKind, StarSequence, compute_stars};
