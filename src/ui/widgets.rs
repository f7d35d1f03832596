//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine iced's built-in elements into reusable patterns. They
//! take generic Message types or callbacks and never depend on the demo
//! application directly.

pub mod section_header;
pub mod star_rating;

pub use star_rating::{StarEvent, StarRatingStyle};
