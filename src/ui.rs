//! UI module: iced rendering for the star rating widget
//!
//! - `widgets`: The star rating view and small demo helpers
//! - `icons`: SVG star icons
//! - `theme`: Colors and styles, including the star palette
//! - `animation`: Hover preview animation

pub mod animation;
pub mod icons;
pub mod theme;
pub mod widgets;
