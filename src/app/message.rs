//! Application messages

use star_rating::ui::widgets::StarEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Editable widget ============
    /// Click or hover on the editable star widget
    Star(StarEvent),
    /// Animation frame for the hover highlight
    AnimationTick,

    // ============ Template loading ============
    /// Ratings file finished loading
    RatingsLoaded(Result<Vec<f32>, String>),
    /// Load the ratings file again
    ReloadRatings,

    // ============ Settings ============
    /// Switch between dark and light theme
    ToggleDarkMode(bool),
    /// Switch between English and Chinese
    ToggleLanguage,
}
