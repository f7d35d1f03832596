//! Demo application module
//!
//! One scrollable page with the widget configurations of the demo: basic,
//! with details, custom color, editable and a list loaded from a file.

mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use star_rating::features::{Settings, ratings_source};
use star_rating::i18n::{Key, Language, Locale};

pub use message::Message;
pub use state::App;
use state::{CoreState, UiState};

impl App {
    /// Create new application instance from the saved settings
    pub fn new() -> (Self, Task<Message>) {
        Self::with_settings(Settings::load())
    }

    /// Create new application instance from explicit settings
    pub fn with_settings(settings: Settings) -> (Self, Task<Message>) {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let ui = UiState::new(&settings);
        let ratings_path = settings.demo.ratings_path();

        let app = Self {
            core: CoreState { settings, locale },
            ui,
        };
        tracing::info!("Star rating demo started ({})", locale.language.display_name());

        (app, load_ratings_task(ratings_path))
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Frame subscription while the hover highlight is easing
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_animation_frames(
            self.ui.editable_hover.is_animating(),
            self.core.settings.display.power_saving_mode,
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Load the ratings list in the background
pub(crate) fn load_ratings_task(path: PathBuf) -> Task<Message> {
    Task::perform(ratings_source::load_ratings(path), |result| {
        Message::RatingsLoaded(result.map_err(|e| format!("{:#}", e)))
    })
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_frames(hover_animating: bool, power_saving: bool) -> bool {
        hover_animating && !power_saving
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_only_while_animating() {
        assert!(needs_animation_frames(true, false));
        assert!(!needs_animation_frames(false, false));
    }

    #[test]
    fn power_saving_disables_frames() {
        assert!(!needs_animation_frames(true, true));
        assert!(!needs_animation_frames(false, true));
    }
}
