//! Settings update handlers

use iced::Task;
use star_rating::i18n::Locale;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle theme and language switches, persisting the result
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode(dark_mode) => {
                self.core.settings.display.dark_mode = *dark_mode;
                self.save_settings();
                Some(Task::none())
            }
            Message::ToggleLanguage => {
                let language = self.core.locale.language.toggled();
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                self.save_settings();
                Some(Task::none())
            }
            _ => None,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
